//! Ataxx GUI
//!
//! A graphical interface for playing Ataxx against the AI or another player.

use ataxx::ui::AtaxxApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Ataxx"),
        ..Default::default()
    };

    eframe::run_native(
        "Ataxx",
        options,
        Box::new(|cc| Ok(Box::new(AtaxxApp::new(cc)))),
    )
}
