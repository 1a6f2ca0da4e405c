//! Main application for the Ataxx GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardView, Overlay};
use super::game_state::{result_text, GameMode, GameState};
use super::theme::*;
use crate::config::MAX_SUPPORTED_DEPTH;
use crate::{PieceColor, JUMP_LIMIT};

/// Main Ataxx application
pub struct AtaxxApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for AtaxxApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl AtaxxApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start over in `mode`, keeping the AI depth
    fn new_game(&mut self, mode: GameMode) {
        let depth = self.state.ai_depth();
        self.state = GameState::new(mode);
        self.state.set_ai_depth(depth);
        self.state.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Red)").clicked() {
                        self.new_game(GameMode::PvE {
                            human_color: PieceColor::Red,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Blue)").clicked() {
                        self.new_game(GameMode::PvE {
                            human_color: PieceColor::Blue,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP {
                            show_suggestions: false,
                        });
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    let mut depth = self.state.ai_depth();
                    if ui
                        .add(egui::Slider::new(&mut depth, 1..=MAX_SUPPORTED_DEPTH.min(6)).text("Depth"))
                        .changed()
                    {
                        self.state.set_ai_depth(depth);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {human_color}"),
                        GameMode::PvP { .. } => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_count_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(winner) = self.state.game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn piece_accent(color: PieceColor) -> egui::Color32 {
        match color {
            PieceColor::Red => RED_PIECE,
            PieceColor::Blue => BLUE_PIECE,
            _ => TEXT_MUTED,
        }
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(RED_PIECE));
            ui.label(RichText::new("●").size(20.0).color(BLUE_PIECE));
            ui.add_space(4.0);
            ui.label(RichText::new("ATAXX").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 20.0, Self::piece_accent(turn));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.to_string().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        let secs = self
                            .state
                            .ai_thinking_elapsed()
                            .map_or(0.0, |d| d.as_secs_f32());
                        (format!("AI thinking... {secs:.1}s"), JUMPS_WARNING)
                    } else if self.state.game_over().is_some() {
                        ("Game Over".to_string(), LAST_MOVE_RING)
                    } else if self.state.block_mode {
                        ("Placing blocks".to_string(), JUMPS_WARNING)
                    } else if self.state.must_pass() {
                        ("No moves: pass".to_string(), JUMPS_CRITICAL)
                    } else {
                        ("Your turn".to_string(), JUMPS_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Piece counts and the consecutive-jump counter
    fn render_count_card(&self, ui: &mut egui::Ui) {
        let board = &self.state.board;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for (color, count) in [
                (PieceColor::Red, board.red_pieces()),
                (PieceColor::Blue, board.blue_pieces()),
            ] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(18.0).color(Self::piece_accent(color)));
                    ui.label(RichText::new(color.to_string()).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }

            ui.add_space(8.0);
            let jumps = board.num_jumps();
            let color = if jumps + 5 >= JUMP_LIMIT {
                JUMPS_CRITICAL
            } else if jumps + 10 >= JUMP_LIMIT {
                JUMPS_WARNING
            } else {
                JUMPS_NORMAL
            };
            ui.horizontal(|ui| {
                ui.label(RichText::new("Jumps in a row").size(11.0).color(TEXT_SECONDARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{jumps}/{JUMP_LIMIT}")).size(13.0).color(color));
                });
            });
            ui.label(
                RichText::new(format!("Open squares: {}", board.total_open()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }

                if ui
                    .add_enabled(self.state.must_pass(), egui::Button::new("Pass (P)"))
                    .clicked()
                {
                    if let Err(msg) = self.state.try_pass() {
                        self.state.message = Some(msg);
                    }
                }

                if self.state.can_place_blocks() {
                    ui.toggle_value(&mut self.state.block_mode, "Blocks (B)");
                }

                if let GameMode::PvP { .. } = self.state.mode {
                    if ui.button("Hint (H)").clicked() {
                        self.state.request_suggestion();
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.board.num_moves()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}", result.best_move))
                                    .size(12.0)
                                    .strong()
                                    .color(LAST_MOVE_RING),
                            );
                            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
                if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                    ui.label(
                        RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                }
                ui.label(
                    RichText::new(format!("Depth {}", self.state.ai_depth()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: PieceColor) {
        let board = &self.state.board;
        let score = format!("{} - {}", board.red_pieces(), board.blue_pieces());
        let mut restart = false;

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(result_text(winner))
                            .size(20.0)
                            .strong()
                            .color(Self::piece_accent(winner)),
                    );
                    ui.label(RichText::new(score).size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        restart = true;
                    }
                });
            });

        if restart {
            self.state.reset();
        }
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let targets = self
                .state
                .selected
                .map(|from| self.state.targets(from))
                .unwrap_or_default();
            let overlay = Overlay {
                selected: self.state.selected,
                targets: &targets,
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                block_mode: self.state.block_mode,
                interactive: self.state.game_over().is_none()
                    && self.state.is_human_turn()
                    && !self.state.is_ai_thinking(),
            };

            let clicked = self.board_view.show(ui, &self.state.board, &overlay);

            if let Some(sq) = clicked {
                if let Err(msg) = self.state.click(sq) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            if i.key_pressed(egui::Key::H) {
                if let GameMode::PvP { .. } = self.state.mode {
                    self.state.request_suggestion();
                }
            }

            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            if i.key_pressed(egui::Key::P) && self.state.must_pass() {
                if let Err(msg) = self.state.try_pass() {
                    self.state.message = Some(msg);
                }
            }

            if i.key_pressed(egui::Key::B) && self.state.can_place_blocks() {
                self.state.block_mode = !self.state.block_mode;
            }

            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }

            if i.key_pressed(egui::Key::Escape) {
                self.state.selected = None;
            }
        });
    }
}

impl eframe::App for AtaxxApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over().is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
