//! Board rendering for the Ataxx GUI

use crate::rules::count_captures;
use crate::{Board, Move, PieceColor, Square, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the view should highlight this frame
pub struct Overlay<'a> {
    pub selected: Option<Square>,
    pub targets: &'a [Square],
    pub last_move: Option<Move>,
    pub suggested_move: Option<Move>,
    pub block_mode: bool,
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay<'_>) -> Option<Square> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_coordinates(&painter);
        self.draw_cells(&painter, board);

        if let Some(Move::Step { from, to }) = overlay.last_move {
            self.draw_ring(&painter, from, LAST_MOVE_RING.gamma_multiply(0.5));
            self.draw_ring(&painter, to, LAST_MOVE_RING);
        }

        if let Some(from) = overlay.selected {
            self.draw_ring(&painter, from, SELECTED_RING);
            for &to in overlay.targets {
                let color = if from.distance(to) <= 1 {
                    EXTEND_TARGET
                } else {
                    JUMP_TARGET
                };
                painter.circle_filled(self.square_center(to), self.cell_size * 0.12, color);
            }
            self.draw_capture_preview(&painter, board, overlay.targets);
        }

        if let Some(Move::Step { from, to }) = overlay.suggested_move {
            let stroke = Stroke::new(RING_WIDTH, SELECTED_RING.gamma_multiply(0.6));
            painter.arrow(
                self.square_center(from),
                self.square_center(to) - self.square_center(from),
                stroke,
            );
        }

        let mut clicked = None;
        if overlay.interactive {
            if let Some(sq) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let valid = if overlay.block_mode {
                    board.legal_block(sq)
                } else {
                    board.get(sq) == board.whose_move() || overlay.targets.contains(&sq)
                };
                let color = if valid { hover_valid() } else { hover_invalid() };
                painter.rect_filled(self.cell_rect(sq), CornerRadius::same(4), color);

                if response.clicked() {
                    clicked = Some(sq);
                }
            }
        }

        clicked
    }

    /// Draw column letters along the bottom and row digits on the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(14.0);
        for i in 0..BOARD_SIZE as u8 {
            let col = self.square_center(Square::new(i, 0));
            let pos = Pos2::new(col.x, self.board_rect.max.y - BOARD_MARGIN * 0.5);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                (b'a' + i) as char,
                font.clone(),
                LABEL,
            );

            let row = self.square_center(Square::new(0, i));
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, row.y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                (b'1' + i) as char,
                font.clone(),
                LABEL,
            );
        }
    }

    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for sq in Square::all() {
            let rect = self.cell_rect(sq);
            match board.get(sq) {
                PieceColor::Blocked => {
                    painter.rect_filled(rect, CornerRadius::same(4), BLOCK_FILL);
                    let stroke = Stroke::new(2.0, BLOCK_HATCH);
                    painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
                    painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
                }
                color => {
                    painter.rect_filled(rect, CornerRadius::same(4), CELL_BG);
                    painter.rect_stroke(
                        rect,
                        CornerRadius::same(4),
                        Stroke::new(1.0, CELL_BORDER),
                        egui::StrokeKind::Inside,
                    );
                    if color.is_piece() {
                        self.draw_piece(painter, sq, color);
                    }
                }
            }
        }
    }

    fn draw_piece(&self, painter: &Painter, sq: Square, color: PieceColor) {
        let center = self.square_center(sq);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, highlight) = match color {
            PieceColor::Red => (RED_PIECE, RED_PIECE_HIGHLIGHT),
            _ => (BLUE_PIECE, BLUE_PIECE_HIGHLIGHT),
        };

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_filled(
            center + Vec2::new(-radius * 0.3, -radius * 0.3),
            radius * 0.25,
            highlight,
        );
    }

    /// Label each target with the number of pieces a move there would flip
    fn draw_capture_preview(&self, painter: &Painter, board: &Board, targets: &[Square]) {
        let font = egui::FontId::proportional(self.cell_size * 0.22);
        for (sq, flips) in capture_preview(board, targets) {
            let corner = self.cell_rect(sq).right_top() + Vec2::new(-4.0, 4.0);
            painter.text(
                corner,
                egui::Align2::RIGHT_TOP,
                format!("+{flips}"),
                font.clone(),
                CAPTURE_LABEL,
            );
        }
    }

    fn draw_ring(&self, painter: &Painter, sq: Square, color: Color32) {
        painter.circle_stroke(
            self.square_center(sq),
            self.cell_size * (PIECE_RADIUS_RATIO + 0.06),
            Stroke::new(RING_WIDTH, color),
        );
    }

    /// Screen rectangle of `sq`, inset by the cell gap
    fn cell_rect(&self, sq: Square) -> Rect {
        Rect::from_center_size(
            self.square_center(sq),
            Vec2::splat(self.cell_size - CELL_GAP),
        )
    }

    /// Convert screen coordinates to a board square
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Square> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let top_row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let size = BOARD_SIZE as i32;

        if (0..size).contains(&col) && (0..size).contains(&top_row) {
            Some(Square::new(col as u8, (size - 1 - top_row) as u8))
        } else {
            None
        }
    }

    /// Center of `sq` on screen; row 7 is drawn at the top
    pub fn square_center(&self, sq: Square) -> Pos2 {
        let top_row = (BOARD_SIZE as u8 - 1 - sq.row) as f32;
        let x = self.board_rect.min.x + BOARD_MARGIN + (sq.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (top_row + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Targets that would convert at least one piece, with the flip count
fn capture_preview(board: &Board, targets: &[Square]) -> Vec<(Square, u8)> {
    let mover = board.whose_move();
    targets
        .iter()
        .map(|&sq| (sq, count_captures(board, sq, mover)))
        .filter(|&(_, flips)| flips > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 50.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(2.0 * BOARD_MARGIN + 350.0)),
        }
    }

    #[test]
    fn test_screen_round_trip() {
        let view = view();
        for sq in Square::all() {
            assert_eq!(view.screen_to_board(view.square_center(sq)), Some(sq));
        }
    }

    #[test]
    fn test_capture_preview() {
        let board = Board::new();
        let sq = |name: &str| name.parse::<Square>().unwrap();
        // b2 borders blue's a1 and f6 borders blue's g7
        let targets = [sq("a6"), sq("b6"), sq("b2"), sq("f6")];
        assert_eq!(capture_preview(&board, &targets), vec![(sq("b2"), 1), (sq("f6"), 1)]);
        assert!(capture_preview(&board, &[]).is_empty());
    }

    #[test]
    fn test_orientation() {
        let view = view();
        let a7 = view.square_center(Square::new(0, 6));
        let a1 = view.square_center(Square::new(0, 0));
        assert!(a7.y < a1.y);
        assert_eq!(view.screen_to_board(Pos2::new(1.0, 1.0)), None);
    }
}
