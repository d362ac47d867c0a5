//! Board rendering for the Freedom GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Cell, Player, Pos};
use crate::game::GameState;
use crate::rules::check_position;

use super::theme::*;

/// What the board should draw besides the stones
pub struct BoardOverlay<'a> {
    /// Cells the side to move may use
    pub targets: &'a [Pos],
    /// Every empty cell is open because the last stone is boxed in
    pub freedom: bool,
    pub suggested_move: Option<Pos>,
    /// Accept hover previews and clicks
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board side in cells
    size: usize,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            size: 6,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if it is a legal move
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Stones sit inside the cells, not on the line intersections
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.size = state.board.size();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        if overlay.freedom {
            self.draw_freedom_cells(&painter, state);
        }
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, state);

        if let Some(pos) = state.last_placed {
            self.draw_last_move_marker(&painter, pos);
        }

        if overlay.interactive {
            self.draw_targets(&painter, overlay.targets);
        }

        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos, state.current);
        }

        let mut clicked_pos = None;

        if overlay.interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid =
                        check_position(state, board_pos.row as usize, board_pos.col as usize).is_ok();

                    self.draw_hover_preview(&painter, board_pos, state.current, is_valid);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(CELL_LINE_WIDTH, CELL_LINE);
        let extent = self.size as f32 * self.cell_size;

        for i in 0..=self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Row and column indices, the same numbers the text front end asks for
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..self.size {
            let center = self.board_to_screen(Pos::new(i as u8, i as u8));

            // Column labels, top
            let pos = Pos2::new(center.x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), CELL_LINE);

            // Row labels, left
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, center.y);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), CELL_LINE);
        }
    }

    fn draw_freedom_cells(&self, painter: &Painter, state: &GameState) {
        for pos in state.board.empty_cells() {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, CELL_FREEDOM);
        }
    }

    fn draw_stones(&self, painter: &Painter, state: &GameState) {
        for idx in 0..state.board.cell_count() {
            let pos = Pos::from_index(idx, self.size);
            if let Cell::Stone(player) = state.board.get(pos) {
                self.draw_stone(painter, pos, player);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::One => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, ONE_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, ONE_STONE_HIGHLIGHT);
            }
            Player::Two => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, TWO_STONE);

                // Inner shadow for depth
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, TWO_STONE_SHADOW));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Small dots on the cells the next stone may go to
    fn draw_targets(&self, painter: &Painter, targets: &[Pos]) {
        // A dot on every empty cell says nothing
        if targets.len() > 4 {
            return;
        }
        for &pos in targets {
            painter.circle_filled(self.board_to_screen(pos), TARGET_DOT_RADIUS, TARGET_DOT);
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let (fill, text) = match player {
            Player::One => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), TWO_STONE),
            Player::Two => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), ONE_STONE),
        };

        painter.circle_filled(center, radius, fill);
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(14.0), text);
        painter.circle_stroke(center, radius + 3.0, Stroke::new(2.0, ACCENT_GREEN));
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, player: Player, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match player {
                Player::One => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Player::Two => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
