//! Theme constants for the Freedom GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const CELL_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const CELL_FREEDOM: Color32 = Color32::from_rgb(236, 206, 160);

// Stone colors. Player One plays the filled glyph, Player Two the hollow one.
pub const ONE_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const ONE_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const TWO_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const TWO_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(50, 220, 50);
pub const TARGET_DOT: Color32 = Color32::from_rgb(90, 140, 90);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const DEBUG_BG: Color32 = Color32::from_rgb(30, 33, 38);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Player accents for the side panel
pub const ONE_ACCENT: Color32 = Color32::from_rgb(70, 70, 75);
pub const TWO_ACCENT: Color32 = Color32::from_rgb(220, 220, 225);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Game-over card
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const GAME_OVER_BUTTON: Color32 = Color32::from_rgb(60, 100, 70);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const STONE_RADIUS_RATIO: f32 = 0.40;
pub const CELL_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const TARGET_DOT_RADIUS: f32 = 4.0;
