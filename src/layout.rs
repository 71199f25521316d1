/// Compact phones (iPhone SE class and smaller) get tighter layouts.
pub fn is_small_screen(width: f64, height: f64) -> bool {
    width <= 375.0 || height <= 667.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSize {
    pub width: f64,
    pub height: f64,
}

const GRID_PADDING: f64 = 16.0;
const GRID_GAP: f64 = 12.0;
const CARD_TARGET_WIDTH: f64 = 170.0;
const CARD_TARGET_HEIGHT: f64 = 250.0;

pub fn saved_card_size(window_width: f64) -> CardSize {
    let per_column = ((window_width - GRID_PADDING * 2.0 - GRID_GAP) / 2.0).floor();
    let width = CARD_TARGET_WIDTH.min(per_column);

    CardSize {
        width,
        height: (CARD_TARGET_HEIGHT / CARD_TARGET_WIDTH * width).round(),
    }
}

pub fn preview_card_size(window_width: f64) -> CardSize {
    let scale = ((window_width - 32.0) / 200.0).min(1.0);

    CardSize {
        width: (200.0 * scale).round(),
        height: (300.0 * scale).round(),
    }
}
