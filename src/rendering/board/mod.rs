//! UI adapter: paints the session onto a header, a control stripe and a
//! fixed 3x3 grid of swatch buttons, and turns clicks into session commands.

pub mod board;
pub mod components;

pub use board::{
    apply_board_repaints, apply_board_style, mode_button_clicks, new_colors_clicks, swatch_clicks,
    sync_board_text, BoardPlugin, NEW_COLORS_LABEL, PLAY_AGAIN_LABEL,
};
pub use components::*;
