pub mod board_scene;
pub mod game_common;

use crate::game::GameSession;
use ratatui::Frame;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, session: &GameSession) {
    let area = frame.size();
    board_scene::render_game_scene(frame, area, session);
}
