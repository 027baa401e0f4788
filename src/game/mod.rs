pub mod state;
pub mod step;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::params::Params;
use state::GameState;

/// Controller around the simulation: input mapping, pause/restart, and the
/// screen rect the playfield was last drawn into (pointer rows are mapped
/// through it back into playfield units).
pub struct Pong {
    pub state: GameState,
    pub paused: bool,
    pub field_area: Rect,
}

impl Pong {
    pub fn new() -> Self {
        Self {
            state: GameState::new(&mut rand::thread_rng()),
            paused: false,
            field_area: Rect::default(),
        }
    }

    pub fn update(&mut self) {
        if self.paused {
            return;
        }
        let mut rng = rand::thread_rng();
        step::step(&mut self.state, &mut rng);
    }

    pub fn reset(&mut self) {
        self.state = GameState::new(&mut rand::thread_rng());
        self.paused = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Either arrow's release stops the paddle, whatever the other key
        // is doing.
        if key.kind == KeyEventKind::Release {
            if matches!(key.code, KeyCode::Up | KeyCode::Down) {
                self.state.player.dy = 0.0;
            }
            return;
        }

        // Press and Repeat both count as the key being held.
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') if key.kind == KeyEventKind::Press => {
                self.reset();
            }
            KeyCode::Char('p') | KeyCode::Char('P') if key.kind == KeyEventKind::Press => {
                self.paused = !self.paused;
            }
            KeyCode::Up if !self.paused => self.state.player.dy = -Params::PLAYER_SPEED,
            KeyCode::Down if !self.paused => self.state.player.dy = Params::PLAYER_SPEED,
            _ => {}
        }
    }

    /// Absolute pointer control: the paddle top tracks the pointer row
    /// minus half the paddle height, bypassing velocity entirely.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.paused || !matches!(mouse.kind, MouseEventKind::Moved) {
            return;
        }
        let area = self.field_area;
        if area.height == 0 {
            return;
        }
        let row = mouse.row.saturating_sub(area.y);
        let y = (row as f32 + 0.5) / area.height as f32 * Params::FIELD_HEIGHT;
        self.state.player.y = y - Params::PADDLE_HEIGHT / 2.0;
        self.state.player.clamp_y();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    fn moved_to(row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrow_press_sets_velocity_release_zeroes_it() {
        let mut game = Pong::new();

        game.handle_key(press(KeyCode::Up));
        assert_eq!(game.state.player.dy, -Params::PLAYER_SPEED);

        game.handle_key(press(KeyCode::Down));
        assert_eq!(game.state.player.dy, Params::PLAYER_SPEED);

        // Releasing the *other* arrow still stops the paddle.
        game.handle_key(release(KeyCode::Up));
        assert_eq!(game.state.player.dy, 0.0);
    }

    #[test]
    fn pause_freezes_the_simulation() {
        let mut game = Pong::new();
        game.handle_key(press(KeyCode::Char('p')));
        assert!(game.paused);

        let ball_x = game.state.ball.x;
        game.update();
        assert_eq!(game.state.ball.x, ball_x);

        game.handle_key(press(KeyCode::Char('p')));
        assert!(!game.paused);
    }

    #[test]
    fn restart_zeroes_the_score() {
        let mut game = Pong::new();
        game.state.score.left = 3;
        game.state.score.right = 9;
        game.handle_key(press(KeyCode::Char('r')));
        assert_eq!(game.state.score.left, 0);
        assert_eq!(game.state.score.right, 0);
    }

    #[test]
    fn pointer_row_maps_into_the_playfield() {
        let mut game = Pong::new();
        game.field_area = Rect::new(0, 2, 100, 25);

        // Row 14 is field row 12, whose center is halfway down: the paddle
        // centers on the field's midline.
        game.handle_mouse(moved_to(14));
        assert_eq!(
            game.state.player.y,
            Params::FIELD_HEIGHT / 2.0 - Params::PADDLE_HEIGHT / 2.0
        );
    }

    #[test]
    fn pointer_control_clamps_at_the_edges() {
        let mut game = Pong::new();
        game.field_area = Rect::new(0, 2, 100, 25);

        game.handle_mouse(moved_to(0));
        assert_eq!(game.state.player.y, 0.0);

        game.handle_mouse(moved_to(200));
        assert_eq!(
            game.state.player.y,
            Params::FIELD_HEIGHT - Params::PADDLE_HEIGHT
        );
    }

    #[test]
    fn pointer_is_ignored_before_first_draw() {
        let mut game = Pong::new();
        let y = game.state.player.y;
        game.handle_mouse(moved_to(10));
        assert_eq!(game.state.player.y, y);
    }
}
