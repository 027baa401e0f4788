use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use crate::game::Pong;

pub struct App {
    pub should_quit: bool,
    pub game: Pong,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            game: Pong::new(),
        }
    }

    pub fn on_tick(&mut self) {
        self.game.update();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.kind == KeyEventKind::Press
            && matches!(
                key.code,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
            )
        {
            self.should_quit = true;
            return;
        }

        self.game.handle_key(key);
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        self.game.handle_mouse(mouse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys_set_the_flag() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let mut app = App::new();
            app.on_key(press(code));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::new();
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn game_keys_pass_through() {
        let mut app = App::new();
        app.on_key(press(KeyCode::Up));
        assert!(!app.should_quit);
        assert!(app.game.state.player.dy < 0.0);
    }

    #[test]
    fn tick_advances_the_game() {
        let mut app = App::new();
        let before = app.game.state.ball.x;
        app.on_tick();
        assert_ne!(app.game.state.ball.x, before);
    }
}
