use rand::Rng;

use crate::params::Params;

/// A paddle. `x` is fixed per side; `y` is the top edge and moves.
#[derive(Clone, Copy, Debug)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub dy: f32,
}

impl Paddle {
    fn at(x: f32) -> Self {
        Self {
            x,
            y: Params::FIELD_HEIGHT / 2.0 - Params::PADDLE_HEIGHT / 2.0,
            dy: 0.0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + Params::PADDLE_HEIGHT / 2.0
    }

    /// Saturate `y` to the playfield. Overshoot is clamped, never reported.
    pub fn clamp_y(&mut self) {
        self.y = self
            .y
            .clamp(0.0, Params::FIELD_HEIGHT - Params::PADDLE_HEIGHT);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

/// Full simulation state, passed explicitly into the step and the renderer.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Left paddle, player controlled.
    pub player: Paddle,
    /// Right paddle, reflex controlled.
    pub cpu: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut state = Self {
            player: Paddle::at(Params::PADDLE_INSET),
            cpu: Paddle::at(Params::FIELD_WIDTH - Params::PADDLE_INSET - Params::PADDLE_WIDTH),
            ball: Ball {
                x: 0.0,
                y: 0.0,
                dx: 0.0,
                dy: 0.0,
            },
            score: Score::default(),
        };
        state.serve(rng);
        state
    }

    /// Recenter the ball with a fresh direction, sign drawn per axis.
    pub fn serve(&mut self, rng: &mut impl Rng) {
        self.ball.x = Params::FIELD_WIDTH / 2.0;
        self.ball.y = Params::FIELD_HEIGHT / 2.0;
        self.ball.dx = Params::SERVE_SPEED_X * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.dy = Params::SERVE_SPEED_Y * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    }
}
