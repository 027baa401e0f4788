/// Tuning parameters for the Pong simulation.
///
/// All lengths are logical playfield units; the renderer scales them to
/// whatever cell area the terminal provides.
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const CPU_SPEED: f32 = 4.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEED_Y: f32 = 3.0;

    /// Vertical impact offset to rebound dy, per unit of offset.
    pub const DEFLECTION: f32 = 0.15;
}
