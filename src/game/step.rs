use rand::Rng;

use crate::game::state::GameState;
use crate::params::Params;

/// Advance the simulation by one fixed tick: paddles, then ball, then
/// collisions, then scoring.
pub fn step(state: &mut GameState, rng: &mut impl Rng) {
    move_player(state);
    move_cpu(state);
    move_ball(state);
    bounce_walls(state);
    hit_paddles(state);
    settle_score(state, rng);
}

fn move_player(state: &mut GameState) {
    state.player.y += state.player.dy;
    state.player.clamp_y();
}

/// Reflex controller: chase the ball's current y, no prediction. Reads the
/// ball before it moves this tick.
fn move_cpu(state: &mut GameState) {
    let center = state.cpu.center_y();
    state.cpu.dy = if state.ball.y < center {
        -Params::CPU_SPEED
    } else if state.ball.y > center {
        Params::CPU_SPEED
    } else {
        0.0
    };
    state.cpu.y += state.cpu.dy;
    state.cpu.clamp_y();
}

fn move_ball(state: &mut GameState) {
    state.ball.x += state.ball.dx;
    state.ball.y += state.ball.dy;
}

/// Elastic bounce off the top and bottom walls: dy inverts, dx untouched.
fn bounce_walls(state: &mut GameState) {
    let ball = &mut state.ball;
    if ball.y - Params::BALL_RADIUS < 0.0 || ball.y + Params::BALL_RADIUS > Params::FIELD_HEIGHT {
        ball.dy = -ball.dy;
    }
}

/// Rectangle-vs-circle collision reduced to a y-range plus x-edge check.
/// A hit forces dx away from the paddle and rewrites dy from the vertical
/// offset between ball and paddle center.
fn hit_paddles(state: &mut GameState) {
    let ball = &mut state.ball;

    let left = &state.player;
    if ball.x - Params::BALL_RADIUS < left.x + Params::PADDLE_WIDTH
        && ball.y > left.y
        && ball.y < left.y + Params::PADDLE_HEIGHT
    {
        ball.dx = ball.dx.abs();
        ball.dy = (ball.y - left.center_y()) * Params::DEFLECTION;
    }

    let right = &state.cpu;
    if ball.x + Params::BALL_RADIUS > right.x
        && ball.y > right.y
        && ball.y < right.y + Params::PADDLE_HEIGHT
    {
        ball.dx = -ball.dx.abs();
        ball.dy = (ball.y - right.center_y()) * Params::DEFLECTION;
    }
}

/// A point lands only once the whole ball is past the bound; the serve
/// re-randomizes direction.
fn settle_score(state: &mut GameState, rng: &mut impl Rng) {
    if state.ball.x + Params::BALL_RADIUS < 0.0 {
        state.score.right += 1;
        state.serve(rng);
    } else if state.ball.x - Params::BALL_RADIUS > Params::FIELD_WIDTH {
        state.score.left += 1;
        state.serve(rng);
    }
}
