use ratatui::prelude::*;

use crate::game::state::GameState;
use crate::params::Params;

const BG: Color = Color::Rgb(10, 10, 20);

/// Rasterize the playfield into one styled character per terminal cell:
/// cleared background, dashed center line, both paddles, ball.
///
/// Reads the state, mutates nothing; the same state always yields the same
/// lines.
pub fn render_field(state: &GameState, width: usize, height: usize) -> Vec<Line<'static>> {
    let w = width;
    let h = height;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    // Playfield units -> cells
    let sx = w as f32 / Params::FIELD_WIDTH;
    let sy = h as f32 / Params::FIELD_HEIGHT;

    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(BG)); w]; h];

    // Dashed center line
    let cx = w / 2;
    for y in (0..h).step_by(2) {
        grid[y][cx] = ('╎', Style::default().fg(Color::Rgb(90, 90, 110)).bg(BG));
    }

    // Paddles
    draw_paddle(
        &mut grid,
        state.player.x,
        state.player.y,
        sx,
        sy,
        Color::Rgb(80, 200, 255),
    );
    draw_paddle(
        &mut grid,
        state.cpu.x,
        state.cpu.y,
        sx,
        sy,
        Color::Rgb(255, 120, 120),
    );

    // Ball
    let bx = (state.ball.x * sx) as usize;
    let by = (state.ball.y * sy) as usize;
    if bx < w && by < h {
        grid[by][bx] = (
            '●',
            Style::default()
                .fg(Color::Rgb(255, 255, 255))
                .bg(BG)
                .add_modifier(Modifier::BOLD),
        );
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn draw_paddle(grid: &mut [Vec<(char, Style)>], x: f32, y: f32, sx: f32, sy: f32, color: Color) {
    let h = grid.len();
    if h == 0 {
        return;
    }
    let w = grid[0].len();

    // Thin paddles still get at least one cell each way.
    let px_start = (x * sx) as usize;
    let px_end = (((x + Params::PADDLE_WIDTH) * sx) as usize).max(px_start + 1);
    let py_start = (y * sy) as usize;
    let py_end = (((y + Params::PADDLE_HEIGHT) * sy) as usize).max(py_start + 1);

    for py in py_start..py_end.min(h) {
        for px in px_start..px_end.min(w) {
            grid[py][px] = ('█', Style::default().fg(color).bg(BG));
        }
    }
}
