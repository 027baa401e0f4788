pub mod field;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" 🏓 Pong ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Score bar
            Constraint::Min(8),    // Playfield
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

    render_score(frame, app, chunks[0]);

    // Record where the field lands so pointer rows can be mapped back into
    // playfield units.
    app.game.field_area = chunks[1];
    let lines = field::render_field(
        &app.game.state,
        chunks[1].width as usize,
        chunks[1].height as usize,
    );
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    render_help(frame, app, chunks[2]);
}

fn render_score(frame: &mut Frame, app: &App, area: Rect) {
    let score = &app.game.state.score;
    let status = Line::from(vec![
        Span::styled(" 🏓 ", Style::default()),
        Span::styled(
            format!("You: {} ", score.left),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("CPU: {} ", score.right),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help = if app.game.paused {
        Line::from(vec![Span::styled(
            " ⏸ PAUSED - Press P to resume ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )])
    } else {
        Line::from(vec![
            Span::styled(" ↑↓ Move ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Mouse Move ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("P Pause ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("R Restart ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(help), area);
}
