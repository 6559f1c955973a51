use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use blockwell::{Cell, Rgb, Snapshot, WellConfig, CELL_W, SIDEBAR_W};

const EMPTY_CELL: &str = " .";
const BLOCK_CELL: &str = "██";

pub fn draw_game(frame: &mut Frame, snapshot: &Snapshot, config: &WellConfig) {
    let area = frame.size();
    // inner width plus side walls, inner height plus ceiling/floor
    let play_w = (config.columns * CELL_W + 2) as u16;
    let play_h = (config.rows + 2) as u16;
    let min_width = play_w + SIDEBAR_W + 2;

    if area.width < min_width || area.height < play_h + 2 {
        let msg = Paragraph::new(format!("RESIZE PANE (min {}x{})", min_width, play_h + 2))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("BLOCKWELL"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("BLOCKWELL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(play_w), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    // Center the fixed-size playfield within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(play_h),
            Constraint::Min(0),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(play_w),
            Constraint::Min(0),
        ])
        .split(v_center[1]);
    let play_rect = h_center[1];

    draw_playfield(frame, snapshot, play_rect);
    draw_sidebar(frame, snapshot, cols[1]);
}

fn draw_playfield(frame: &mut Frame, snapshot: &Snapshot, play_rect: Rect) {
    let inner_w = snapshot.grid.first().map_or(0, Vec::len) * CELL_W;
    let mut lines: Vec<Line> = Vec::with_capacity(snapshot.grid.len() + 2);

    // Border: top/ceiling, sides, heavy floor.
    lines.push(Line::raw(format!("┌{}┐", "─".repeat(inner_w))));
    for row in &snapshot.grid {
        let mut spans = Vec::with_capacity(row.len() + 2);
        spans.push(Span::raw("│"));
        spans.extend(row.iter().map(|&cell| cell_span(cell)));
        spans.push(Span::raw("│"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(format!("└{}┘", "═".repeat(inner_w))));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);

    if snapshot.game_over {
        let overlay_w = play_rect.width.saturating_sub(4).max(8);
        let overlay_h = 5u16;
        let popup = Rect {
            x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
            y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new("GAME OVER\nPress q")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, popup);
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(EMPTY_CELL, Style::default().fg(Color::DarkGray)),
        Cell::Filled(rgb) => Span::styled(BLOCK_CELL, Style::default().fg(to_color(rgb))),
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

fn draw_sidebar(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Length(6), Constraint::Min(7)].as_ref())
        .split(area);

    let status = if snapshot.game_over { "OVER" } else { "ACTIVE" };
    let info = Paragraph::new(format!(
        "SCORE\n{}\n\nLINES\n{}\n\nSTATUS\n{}",
        snapshot.score, snapshot.lines_cleared, status
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let color = to_color(snapshot.next_kind.color());
    let preview: Vec<Line> = snapshot
        .next_matrix
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&filled| {
                        if filled {
                            Span::styled(BLOCK_CELL, Style::default().fg(color))
                        } else {
                            Span::raw("  ")
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    let next = Paragraph::new(preview)
        .block(Block::default().title("NEXT").borders(Borders::ALL));
    frame.render_widget(next, chunks[1]);

    let controls = Paragraph::new("←/→ move\n↑ rotate\n↓ soft\nspace slam\nq quit")
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}
