use crate::tui::app::App;
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(3), // Search button
            Constraint::Min(4),    // Event feed
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_button(frame, app, chunks[1]);
    draw_events(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Show cursor in search bar when focused
    if app.search.focused {
        // Account for border (1) + space (1) + search icon " \u{1F50D} " (approx 4 display cols)
        let value = app.input.value();
        let before_cursor = &value[..app.search.cursor_pos.min(value.len())];
        let cursor_x = chunks[0].x + 1 + 4 + before_cursor.width() as u16;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::border_style(app.search.focused))
        .title(format!(" {} ", app.config.input_id));

    let search_text = format!(" \u{1F50D} {}", app.input.value());
    let paragraph = Paragraph::new(search_text).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_button(frame: &mut Frame, app: &App, area: Rect) {
    let focused = !app.search.focused;
    let disabled = app.button.disabled();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::border_style(focused))
        .title(format!(" {} ", app.config.button_id));

    let label = if disabled {
        "[ Search ] (disabled)"
    } else {
        "[ Search ]"
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        label,
        colors::button_style(disabled, focused),
    )))
    .centered()
    .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_events(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Events ");

    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.events.len().saturating_sub(visible);

    let lines: Vec<Line> = app
        .events
        .iter()
        .skip(skip)
        .map(|event| {
            Line::from(vec![
                Span::styled(format!("{} ", event.time), colors::event_time_style()),
                Span::raw(event.message.clone()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = format!(" {}", app.status_message);
    let right_text = format!(
        "disabled={}  Tab focus | Enter press | Esc quit ",
        app.button.disabled()
    );

    let fill = (area.width as usize)
        .saturating_sub(left_text.width())
        .saturating_sub(right_text.width());

    let line = Line::from(vec![
        Span::styled(left_text, colors::status_style()),
        Span::styled(" ".repeat(fill), colors::status_style()),
        Span::styled(right_text, colors::status_style()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
