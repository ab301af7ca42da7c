use ratatui::style::{Color, Modifier, Style};

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn button_style(disabled: bool, focused: bool) -> Style {
    match (disabled, focused) {
        (true, _) => Style::default().fg(Color::DarkGray),
        (false, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    }
}

pub fn status_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 50))
}

pub fn event_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
