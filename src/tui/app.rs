use crate::dom::{Button, Document, TextInput};
use crate::logging;
use crate::tui::search::SearchState;
use crate::tui::ui;
use crate::watcher;
use crate::WatchConfig;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::Duration;

/// One line in the on-screen event feed
pub struct EventLine {
    pub time: String,
    pub message: String,
}

/// Interactive demo host
///
/// Owns the document with the two configured elements and translates
/// keystrokes into host-side edits plus change notifications. The button's
/// rendered state comes straight from the element the watcher mutates.
pub struct App {
    // Keeps the element registry (and its entries) alive for the session
    #[allow(dead_code)]
    doc: Document,
    pub input: TextInput,
    pub button: Button,
    pub config: WatchConfig,

    pub search: SearchState,
    pub events: Vec<EventLine>,
    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: WatchConfig) -> crate::Result<Self> {
        let mut doc = Document::new();
        let input = doc.create_text_input(&config.input_id);
        // The page ships the control disabled; the watcher takes over on the
        // first change notification.
        let button = doc.create_button(&config.button_id, true);

        watcher::install(&doc, &config)?;

        // Second listener, after the watcher, so it observes the post-update
        // disabled state of each notification.
        {
            let button = button.clone();
            let input_id = config.input_id.clone();
            let button_id = config.button_id.clone();
            input.on_input(Box::new(move |value| {
                logging::log_gate_transition(&input_id, &button_id, value, button.disabled());
            }));
        }

        Ok(Self {
            doc,
            input,
            button,
            config,
            search: SearchState::default(),
            events: Vec::new(),
            status_message: "Ready - type a query".to_string(),
            should_quit: false,
        })
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend<Error = std::io::Error>>,
    ) -> crate::Result<()> {
        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Host-side change notification: deliver the edit to listeners and
    /// record the resulting button state in the event feed.
    fn fire_input(&mut self) {
        self.input.fire_input();
        let disabled = self.button.disabled();
        self.push_event(format!(
            "input changed: '{}' -> button {}",
            self.input.value(),
            if disabled { "disabled" } else { "enabled" }
        ));
    }

    fn push_event(&mut self, message: String) {
        self.events.push(EventLine {
            time: Local::now().format("%H:%M:%S").to_string(),
            message,
        });
        // Keep the feed bounded
        if self.events.len() > 200 {
            self.events.remove(0);
        }
    }

    fn press_button(&mut self) {
        if self.button.disabled() {
            self.status_message = "Search is disabled - enter a query first".to_string();
            self.push_event("press ignored: button is disabled".to_string());
            return;
        }
        let query = self.input.value();
        self.status_message = format!("Search pressed for '{}'", query.trim());
        self.push_event(format!("search pressed (query '{}', not executed)", query));
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.input.value().is_empty() {
                    self.search.clear(&self.input);
                    self.fire_input();
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_button_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.search.insert_char(&self.input, c) {
                    self.fire_input();
                }
            }
            KeyCode::Backspace => {
                if self.search.backspace(&self.input) {
                    self.fire_input();
                }
            }
            KeyCode::Delete => {
                if self.search.delete(&self.input) {
                    self.fire_input();
                }
            }
            KeyCode::Left => self.search.move_left(&self.input),
            KeyCode::Right => self.search.move_right(&self.input),
            KeyCode::Home => self.search.move_home(),
            KeyCode::End => self.search.move_end(&self.input),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.press_button(),

            KeyCode::Tab | KeyCode::Up | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.move_end(&self.input);
                if self.search.insert_char(&self.input, c) {
                    self.fire_input();
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(WatchConfig::default()).unwrap()
    }

    #[test]
    fn typing_enables_the_button() {
        let mut app = app();
        assert!(app.button.disabled());

        for c in "cats".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.input.value(), "cats");
        assert!(!app.button.disabled());
    }

    #[test]
    fn erasing_the_query_disables_again() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('x')));
        assert!(!app.button.disabled());

        app.handle_key(key(KeyCode::Backspace));
        assert!(app.button.disabled());
    }

    #[test]
    fn whitespace_query_keeps_button_disabled() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.button.disabled());
    }

    #[test]
    fn escape_clears_query_before_unfocusing() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.input.value(), "");
        assert!(app.button.disabled());
        assert!(app.search.focused);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.search.focused);
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn disabled_button_press_is_ignored() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert!(!app.search.focused);

        app.handle_key(key(KeyCode::Enter));
        assert!(app
            .events
            .last()
            .is_some_and(|e| e.message.contains("ignored")));
    }

    #[test]
    fn enabled_button_press_is_recorded() {
        let mut app = app();
        for c in "dogs".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));

        assert!(app.status_message.contains("dogs"));
        assert!(app
            .events
            .last()
            .is_some_and(|e| e.message.contains("search pressed")));
    }

    #[test]
    fn typing_while_button_focused_returns_to_search() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('z')));

        assert!(app.search.focused);
        assert_eq!(app.input.value(), "z");
        assert!(!app.button.disabled());
    }
}
