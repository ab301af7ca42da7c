pub mod app;
pub mod colors;
pub mod search;
pub mod ui;

use crate::WatchConfig;

/// Entry point: run the interactive demo in the terminal
pub fn run(config: WatchConfig) -> crate::Result<()> {
    let mut terminal = ratatui::init();
    let result = app::App::new(config).and_then(|mut app| app.run(&mut terminal));
    ratatui::restore();
    result
}
