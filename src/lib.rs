//! InputGate - search-input watcher
//!
//! Watches a text input's change notifications and gates a button's
//! `disabled` attribute: the button is disabled exactly when the trimmed
//! input value is empty.
//!
//! # Features
//!
//! - **Pure enablement rule**: `compute_disabled` is a plain function over
//!   the current value, testable without any host environment
//! - **Injected entities**: the watcher binds to capability traits
//!   (`WatchedInput`, `GatedControl`), so fakes drop in for tests
//! - **Host document model**: an id-keyed registry with `findById`-style
//!   lookup and synchronous input-event dispatch
//! - **Interactive demo**: a ratatui host that lets you type and watch the
//!   button flip
//!
//! # Example
//!
//! ```
//! use inputgate::{install, Document, WatchConfig};
//!
//! fn main() -> inputgate::Result<()> {
//!     let mut doc = Document::new();
//!     let input = doc.create_text_input("searchInput");
//!     let button = doc.create_button("searchButton", true);
//!
//!     install(&doc, &WatchConfig::default())?;
//!
//!     input.set_value("cats");
//!     input.fire_input();
//!     assert!(!button.disabled());
//!
//!     input.set_value("   ");
//!     input.fire_input();
//!     assert!(button.disabled());
//!
//!     Ok(())
//! }
//! ```

pub mod dom;
pub mod error;
pub mod logging;
pub mod tui;
pub mod watcher;

// Re-export main types
pub use dom::{Button, Document, Entity, InputListener, TextInput};
pub use error::{InputGateError, Result};
pub use watcher::{compute_disabled, install, watch, GatedControl, WatchedInput};

use serde::Deserialize;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Watcher configuration: which element ids to wire together
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Id of the watched text input
    pub input_id: String,
    /// Id of the gated button
    pub button_id: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            input_id: "searchInput".to_string(),
            button_id: "searchButton".to_string(),
        }
    }
}

impl WatchConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| InputGateError::ConfigError(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_conventional_ids() {
        let config = WatchConfig::default();
        assert_eq!(config.input_id, "searchInput");
        assert_eq!(config.button_id, "searchButton");
    }

    #[test]
    fn partial_config_json_falls_back_to_defaults() {
        let config: WatchConfig = serde_json::from_str(r#"{"input_id": "q"}"#).unwrap();
        assert_eq!(config.input_id, "q");
        assert_eq!(config.button_id, "searchButton");
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let err = WatchConfig::load(std::path::Path::new("no-such-config.json")).unwrap_err();
        assert!(matches!(err, InputGateError::IoError(_)));
    }
}
