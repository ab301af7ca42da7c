//! The input watcher: derive a button's disabled attribute from a text input
//!
//! The enablement rule itself is the pure [`compute_disabled`]; the wiring
//! lives in [`watch`] and [`install`]. The watcher keeps no state of its own,
//! so the disabled attribute is always a function of the value carried by the
//! most recent change notification.

use crate::dom::{Button, Document, InputListener, TextInput};
use crate::error::Result;
use crate::logging;
use crate::WatchConfig;

/// Enablement rule: the control is disabled iff the trimmed value is empty.
/// Whitespace-only queries count as empty.
pub fn compute_disabled(value: &str) -> bool {
    value.trim().is_empty()
}

/// A text-entry surface the watcher can observe
pub trait WatchedInput {
    fn value(&self) -> String;
    fn on_input(&self, listener: InputListener);
}

/// A control whose disabled attribute the watcher governs
pub trait GatedControl {
    fn set_disabled(&self, disabled: bool);
}

impl WatchedInput for TextInput {
    fn value(&self) -> String {
        TextInput::value(self)
    }

    fn on_input(&self, listener: InputListener) {
        TextInput::on_input(self, listener)
    }
}

impl GatedControl for Button {
    fn set_disabled(&self, disabled: bool) {
        Button::set_disabled(self, disabled)
    }
}

/// Subscribe `control` to `input`: each change notification performs exactly
/// one `set_disabled` with the rule applied to the current value. Nothing is
/// applied until the first notification fires.
pub fn watch<I, C>(input: &I, control: C)
where
    I: WatchedInput + ?Sized,
    C: GatedControl + 'static,
{
    input.on_input(Box::new(move |value| {
        control.set_disabled(compute_disabled(value));
    }));
}

/// Locate the configured elements in `doc` and wire them together.
///
/// Both ids must resolve before any listener is attached; a failed lookup is
/// fatal to initialization and leaves the input untouched. The control id is
/// resolved first.
pub fn install(doc: &Document, config: &WatchConfig) -> Result<()> {
    let button = doc.button(&config.button_id)?;
    let input = doc.text_input(&config.input_id)?;

    watch(&input, button);
    logging::info(
        "WATCH",
        &format!(
            "watching '{}', gating '{}'",
            config.input_id, config.button_id
        ),
    );
    Ok(())
}
