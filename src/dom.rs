//! Minimal host-document model
//!
//! The watcher binds to two externally owned entities: a text input and a
//! button. This module gives those entities a concrete shape: shared handles
//! over interior state, registered in an id-keyed [`Document`], with
//! synchronous input-event dispatch. The host (TUI demo or test) owns the
//! document and drives all mutation; the watcher only subscribes and flips
//! the button's disabled attribute.
//!
//! Everything here is single-threaded by design. Listeners run to completion
//! in registration order, on the same call stack as [`TextInput::fire_input`].

use crate::error::{InputGateError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Callback invoked with the input's current value on each change notification
pub type InputListener = Box<dyn FnMut(&str)>;

struct TextInputState {
    id: String,
    value: String,
    listeners: Vec<InputListener>,
}

/// Shared handle to a text-entry element
///
/// Cloning the handle clones the reference, not the element.
#[derive(Clone)]
pub struct TextInput {
    state: Rc<RefCell<TextInputState>>,
}

impl std::fmt::Debug for TextInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("TextInput")
            .field("id", &state.id)
            .field("value", &state.value)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl TextInput {
    fn new(id: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(TextInputState {
                id: id.to_string(),
                value: String::new(),
                listeners: Vec::new(),
            })),
        }
    }

    pub fn id(&self) -> String {
        self.state.borrow().id.clone()
    }

    /// Current value of the element
    pub fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    /// Host-side edit. Does not notify listeners; the host decides when a
    /// change notification fires, the way a UI toolkit batches keystrokes.
    pub fn set_value(&self, value: impl Into<String>) {
        self.state.borrow_mut().value = value.into();
    }

    /// Register a change listener. Subscriptions are permanent for the
    /// lifetime of the element; there is no removal.
    pub fn on_input(&self, listener: InputListener) {
        self.state.borrow_mut().listeners.push(listener);
    }

    /// Fire a change notification, delivering the current value to every
    /// listener in registration order.
    pub fn fire_input(&self) {
        let value = self.state.borrow().value.clone();
        // Take listeners out so a callback can touch this element (or even
        // subscribe) without hitting the RefCell.
        let mut listeners = std::mem::take(&mut self.state.borrow_mut().listeners);
        for listener in listeners.iter_mut() {
            listener(&value);
        }
        let mut state = self.state.borrow_mut();
        listeners.append(&mut state.listeners);
        state.listeners = listeners;
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

struct ButtonState {
    id: String,
    disabled: bool,
}

/// Shared handle to a button element exposing a disabled attribute
#[derive(Clone)]
pub struct Button {
    state: Rc<RefCell<ButtonState>>,
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Button")
            .field("id", &state.id)
            .field("disabled", &state.disabled)
            .finish()
    }
}

impl Button {
    fn new(id: &str, disabled: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(ButtonState {
                id: id.to_string(),
                disabled,
            })),
        }
    }

    pub fn id(&self) -> String {
        self.state.borrow().id.clone()
    }

    pub fn disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }
}

/// An element registered in a document
#[derive(Clone)]
pub enum Entity {
    TextInput(TextInput),
    Button(Button),
}

/// Id-keyed element registry, the `findById` capability of the host page
#[derive(Default)]
pub struct Document {
    entities: HashMap<String, Entity>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a text input. Replaces any element with the same id.
    pub fn create_text_input(&mut self, id: &str) -> TextInput {
        let input = TextInput::new(id);
        self.entities
            .insert(id.to_string(), Entity::TextInput(input.clone()));
        input
    }

    /// Create and register a button with an initial disabled state.
    pub fn create_button(&mut self, id: &str, disabled: bool) -> Button {
        let button = Button::new(id, disabled);
        self.entities
            .insert(id.to_string(), Entity::Button(button.clone()));
        button
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Resolve an id to a text input, failing on absence or wrong kind
    pub fn text_input(&self, id: &str) -> Result<TextInput> {
        match self.find_by_id(id) {
            Some(Entity::TextInput(input)) => Ok(input.clone()),
            Some(_) => Err(InputGateError::ElementKindMismatch {
                id: id.to_string(),
                expected: "text input",
            }),
            None => Err(InputGateError::ElementNotFound(id.to_string())),
        }
    }

    /// Resolve an id to a button, failing on absence or wrong kind
    pub fn button(&self, id: &str) -> Result<Button> {
        match self.find_by_id(id) {
            Some(Entity::Button(button)) => Ok(button.clone()),
            Some(_) => Err(InputGateError::ElementKindMismatch {
                id: id.to_string(),
                expected: "button",
            }),
            None => Err(InputGateError::ElementNotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn find_by_id_resolves_registered_elements() {
        let mut doc = Document::new();
        doc.create_text_input("searchInput");
        doc.create_button("searchButton", true);

        assert!(doc.find_by_id("searchInput").is_some());
        assert!(doc.find_by_id("searchButton").is_some());
        assert!(doc.find_by_id("missing").is_none());
    }

    #[test]
    fn typed_lookup_reports_missing_element() {
        let doc = Document::new();
        let err = doc.text_input("searchInput").unwrap_err();
        assert!(matches!(err, InputGateError::ElementNotFound(id) if id == "searchInput"));
    }

    #[test]
    fn typed_lookup_reports_kind_mismatch() {
        let mut doc = Document::new();
        doc.create_text_input("searchInput");

        let err = doc.button("searchInput").unwrap_err();
        assert!(err.is_lookup_failure());
        assert!(
            matches!(err, InputGateError::ElementKindMismatch { id, expected }
                if id == "searchInput" && expected == "button")
        );
    }

    #[test]
    fn set_value_does_not_notify() {
        let mut doc = Document::new();
        let input = doc.create_text_input("q");
        let fired = Rc::new(Cell::new(0u32));

        let counter = fired.clone();
        input.on_input(Box::new(move |_| counter.set(counter.get() + 1)));

        input.set_value("cats");
        assert_eq!(fired.get(), 0);

        input.fire_input();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn fire_input_delivers_current_value_in_registration_order() {
        let mut doc = Document::new();
        let input = doc.create_text_input("q");
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = seen.clone();
            input.on_input(Box::new(move |value| {
                seen.borrow_mut().push(format!("{}:{}", tag, value));
            }));
        }

        input.set_value("cats");
        input.fire_input();

        assert_eq!(&*seen.borrow(), &["first:cats", "second:cats"]);
    }

    #[test]
    fn listener_may_touch_the_input_during_dispatch() {
        let mut doc = Document::new();
        let input = doc.create_text_input("q");

        let handle = input.clone();
        let observed = Rc::new(RefCell::new(String::new()));
        let sink = observed.clone();
        input.on_input(Box::new(move |_| {
            *sink.borrow_mut() = handle.value();
        }));

        input.set_value("dogs");
        input.fire_input();

        assert_eq!(&*observed.borrow(), "dogs");
        assert_eq!(input.listener_count(), 1);
    }
}
