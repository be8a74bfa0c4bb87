//! Public notifications and the UI-event abstraction.
//!
//! A host toolkit translates its own input into calls on [`ItemEvents`];
//! the list answers with an [`EventResult`] and publishes [`ListEvent`]s to
//! its subscribers.

/// Notification raised by a list after a state-affecting interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<D> {
    /// An item became current (click, double-click or removal fallback).
    CurrentItemChanged {
        /// The new current item, None if the list is empty.
        item: Option<String>,
        /// Data registered for `item`.
        data: Option<D>,
        /// Checked items, in display order.
        selected_items: Vec<String>,
    },
    /// The set of checked items may have changed.
    SelectionChanged {
        /// Checked items, in display order.
        selected_items: Vec<String>,
    },
}

impl<D> ListEvent<D> {
    /// Notification name as seen by external subscribers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CurrentItemChanged { .. } => "currentItemChanged",
            Self::SelectionChanged { .. } => "selectionChanged",
        }
    }

    /// Checked items carried by either notification.
    pub fn selected_items(&self) -> &[String] {
        match self {
            Self::CurrentItemChanged { selected_items, .. }
            | Self::SelectionChanged { selected_items } => selected_items,
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// No handler reacted; let the host try something else.
    Ignored,
    /// At least one handler ran.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Interaction entry points a host toolkit drives.
///
/// Each method names the innermost element the interaction happened on.
/// All methods default to `EventResult::Ignored`, so adapters only need
/// to implement what they forward.
pub trait ItemEvents {
    /// Handle a click on `target`.
    fn on_click(&self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a double click on `target`.
    fn on_double_click(&self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a checkbox value change. `checked` is the new value.
    fn on_change(&self, _target: &str, _checked: bool) -> EventResult {
        EventResult::Ignored
    }

    /// Handle the pointer entering `target`.
    fn on_hover_enter(&self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle the pointer leaving `target`.
    fn on_hover_exit(&self, _target: &str) -> EventResult {
        EventResult::Ignored
    }
}
