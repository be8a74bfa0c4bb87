//! Handler binding for list elements.
//!
//! This module provides:
//! - `Handler`: closure type for element event handlers
//! - `HandlerContext`: what a handler sees while an event bubbles
//! - `HandlerRegistry`: handlers keyed by (element_id, event kind)

use std::collections::HashMap;
use std::sync::Arc;

use listdom::{Element, Event, EventKind};

use crate::events::ListEvent;
use crate::list::ListInner;

// =============================================================================
// Handler Type
// =============================================================================

/// A handler closure bound to one element and one event kind.
///
/// Handlers run while the list state is locked. They must not call back into
/// the owning [`SelectableList`](crate::SelectableList); subscribe to
/// notifications for that instead.
pub type Handler<D> = Arc<dyn Fn(&mut HandlerContext<'_, D>) + Send + Sync>;

// =============================================================================
// HandlerContext
// =============================================================================

/// Context passed to handlers while an event bubbles from its target to the
/// list root.
pub struct HandlerContext<'a, D> {
    list: &'a mut ListInner<D>,
    event: &'a Event,
    current_target: String,
    propagation_stopped: bool,
    notifications: Vec<ListEvent<D>>,
}

impl<'a, D> HandlerContext<'a, D> {
    pub(crate) fn new(list: &'a mut ListInner<D>, event: &'a Event) -> Self {
        Self {
            list,
            event,
            current_target: event.target().to_string(),
            propagation_stopped: false,
            notifications: Vec::new(),
        }
    }

    /// The event being dispatched.
    pub fn event(&self) -> &Event {
        self.event
    }

    /// The element the event happened on.
    pub fn target(&self) -> &str {
        self.event.target()
    }

    /// The element whose handler is running.
    pub fn current_target(&self) -> &str {
        &self.current_target
    }

    /// Keep ancestors' handlers from seeing this event.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Read-only view of the list element tree.
    pub fn root(&self) -> &Element {
        &self.list.root
    }

    /// The current item id.
    pub fn current_item(&self) -> Option<&str> {
        self.list.current.as_deref()
    }

    /// Checked items, in display order.
    pub fn selected_items(&self) -> Vec<String> {
        self.list.selected_items()
    }

    pub(crate) fn list(&self) -> &ListInner<D> {
        &*self.list
    }

    pub(crate) fn list_mut(&mut self) -> &mut ListInner<D> {
        &mut *self.list
    }

    /// Queue a notification for delivery once dispatch has finished.
    pub(crate) fn notify(&mut self, event: ListEvent<D>) {
        self.notifications.push(event);
    }

    pub(crate) fn set_current_target(&mut self, id: &str) {
        self.current_target = id.to_string();
    }

    pub(crate) fn into_notifications(self) -> Vec<ListEvent<D>> {
        self.notifications
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for element event handlers.
///
/// Maps (element_id, event kind) to handler closures. Binding the same pair
/// twice replaces the earlier handler.
pub struct HandlerRegistry<D> {
    handlers: HashMap<(String, EventKind), Handler<D>>,
}

impl<D> Default for HandlerRegistry<D> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<D> HandlerRegistry<D> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    pub fn register(&mut self, element_id: &str, kind: EventKind, handler: Handler<D>) {
        self.handlers
            .insert((element_id.to_string(), kind), handler);
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, kind: EventKind) -> Option<Handler<D>> {
        self.handlers
            .get(&(element_id.to_string(), kind))
            .cloned()
    }

    /// Remove one binding. Returns false if nothing was bound.
    pub fn remove(&mut self, element_id: &str, kind: EventKind) -> bool {
        self.handlers
            .remove(&(element_id.to_string(), kind))
            .is_some()
    }

    /// Remove every binding for an element. Returns how many were removed.
    pub fn unbind_element(&mut self, element_id: &str) -> usize {
        let before = self.handlers.len();
        self.handlers.retain(|(id, _), _| id != element_id);
        before - self.handlers.len()
    }

    /// Remove every binding for an element and all its descendants.
    pub fn unbind_subtree(&mut self, element: &Element) -> usize {
        let mut removed = self.unbind_element(&element.id);
        for child in element.child_elements() {
            removed += self.unbind_subtree(child);
        }
        removed
    }

    /// Check whether an element has a binding for `kind`.
    pub fn is_bound(&self, element_id: &str, kind: EventKind) -> bool {
        self.handlers.contains_key(&(element_id.to_string(), kind))
    }

    /// Clear all handlers.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl<D> std::fmt::Debug for HandlerRegistry<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}
