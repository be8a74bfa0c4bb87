//! Selectable list widget.
//!
//! The widget owns a list root element whose direct children are the items.
//! Each item is registered with an opaque data payload, gets a checkbox when
//! the list is selectable, and has handlers bound on its interactive
//! surfaces. Interactions arrive as [`Event`]s (or through [`ItemEvents`]),
//! bubble from their target to the root, and produce [`ListEvent`]
//! notifications for subscribers.
//!
//! # Example
//!
//! ```
//! use selist::{Element, Event, ListConfig, ListEvent, SelectableList};
//!
//! let list = SelectableList::new(ListConfig::default()).unwrap();
//! list.add_item(Element::box_().id("a").child(Element::text("Alpha")), 1).unwrap();
//! list.add_item(Element::box_().id("b").child(Element::text("Beta")), 2).unwrap();
//!
//! list.subscribe(|event: &ListEvent<i32>| {
//!     if let ListEvent::CurrentItemChanged { item, data, .. } = event {
//!         println!("current: {item:?} -> {data:?}");
//!     }
//! });
//!
//! list.dispatch(Event::click("a"));
//! assert_eq!(list.current_item().as_deref(), Some("a"));
//! ```

use std::sync::Arc;

use listdom::{
    Content, Element, Event, EventKind, find_by_class, find_element, find_element_mut,
    first_checkbox_mut, for_each_with_class_mut, nearest_of_class, path_to, set_all_checkboxes,
};

use crate::bus::{EventBus, SubscriptionId};
use crate::classification::Classification;
use crate::config::{ConfigError, ListConfig};
use crate::error::ListError;
use crate::events::{EventResult, ItemEvents, ListEvent};
use crate::handlers::{Handler, HandlerContext, HandlerRegistry};
use crate::registry::ItemRegistry;
use crate::restyle;
use crate::state::State;

/// Root element id used by [`SelectableList::new`].
pub const DEFAULT_ROOT_ID: &str = "selectable-list";

// =============================================================================
// ListInner
// =============================================================================

/// Everything the list owns, behind one lock.
pub(crate) struct ListInner<D> {
    /// List root. Its direct children carrying the item class are the items.
    pub root: Element,
    pub config: ListConfig,
    pub registry: ItemRegistry<D>,
    pub handlers: HandlerRegistry<D>,
    /// Current item id. Never names an element that is not an item.
    pub current: Option<String>,
}

impl<D> ListInner<D> {
    fn new(root: Element, config: ListConfig) -> Self {
        Self {
            root,
            config,
            registry: ItemRegistry::new(),
            handlers: HandlerRegistry::new(),
            current: None,
        }
    }

    pub fn item_ids(&self) -> Vec<String> {
        restyle::item_ids(&self.root, &self.config)
    }

    pub fn selected_items(&self) -> Vec<String> {
        restyle::selected_items(&self.root, &self.config)
    }

    /// Make `current` the current item (None for no current item) and
    /// reclassify every item.
    pub fn restyle(&mut self, current: Option<String>) {
        self.current = restyle::restyle(&mut self.root, &self.config, current.as_deref());
    }

    /// Reclassify every item, keeping the current item.
    pub fn refresh(&mut self) {
        let current = self.current.take();
        self.restyle(current);
    }

    /// The registered item enclosing `target`, if any.
    fn resolve_item(&self, target: &str) -> Option<String> {
        nearest_of_class(&self.root, target, &self.config.item_class)
            .filter(|id| self.registry.contains(id))
    }

    fn item(&self, id: &str) -> Option<&Element> {
        self.root
            .child_elements()
            .iter()
            .find(|child| child.id == id && child.has_class(&self.config.item_class))
    }

    fn set_actions_visible(&mut self, item_id: &str, visible: bool) {
        let action_class = self.config.item_action_class.clone();
        if let Some(item) = find_element_mut(&mut self.root, item_id) {
            for_each_with_class_mut(item, &action_class, &mut |surface: &mut Element| {
                surface.set_visible(visible)
            });
        }
    }

    fn selection_changed(&self) -> ListEvent<D> {
        ListEvent::SelectionChanged {
            selected_items: self.selected_items(),
        }
    }

    /// Remove every item and its bindings. Bindings on the root stay.
    fn clear_items(&mut self) {
        for child in self.root.clear_children() {
            self.handlers.unbind_subtree(&child);
        }
        self.registry.clear();
        self.current = None;
    }

    /// Bubble `event` from its target to the root.
    fn dispatch(&mut self, event: &Event) -> (EventResult, Vec<ListEvent<D>>) {
        let Some(path) = path_to(&self.root, event.target()) else {
            log::debug!(
                "[SelectableList::dispatch] target {} not in list, ignoring",
                event.target()
            );
            return (EventResult::Ignored, Vec::new());
        };

        let kind = event.kind();
        let mut handled = false;
        let mut cx = HandlerContext::new(self, event);

        for id in path.iter().rev() {
            let Some(handler) = cx.list().handlers.get(id, kind) else {
                continue;
            };
            cx.set_current_target(id);
            handler(&mut cx);
            handled = true;
            if cx.is_propagation_stopped() {
                log::debug!("[SelectableList::dispatch] {kind} stopped at {id}");
                break;
            }
        }

        let result = if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        };
        (result, cx.into_notifications())
    }
}

impl<D: Clone + 'static> ListInner<D> {
    /// Decorate, register and bind a new item.
    fn add_item(&mut self, mut item: Element, data: D) -> Result<(), ListError> {
        if item.id.is_empty() {
            return Err(ListError::MissingId);
        }
        if self.registry.contains(&item.id) {
            return Err(ListError::DuplicateId(item.id));
        }

        self.decorate(&mut item);

        // Bubble paths rely on ids being unique across the whole tree
        let mut ids = Vec::new();
        collect_ids(&item, &mut ids);
        ids.sort();
        if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ListError::DuplicateId(pair[0].clone()));
        }
        if let Some(taken) = ids.iter().find(|id| find_element(&self.root, id).is_some()) {
            return Err(ListError::DuplicateId(taken.clone()));
        }

        self.registry.put(item.id.clone(), data)?;
        self.bind_item(&item);
        self.root.append(item);
        self.refresh();
        Ok(())
    }

    /// Apply item markup: item class, checkbox, action surface, hidden actions.
    fn decorate(&self, item: &mut Element) {
        let had_children = !item.child_elements().is_empty();
        if let Content::Text(text) = &item.content {
            let label = Element::text(text.clone()).id(format!("{}-label", item.id));
            item.content = Content::Children(vec![label]);
        }

        item.add_class(self.config.item_class.clone());

        if self.config.selectable {
            if had_children {
                if let Some(last) = item.child_elements_mut().last_mut() {
                    last.add_class(self.config.item_action_class.clone());
                }
            }
            item.prepend(Element::checkbox(false).id(checkbox_id(&item.id)));
        }

        for_each_with_class_mut(item, &self.config.item_action_class, &mut |surface: &mut Element| {
            surface.set_visible(false)
        });
    }

    fn bind_item(&mut self, item: &Element) {
        let mut surfaces = vec![item.id.clone()];
        surfaces.extend(
            find_by_class(item, &self.config.item_action_class)
                .into_iter()
                .map(|surface| surface.id.clone()),
        );

        for surface in &surfaces {
            self.handlers
                .register(surface, EventKind::Click, activate_handler());
            self.handlers
                .register(surface, EventKind::DoubleClick, activate_handler());
            self.handlers
                .register(surface, EventKind::MouseEnter, hover_handler(true));
            self.handlers
                .register(surface, EventKind::MouseLeave, hover_handler(false));
        }

        if self.config.selectable {
            self.handlers
                .register(&checkbox_id(&item.id), EventKind::Change, change_handler());
        }
    }

    fn current_item_changed(&self) -> ListEvent<D> {
        ListEvent::CurrentItemChanged {
            item: self.current.clone(),
            data: self
                .current
                .as_deref()
                .and_then(|id| self.registry.get(id))
                .cloned(),
            selected_items: self.selected_items(),
        }
    }

    /// Remove an item and make the first remaining one current.
    fn remove_item(&mut self, id: &str) -> Option<(D, ListEvent<D>)> {
        let Some(data) = self.registry.remove(id) else {
            log::warn!("[SelectableList::remove_by_id] no item registered under {id}");
            return None;
        };

        if let Some(element) = self.root.remove_child(id) {
            let unbound = self.handlers.unbind_subtree(&element);
            log::debug!("[SelectableList::remove_by_id] removed {id}, unbound {unbound} handler(s)");
        }

        let next = self.item_ids().into_iter().next();
        self.restyle(next);
        Some((data, self.current_item_changed()))
    }
}

fn checkbox_id(item_id: &str) -> String {
    format!("{item_id}-checkbox")
}

fn collect_ids(element: &Element, ids: &mut Vec<String>) {
    ids.push(element.id.clone());
    for child in element.child_elements() {
        collect_ids(child, ids);
    }
}

// =============================================================================
// Item Handlers
// =============================================================================

fn handler<D, F>(f: F) -> Handler<D>
where
    F: Fn(&mut HandlerContext<'_, D>) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Click and double-click: make the enclosing item current.
fn activate_handler<D: Clone + 'static>() -> Handler<D> {
    handler(|cx: &mut HandlerContext<'_, D>| {
        let Some(item) = cx.list().resolve_item(cx.target()) else {
            return;
        };
        log::debug!("[SelectableList::activate] {item} via {}", cx.current_target());
        cx.list_mut().restyle(Some(item));
        let event = cx.list().current_item_changed();
        cx.notify(event);
        cx.stop_propagation();
    })
}

/// Checkbox change: record the new value, make the enclosing item current,
/// report the selection.
fn change_handler<D: 'static>() -> Handler<D> {
    handler(|cx: &mut HandlerContext<'_, D>| {
        let Some(checked) = cx.event().checked() else {
            return;
        };
        let target = cx.target().to_string();
        let item = cx.list().resolve_item(&target);
        let list = cx.list_mut();
        let Some(checkbox) = find_element_mut(&mut list.root, &target) else {
            return;
        };
        if !checkbox.set_checked(checked) {
            return;
        }
        match item {
            Some(item) => list.restyle(Some(item)),
            None => list.refresh(),
        }
        log::debug!("[SelectableList::change] {target} -> {checked}");
        let event = cx.list().selection_changed();
        cx.notify(event);
    })
}

/// Hover: reveal or hide the enclosing item's action surfaces.
fn hover_handler<D: 'static>(visible: bool) -> Handler<D> {
    handler(move |cx: &mut HandlerContext<'_, D>| {
        if let Some(item) = cx.list().resolve_item(cx.target()) {
            cx.list_mut().set_actions_visible(&item, visible);
        }
    })
}

// =============================================================================
// SelectableList
// =============================================================================

/// A stateful selectable list.
///
/// Cheap to clone; clones share the same list. Notifications are delivered
/// after the internal lock is released, so subscribers may call back into
/// the list.
pub struct SelectableList<D> {
    state: State<ListInner<D>>,
    bus: EventBus<D>,
}

impl<D> Clone for SelectableList<D> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            bus: self.bus.clone(),
        }
    }
}

impl<D> std::fmt::Debug for SelectableList<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (root_id, item_count, current) = self.state.read(|inner| {
            (
                inner.root.id.clone(),
                inner.registry.len(),
                inner.current.clone(),
            )
        });
        f.debug_struct("SelectableList")
            .field("root", &root_id)
            .field("item_count", &item_count)
            .field("current", &current)
            .field("bus", &self.bus)
            .finish()
    }
}

impl<D: Clone + Send + Sync + 'static> SelectableList<D> {
    /// Create an empty list with a fresh root element.
    pub fn new(config: ListConfig) -> Result<Self, ConfigError> {
        Self::with_root(Element::box_().id(DEFAULT_ROOT_ID), config)
    }

    /// Create a list on a host-supplied root element.
    ///
    /// Any children the root already has are discarded; the list starts
    /// empty.
    pub fn with_root(mut root: Element, config: ListConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let discarded = root.clear_children();
        if !discarded.is_empty() {
            log::debug!(
                "[SelectableList::with_root] discarded {} existing child(ren) of {}",
                discarded.len(),
                root.id
            );
        }

        Ok(Self {
            state: State::new(ListInner::new(root, config)),
            bus: EventBus::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Register an item with its data and bind its handlers.
    ///
    /// The item is appended to the list, receives the item class and, for
    /// selectable lists, an unchecked checkbox with id `"{id}-checkbox"`.
    /// Its last original child becomes the hover-revealed action surface.
    pub fn add_item(&self, item: Element, data: D) -> Result<(), ListError> {
        let id = item.id.clone();
        self.state.update(|inner| inner.add_item(item, data))?;
        log::debug!("[SelectableList::add_item] registered {id}");
        Ok(())
    }

    /// Remove an item, make the first remaining item current and fire
    /// `currentItemChanged`.
    ///
    /// Returns the removed item's data, or None (and fires nothing) if no
    /// item is registered under `id`.
    pub fn remove_by_id(&self, id: &str) -> Option<D> {
        let (data, event) = self.state.update(|inner| inner.remove_item(id))?;
        self.bus.emit(&event);
        Some(data)
    }

    /// Set every checkbox to `checked`, clear the current item and fire
    /// `selectionChanged`.
    pub fn select(&self, checked: bool) {
        let event = self.state.update(|inner| {
            let touched = set_all_checkboxes(&mut inner.root, checked);
            log::debug!("[SelectableList::select] set {touched} checkbox(es) to {checked}");
            inner.restyle(None);
            inner.selection_changed()
        });
        self.bus.emit(&event);
    }

    /// Check or uncheck one item, make it current and fire
    /// `selectionChanged`.
    pub fn set_checked(&self, id: &str, checked: bool) -> Result<(), ListError> {
        let event = self.state.update(|inner| {
            if !inner.registry.contains(id) {
                return Err(ListError::UnknownItem(id.to_string()));
            }
            if !inner.config.selectable {
                return Err(ListError::NotSelectable);
            }
            let item = find_element_mut(&mut inner.root, id)
                .ok_or_else(|| ListError::UnknownItem(id.to_string()))?;
            let checkbox = first_checkbox_mut(item).ok_or(ListError::NotSelectable)?;
            checkbox.set_checked(checked);
            inner.restyle(Some(id.to_string()));
            Ok(inner.selection_changed())
        })?;
        self.bus.emit(&event);
        Ok(())
    }

    /// Remove every item and its data. Fires nothing.
    ///
    /// Handlers bound on the list root itself are kept.
    pub fn clear(&self) {
        self.state.update(|inner| inner.clear_items());
        log::debug!("[SelectableList::clear] list emptied");
    }

    /// Unbind every handler, drop every subscriber and empty the list.
    pub fn teardown(self) {
        self.state.update(|inner| {
            inner.clear_items();
            inner.handlers.clear();
        });
        self.bus.clear();
        log::debug!("[SelectableList::teardown] done");
    }

    // -------------------------------------------------------------------------
    // Snapshots
    // -------------------------------------------------------------------------

    /// Data registered for `id`.
    pub fn get_data(&self, id: &str) -> Option<D> {
        self.state.read(|inner| inner.registry.get(id).cloned())
    }

    /// The current item id.
    pub fn current_item(&self) -> Option<String> {
        self.state.read(|inner| inner.current.clone())
    }

    /// Ids of checked items, in display order.
    pub fn selected_items(&self) -> Vec<String> {
        self.state.read(|inner| inner.selected_items())
    }

    /// Ids of displayed items, in display order.
    pub fn item_ids(&self) -> Vec<String> {
        self.state.read(|inner| inner.item_ids())
    }

    /// Ids with registered data (sorted).
    pub fn registered_ids(&self) -> Vec<String> {
        self.state.read(|inner| inner.registry.ids())
    }

    /// Classification read from the item's markers.
    pub fn classification(&self, id: &str) -> Option<Classification> {
        self.state.read(|inner| {
            inner
                .item(id)
                .map(|item| Classification::of(item, &inner.config.classes))
        })
    }

    /// Whether the item's action surface is currently shown.
    ///
    /// None if the item is unknown or has no action surface.
    pub fn actions_visible(&self, id: &str) -> Option<bool> {
        self.state.read(|inner| {
            let item = inner.item(id)?;
            let surfaces = find_by_class(item, &inner.config.item_action_class);
            if surfaces.is_empty() {
                None
            } else {
                Some(surfaces.iter().any(|surface| surface.visible))
            }
        })
    }

    pub fn len(&self) -> usize {
        self.state.read(|inner| inner.registry.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of the list's element tree, for rendering.
    pub fn root(&self) -> Element {
        self.state.read(|inner| inner.root.clone())
    }

    /// Id of the list root element.
    pub fn root_id(&self) -> String {
        self.state.read(|inner| inner.root.id.clone())
    }

    pub fn config(&self) -> ListConfig {
        self.state.read(|inner| inner.config.clone())
    }

    /// Check if anything changed since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.state.clear_dirty();
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Feed an interaction into the list.
    ///
    /// The event bubbles from its target towards the list root, running every
    /// bound handler until one stops propagation. Notifications raised along
    /// the way are delivered afterwards, in order.
    pub fn dispatch(&self, event: Event) -> EventResult {
        let (result, notifications) = self.state.update(|inner| inner.dispatch(&event));
        for notification in &notifications {
            self.bus.emit(notification);
        }
        result
    }

    /// Bind an extra handler on any element of the list, including its root.
    ///
    /// Replaces an existing binding for the same element and kind. Handlers
    /// run with the list locked and must not call back into it.
    pub fn bind<F>(&self, element_id: &str, kind: EventKind, f: F)
    where
        F: Fn(&mut HandlerContext<'_, D>) + Send + Sync + 'static,
    {
        self.state
            .update(|inner| inner.handlers.register(element_id, kind, handler(f)));
    }

    /// Remove a binding. Returns false if nothing was bound.
    pub fn unbind(&self, element_id: &str, kind: EventKind) -> bool {
        self.state
            .update(|inner| inner.handlers.remove(element_id, kind))
    }

    /// Check whether an element has a handler for `kind`.
    pub fn is_bound(&self, element_id: &str, kind: EventKind) -> bool {
        self.state
            .read(|inner| inner.handlers.is_bound(element_id, kind))
    }

    /// Subscribe to `currentItemChanged` and `selectionChanged`.
    pub fn subscribe<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&ListEvent<D>) + Send + Sync + 'static,
    {
        self.bus.subscribe(Arc::new(f))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }
}

impl<D: Clone + Send + Sync + 'static> ItemEvents for SelectableList<D> {
    fn on_click(&self, target: &str) -> EventResult {
        self.dispatch(Event::click(target))
    }

    fn on_double_click(&self, target: &str) -> EventResult {
        self.dispatch(Event::double_click(target))
    }

    fn on_change(&self, target: &str, checked: bool) -> EventResult {
        self.dispatch(Event::change(target, checked))
    }

    fn on_hover_enter(&self, target: &str) -> EventResult {
        self.dispatch(Event::mouse_enter(target))
    }

    fn on_hover_exit(&self, target: &str) -> EventResult {
        self.dispatch(Event::mouse_leave(target))
    }
}
