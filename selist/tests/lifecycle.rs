use std::sync::{Arc, Mutex};

use selist::{
    ClassNames, Classification, ConfigError, DEFAULT_ROOT_ID, Element, Event, EventKind,
    ListConfig, ListError, ListEvent, SelectableList,
};

fn item(id: &str) -> Element {
    Element::box_()
        .id(id)
        .child(Element::text(id).id(format!("{id}-label")))
        .child(Element::box_().id(format!("{id}-actions")))
}

fn create_list() -> SelectableList<&'static str> {
    let list = SelectableList::new(ListConfig::default()).unwrap();
    list.add_item(item("a"), "alpha").unwrap();
    list.add_item(item("b"), "beta").unwrap();
    list
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_list_is_empty() {
    let list: SelectableList<i32> = SelectableList::new(ListConfig::default()).unwrap();

    assert!(list.is_empty());
    assert_eq!(list.root_id(), DEFAULT_ROOT_ID);
    assert!(list.item_ids().is_empty());
    assert_eq!(list.current_item(), None);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ListConfig::new().classes(ClassNames {
        current: "same".into(),
        checked: "same".into(),
        checked_current: "other".into(),
    });

    let err = SelectableList::<i32>::new(config).unwrap_err();
    assert_eq!(err, ConfigError::ClassCollision { class: "same".into() });
}

#[test]
fn test_with_root_discards_existing_children() {
    let root = Element::box_()
        .id("host")
        .child(Element::text("stale").id("stale"));

    let list: SelectableList<i32> = SelectableList::with_root(root, ListConfig::default()).unwrap();

    assert_eq!(list.root_id(), "host");
    assert!(list.root().child_elements().is_empty());
    list.add_item(item("stale"), 1).unwrap();
    assert_eq!(list.item_ids(), vec!["stale"]);
}

#[test]
fn test_custom_markers_are_used() {
    let config = ListConfig::new()
        .item_class("row")
        .item_action_class("row-actions")
        .classes(ClassNames {
            current: "is-current".into(),
            checked: "is-checked".into(),
            checked_current: "is-both".into(),
        });
    let list = SelectableList::new(config).unwrap();
    list.add_item(item("a"), 1).unwrap();

    list.dispatch(Event::click("a"));
    list.dispatch(Event::change("a-checkbox", true));

    let root = list.root();
    let a = listdom::find_element(&root, "a").unwrap();
    assert_eq!(a.classes, vec!["row", "is-both"]);
    assert!(listdom::find_element(&root, "a-actions").unwrap().has_class("row-actions"));
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_get_data() {
    let list = create_list();

    assert_eq!(list.get_data("a"), Some("alpha"));
    assert_eq!(list.get_data("b"), Some("beta"));
    assert_eq!(list.get_data("a-label"), None);
}

#[test]
fn test_duplicate_id_is_rejected() {
    let list = create_list();

    assert_eq!(
        list.add_item(item("a"), "again"),
        Err(ListError::DuplicateId("a".into()))
    );
    assert_eq!(list.len(), 2);
    assert_eq!(list.get_data("a"), Some("alpha"));
}

#[test]
fn test_item_colliding_with_existing_element_is_rejected() {
    let list = create_list();

    let clash = Element::box_().id("c").child(Element::text("x").id("a-label"));
    assert_eq!(
        list.add_item(clash, "c"),
        Err(ListError::DuplicateId("a-label".into()))
    );

    let clash = Element::box_().id("a-checkbox");
    assert_eq!(
        list.add_item(clash, "c"),
        Err(ListError::DuplicateId("a-checkbox".into()))
    );

    assert_eq!(list.item_ids(), vec!["a", "b"]);
    assert_eq!(list.registered_ids(), vec!["a", "b"]);
}

#[test]
fn test_empty_id_is_rejected() {
    let list = create_list();

    assert_eq!(
        list.add_item(Element::box_().id(""), "nameless"),
        Err(ListError::MissingId)
    );
}

#[test]
fn test_text_item_is_wrapped_in_label() {
    let list: SelectableList<i32> = SelectableList::new(ListConfig::default()).unwrap();
    list.add_item(Element::text("Plain text").id("t"), 1).unwrap();

    let root = list.root();
    let t = listdom::find_element(&root, "t").unwrap();
    let ids: Vec<&str> = t.child_elements().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["t-checkbox", "t-label"]);
    assert_eq!(list.actions_visible("t"), None);

    list.dispatch(Event::click("t-label"));
    assert_eq!(list.current_item().as_deref(), Some("t"));
}

#[test]
fn test_adding_item_keeps_current() {
    let list = create_list();
    list.dispatch(Event::click("b"));

    list.add_item(item("c"), "gamma").unwrap();

    assert_eq!(list.current_item().as_deref(), Some("b"));
    assert_eq!(list.classification("c"), Some(Classification::Plain));
}

// ============================================================================
// set_checked
// ============================================================================

#[test]
fn test_set_checked_makes_item_current() {
    let list = create_list();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    list.subscribe(move |event: &ListEvent<&'static str>| {
        sink.lock().unwrap().push(event.clone());
    });
    list.dispatch(Event::click("a"));

    list.set_checked("b", true).unwrap();

    assert_eq!(list.classification("a"), Some(Classification::Plain));
    assert_eq!(list.classification("b"), Some(Classification::CheckedCurrent));
    assert_eq!(list.current_item().as_deref(), Some("b"));
    assert_eq!(
        recorded.lock().unwrap().last(),
        Some(&ListEvent::SelectionChanged {
            selected_items: vec!["b".into()],
        })
    );
}

#[test]
fn test_set_checked_unknown_item() {
    let list = create_list();

    assert_eq!(
        list.set_checked("zzz", true),
        Err(ListError::UnknownItem("zzz".into()))
    );
}

// ============================================================================
// Non-selectable Lists
// ============================================================================

#[test]
fn test_non_selectable_list_has_no_checkboxes() {
    let list = SelectableList::new(ListConfig::new().selectable(false)).unwrap();
    list.add_item(item("a"), 1).unwrap();

    let root = list.root();
    assert!(listdom::find_element(&root, "a-checkbox").is_none());
    assert!(listdom::find_element(&root, "a").unwrap().has_class("dc-item"));
    assert_eq!(list.actions_visible("a"), None);
    assert_eq!(list.set_checked("a", true), Err(ListError::NotSelectable));

    list.dispatch(Event::click("a-label"));
    assert_eq!(list.classification("a"), Some(Classification::Current));
}

#[test]
fn test_non_selectable_list_honors_marked_action_surface() {
    let list = SelectableList::new(ListConfig::new().selectable(false)).unwrap();
    let a = Element::box_()
        .id("a")
        .child(Element::box_().id("a-panel").class("dc-action-panel"));
    list.add_item(a, 1).unwrap();

    assert_eq!(list.actions_visible("a"), Some(false));
    list.dispatch(Event::mouse_enter("a"));
    assert_eq!(list.actions_visible("a"), Some(true));
}

#[test]
fn test_select_all_without_checkboxes_reports_nothing_checked() {
    let list = SelectableList::new(ListConfig::new().selectable(false)).unwrap();
    list.add_item(item("a"), 1).unwrap();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    list.subscribe(move |event: &ListEvent<i32>| sink.lock().unwrap().push(event.clone()));

    list.select(true);

    assert_eq!(
        *recorded.lock().unwrap(),
        vec![ListEvent::SelectionChanged {
            selected_items: vec![],
        }]
    );
}

// ============================================================================
// Clear and Teardown
// ============================================================================

#[test]
fn test_clear_empties_list_silently() {
    let list = create_list();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    list.subscribe(move |event: &ListEvent<&'static str>| {
        sink.lock().unwrap().push(event.clone());
    });
    list.bind(&list.root_id(), EventKind::Click, |_cx| {});
    list.dispatch(Event::click("a"));
    recorded.lock().unwrap().clear();

    list.clear();

    assert!(list.is_empty());
    assert!(list.item_ids().is_empty());
    assert_eq!(list.current_item(), None);
    assert!(!list.is_bound("a", EventKind::Click));
    assert!(list.is_bound(&list.root_id(), EventKind::Click));
    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn test_teardown_detaches_everything() {
    let list = create_list();
    let handle = list.clone();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    list.subscribe(move |event: &ListEvent<&'static str>| {
        sink.lock().unwrap().push(event.clone());
    });
    list.bind(&list.root_id(), EventKind::Click, |_cx| {});

    list.teardown();

    assert!(handle.is_empty());
    assert!(!handle.is_bound(&handle.root_id(), EventKind::Click));
    handle.select(true);
    assert!(recorded.lock().unwrap().is_empty());
}

// ============================================================================
// Subscriptions and Dirty Tracking
// ============================================================================

#[test]
fn test_unsubscribe() {
    let list = create_list();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    let id = list.subscribe(move |event: &ListEvent<&'static str>| {
        sink.lock().unwrap().push(event.name());
    });

    list.select(true);
    assert!(list.unsubscribe(id));
    assert!(!list.unsubscribe(id));
    list.select(false);

    assert_eq!(*recorded.lock().unwrap(), vec!["selectionChanged"]);
}

#[test]
fn test_dirty_tracking() {
    let list = create_list();
    assert!(list.is_dirty());

    list.clear_dirty();
    list.get_data("a");
    list.classification("a");
    assert!(!list.is_dirty());

    list.dispatch(Event::click("a"));
    assert!(list.is_dirty());
}

#[test]
fn test_hover_marks_list_dirty() {
    let list = create_list();
    list.clear_dirty();

    list.dispatch(Event::mouse_enter("a"));

    assert!(list.is_dirty());
    list.clear_dirty();
    assert!(!list.is_dirty());
}
