use listdom::{nearest_of_class, path_to, Element, Event, EventKind};

fn tree() -> Element {
    Element::box_().id("root").child(
        Element::box_()
            .id("item")
            .class("item")
            .child(Element::box_().id("panel").class("actions").child(Element::text("x").id("icon"))),
    )
}

// ============================================================================
// Bubble Path
// ============================================================================

#[test]
fn test_path_to_target() {
    let root = tree();
    assert_eq!(
        path_to(&root, "icon"),
        Some(vec![
            "root".to_string(),
            "item".to_string(),
            "panel".to_string(),
            "icon".to_string()
        ])
    );
}

#[test]
fn test_path_to_root_itself() {
    let root = tree();
    assert_eq!(path_to(&root, "root"), Some(vec!["root".to_string()]));
}

#[test]
fn test_path_to_missing() {
    assert_eq!(path_to(&tree(), "nope"), None);
}

#[test]
fn test_nearest_of_class_walks_up() {
    let root = tree();
    assert_eq!(nearest_of_class(&root, "icon", "item"), Some("item".to_string()));
    assert_eq!(nearest_of_class(&root, "icon", "actions"), Some("panel".to_string()));
}

#[test]
fn test_nearest_of_class_includes_self() {
    let root = tree();
    assert_eq!(nearest_of_class(&root, "item", "item"), Some("item".to_string()));
}

#[test]
fn test_nearest_of_class_none_outside_item() {
    let root = tree();
    assert_eq!(nearest_of_class(&root, "root", "item"), None);
    assert_eq!(nearest_of_class(&root, "missing", "item"), None);
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_event_target_and_kind() {
    let event = Event::change("cb", true);
    assert_eq!(event.target(), "cb");
    assert_eq!(event.kind(), EventKind::Change);
    assert_eq!(event.checked(), Some(true));

    let event = Event::double_click("item");
    assert_eq!(event.kind(), EventKind::DoubleClick);
    assert_eq!(event.checked(), None);
}

#[test]
fn test_event_kind_names() {
    assert_eq!(EventKind::Click.to_string(), "on_click");
    assert_eq!(EventKind::MouseEnter.as_str(), "on_mouse_enter");
    assert_eq!(EventKind::MouseLeave.as_str(), "on_mouse_leave");
}
