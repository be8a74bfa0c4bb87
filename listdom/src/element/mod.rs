mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect all descendants of `root` carrying `class`, in document order.
/// The root itself is not considered.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    for child in root.child_elements() {
        collect_by_class(child, class, &mut found);
    }
    found
}

fn collect_by_class<'a>(element: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        found.push(element);
    }
    for child in element.child_elements() {
        collect_by_class(child, class, found);
    }
}

/// Apply `f` to every descendant of `root` carrying `class`.
pub fn for_each_with_class_mut(root: &mut Element, class: &str, f: &mut impl FnMut(&mut Element)) {
    for child in root.child_elements_mut() {
        if child.has_class(class) {
            f(child);
        }
        for_each_with_class_mut(child, class, f);
    }
}

/// Whether any descendant of `root` is a checked checkbox.
pub fn has_checked_checkbox(root: &Element) -> bool {
    root.child_elements()
        .iter()
        .any(|child| child.checked() == Some(true) || has_checked_checkbox(child))
}

/// First checkbox among the descendants of `root`, in document order.
pub fn first_checkbox_mut(root: &mut Element) -> Option<&mut Element> {
    for child in root.child_elements_mut() {
        if child.content.is_checkbox() {
            return Some(child);
        }
        if let Some(found) = first_checkbox_mut(child) {
            return Some(found);
        }
    }
    None
}

/// Set every checkbox below `root` to `checked`. Returns how many were touched.
pub fn set_all_checkboxes(root: &mut Element, checked: bool) -> usize {
    let mut count = 0;
    for child in root.child_elements_mut() {
        if child.set_checked(checked) {
            count += 1;
        }
        count += set_all_checkboxes(child, checked);
    }
    count
}
