use crate::element::Element;

/// Chain of element ids from `root` down to `id`, both inclusive.
/// Returns None if `id` is not in the tree.
///
/// Dispatchers walk this in reverse to bubble an event from its target.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut chain = Vec::new();
    if collect_path(root, id, &mut chain) {
        chain.reverse();
        Some(chain)
    } else {
        log::trace!("[path_to] {id} not found under {}", root.id);
        None
    }
}

fn collect_path(element: &Element, id: &str, chain: &mut Vec<String>) -> bool {
    if element.id == id {
        chain.push(element.id.clone());
        return true;
    }

    for child in element.child_elements() {
        if collect_path(child, id, chain) {
            chain.push(element.id.clone());
            return true;
        }
    }

    false
}

/// Find the nearest element carrying `class`, starting at `id` itself and
/// walking up towards `root`. Returns its id.
pub fn nearest_of_class(root: &Element, id: &str, class: &str) -> Option<String> {
    let mut ancestors = Vec::new();
    if !collect_ancestors(root, id, &mut ancestors) {
        return None;
    }
    // Innermost first
    ancestors
        .into_iter()
        .find(|element| element.has_class(class))
        .map(|element| element.id.clone())
}

fn collect_ancestors<'a>(element: &'a Element, id: &str, chain: &mut Vec<&'a Element>) -> bool {
    if element.id == id {
        chain.push(element);
        return true;
    }

    for child in element.child_elements() {
        if collect_ancestors(child, id, chain) {
            chain.push(element);
            return true;
        }
    }

    false
}
