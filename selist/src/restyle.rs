//! Selection state machine.
//!
//! Classification is always derived from two inputs: the checkbox state found
//! inside each item and the single current item id. Restyling recomputes it
//! for every item directly under the list root, so the outcome never depends
//! on what markers were there before.

use listdom::{Element, has_checked_checkbox};

use crate::classification::Classification;
use crate::config::ListConfig;

/// Reclassify every item under `root` with `current` as the current item.
///
/// `None` is the global restyle: every item ends up `checked` or `plain`.
/// Returns the id of the item that ended up current, which is None when
/// `current` does not name an item under `root`.
pub fn restyle(root: &mut Element, config: &ListConfig, current: Option<&str>) -> Option<String> {
    let mut applied = None;

    for item in root.child_elements_mut() {
        if !item.has_class(&config.item_class) {
            continue;
        }

        let is_current = current == Some(item.id.as_str());
        let classification = Classification::new(has_checked_checkbox(item), is_current);
        classification.apply(item, &config.classes);

        if is_current {
            applied = Some(item.id.clone());
        }
    }

    applied
}

/// Ids of all items under `root`, in display order.
pub fn item_ids(root: &Element, config: &ListConfig) -> Vec<String> {
    root.child_elements()
        .iter()
        .filter(|child| child.has_class(&config.item_class))
        .map(|child| child.id.clone())
        .collect()
}

/// Ids of all items whose checkbox is checked, in display order.
///
/// Computed from the tree on every call.
pub fn selected_items(root: &Element, config: &ListConfig) -> Vec<String> {
    root.child_elements()
        .iter()
        .filter(|child| child.has_class(&config.item_class) && has_checked_checkbox(child))
        .map(|child| child.id.clone())
        .collect()
}
