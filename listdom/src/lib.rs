pub mod element;
pub mod event;
pub mod path;

pub use element::{
    find_by_class, find_element, find_element_mut, first_checkbox_mut, for_each_with_class_mut,
    has_checked_checkbox, set_all_checkboxes, Content, Element,
};
pub use event::{Event, EventKind};
pub use path::{nearest_of_class, path_to};
