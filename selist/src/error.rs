//! List error types.

use thiserror::Error;

/// Contract violations reported by [`SelectableList`](crate::SelectableList).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The item element has an empty identifier.
    #[error("Item has no identifier")]
    MissingId,

    /// The identifier is already registered or already present in the tree.
    #[error("Identifier '{0}' is already in use")]
    DuplicateId(String),

    /// No item is registered under this identifier.
    #[error("No item registered under '{0}'")]
    UnknownItem(String),

    /// The list was configured without checkboxes.
    #[error("List is not selectable")]
    NotSelectable,
}
