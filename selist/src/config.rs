//! List configuration types.

use thiserror::Error;

/// Marker classes applied to items for each non-plain classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Current item, checkbox off.
    pub current: String,
    /// Checkbox on, not the current item.
    pub checked: String,
    /// Current item with its checkbox on.
    pub checked_current: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            current: "dc-selected-list-item".into(),
            checked: "dc-checked-list-item".into(),
            checked_current: "dc-checked-selected-list-item".into(),
        }
    }
}

impl ClassNames {
    /// All three marker classes, for clearing.
    pub fn all(&self) -> [&str; 3] {
        [
            self.current.as_str(),
            self.checked.as_str(),
            self.checked_current.as_str(),
        ]
    }
}

/// Per-list configuration.
///
/// Controls which class markers identify items and action surfaces, and
/// whether a checkbox is injected into every registered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Class marking an element as a list item.
    pub item_class: String,

    /// If true, each item gets a checkbox and its last child becomes the
    /// action surface.
    pub selectable: bool,

    /// Class marking the hover-revealed action surface inside an item.
    pub item_action_class: String,

    /// Classification marker classes.
    pub classes: ClassNames,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_class: "dc-item".into(),
            selectable: true,
            item_action_class: "dc-action-panel".into(),
            classes: ClassNames::default(),
        }
    }
}

impl ListConfig {
    /// Create a config with default markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item class.
    pub fn item_class(mut self, class: impl Into<String>) -> Self {
        self.item_class = class.into();
        self
    }

    /// Enable or disable checkbox injection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set the action surface class.
    pub fn item_action_class(mut self, class: impl Into<String>) -> Self {
        self.item_action_class = class.into();
        self
    }

    /// Set the classification marker classes.
    pub fn classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }

    /// Check that every marker is non-empty and no two markers share a name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("item_class", self.item_class.as_str()),
            ("item_action_class", self.item_action_class.as_str()),
            ("classes.current", self.classes.current.as_str()),
            ("classes.checked", self.classes.checked.as_str()),
            ("classes.checked_current", self.classes.checked_current.as_str()),
        ];

        for (i, (field, class)) in named.iter().enumerate() {
            if class.trim().is_empty() {
                return Err(ConfigError::EmptyClass { field: *field });
            }
            if named[..i].iter().any(|(_, other)| other == class) {
                return Err(ConfigError::ClassCollision {
                    class: class.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Errors from an invalid [`ListConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A marker class is empty.
    #[error("Config field '{field}' must not be empty")]
    EmptyClass {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Two markers use the same class name.
    #[error("Class '{class}' is used for more than one marker")]
    ClassCollision {
        /// The duplicated class.
        class: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ListConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_empty_class_rejected() {
        let config = ListConfig::new().item_action_class(" ");
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyClass {
                field: "item_action_class"
            })
        );
    }

    #[test]
    fn test_colliding_classes_rejected() {
        let config = ListConfig::new().item_action_class("dc-item");
        assert_eq!(
            config.validate(),
            Err(ConfigError::ClassCollision {
                class: "dc-item".into()
            })
        );
    }
}
