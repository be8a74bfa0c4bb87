//! Per-item selection classification.

use listdom::Element;

use crate::config::ClassNames;

/// The mutually exclusive state an item is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    /// Not current, not checked.
    #[default]
    Plain,
    /// The current item, not checked.
    Current,
    /// Checked, not current.
    Checked,
    /// Checked and current.
    CheckedCurrent,
}

impl Classification {
    pub fn new(checked: bool, current: bool) -> Self {
        match (checked, current) {
            (false, false) => Self::Plain,
            (false, true) => Self::Current,
            (true, false) => Self::Checked,
            (true, true) => Self::CheckedCurrent,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current | Self::CheckedCurrent)
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked | Self::CheckedCurrent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Current => "current",
            Self::Checked => "checked",
            Self::CheckedCurrent => "checked-current",
        }
    }

    /// Marker class for this classification. Plain items carry none.
    pub fn class_name<'a>(&self, classes: &'a ClassNames) -> Option<&'a str> {
        match self {
            Self::Plain => None,
            Self::Current => Some(classes.current.as_str()),
            Self::Checked => Some(classes.checked.as_str()),
            Self::CheckedCurrent => Some(classes.checked_current.as_str()),
        }
    }

    /// Read the classification back from an element's markers.
    ///
    /// If several markers are present, the most specific one wins.
    pub fn of(element: &Element, classes: &ClassNames) -> Self {
        if element.has_class(&classes.checked_current) {
            Self::CheckedCurrent
        } else if element.has_class(&classes.current) {
            Self::Current
        } else if element.has_class(&classes.checked) {
            Self::Checked
        } else {
            Self::Plain
        }
    }

    /// Replace whatever marker the element carries with this one.
    pub fn apply(&self, element: &mut Element, classes: &ClassNames) {
        element.remove_classes(classes.all());
        if let Some(class) = self.class_name(classes) {
            element.add_class(class);
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
