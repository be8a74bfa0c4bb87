/// Interaction events with element targeting.
///
/// Every event names the innermost element it happened on. Dispatchers bubble
/// it from there towards the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click.
    Click { target: String },
    /// Mouse double click.
    DoubleClick { target: String },
    /// Pointer entered the element.
    MouseEnter { target: String },
    /// Pointer left the element.
    MouseLeave { target: String },
    /// A checkbox changed value. `checked` is the new state.
    Change { target: String, checked: bool },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn double_click(target: impl Into<String>) -> Self {
        Self::DoubleClick {
            target: target.into(),
        }
    }

    pub fn mouse_enter(target: impl Into<String>) -> Self {
        Self::MouseEnter {
            target: target.into(),
        }
    }

    pub fn mouse_leave(target: impl Into<String>) -> Self {
        Self::MouseLeave {
            target: target.into(),
        }
    }

    pub fn change(target: impl Into<String>, checked: bool) -> Self {
        Self::Change {
            target: target.into(),
            checked,
        }
    }

    /// The element the event happened on.
    pub fn target(&self) -> &str {
        match self {
            Self::Click { target }
            | Self::DoubleClick { target }
            | Self::MouseEnter { target }
            | Self::MouseLeave { target }
            | Self::Change { target, .. } => target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::DoubleClick { .. } => EventKind::DoubleClick,
            Self::MouseEnter { .. } => EventKind::MouseEnter,
            Self::MouseLeave { .. } => EventKind::MouseLeave,
            Self::Change { .. } => EventKind::Change,
        }
    }

    /// New checked state of a Change event.
    pub fn checked(&self) -> Option<bool> {
        match self {
            Self::Change { checked, .. } => Some(*checked),
            _ => None,
        }
    }
}

/// Event type without payload, used as a handler binding key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DoubleClick,
    MouseEnter,
    MouseLeave,
    Change,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "on_click",
            Self::DoubleClick => "on_double_click",
            Self::MouseEnter => "on_mouse_enter",
            Self::MouseLeave => "on_mouse_leave",
            Self::Change => "on_change",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
