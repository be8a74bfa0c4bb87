#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// A boolean selector. `checked` is the only state it carries.
    Checkbox {
        checked: bool,
    },
    Children(Vec<super::Element>),
}

impl Content {
    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::Checkbox { .. })
    }
}
