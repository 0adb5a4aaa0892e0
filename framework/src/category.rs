use std::{fmt, str::FromStr};

use twilight_model::channel::message::component::ComponentType;

/// The closed set of component handler groupings.
///
/// A handler's category comes from the directory it lives in, an event's
/// category from its component type. Both resolve to this enum, so a handler
/// under `buttons/` can only ever be reached by a button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Buttons,
    Modals,
    Selects,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Buttons, Self::Modals, Self::Selects];

    /// Directory name for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Modals => "modals",
            Self::Selects => "selects",
        }
    }

    /// Singular form, used in diagnostics ("duplicate button ...").
    pub fn singular(self) -> &'static str {
        match self {
            Self::Buttons => "button",
            Self::Modals => "modal",
            Self::Selects => "select",
        }
    }

    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }

    /// Classify an interaction by its component type.
    ///
    /// Modal submissions carry no component type, so `None` and every kind
    /// that isn't a button or a select menu fall through to [`Category::Modals`].
    pub fn from_component_type(kind: Option<ComponentType>) -> Self {
        match kind {
            Some(ComponentType::Button) => Self::Buttons,
            Some(
                ComponentType::TextSelectMenu
                | ComponentType::UserSelectMenu
                | ComponentType::RoleSelectMenu
                | ComponentType::MentionableSelectMenu
                | ComponentType::ChannelSelectMenu,
            ) => Self::Selects,
            _ => Self::Modals,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown component category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dir_name(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
