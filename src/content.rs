//! The five disjoint content shapes a [`crate::component::CompoundNode`] may carry (§3).

use crate::component::TextComponent;
use crate::raw::Unhandled;

#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Text {
        text: String,
    },
    Translatable {
        key: String,
        fallback: Option<String>,
        args: Option<Vec<TextComponent>>,
    },
    Scoreboard {
        selector: Option<String>,
        objective: Option<String>,
        unhandled: Option<Unhandled>,
    },
    Entity {
        selector: Option<String>,
        separator: Option<Box<TextComponent>>,
    },
    Keybind {
        key: Option<String>,
    },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text { text: text.into() }
    }

    pub fn translate(key: impl Into<String>) -> Self {
        Content::Translatable { key: key.into(), fallback: None, args: None }
    }

    pub fn keybind(key: impl Into<String>) -> Self {
        Content::Keybind { key: Some(key.into()) }
    }

    pub fn score(objective: impl Into<String>) -> Self {
        Content::Scoreboard { selector: None, objective: Some(objective.into()), unhandled: None }
    }
}
