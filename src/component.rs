//! The shared tree every wire encoding pivots through (§3).

use crate::content::Content;
use crate::format::Formatting;
use crate::raw::{RawValue, Unhandled};

/// The pivot data structure every parser produces and every emitter consumes.
///
/// Four cases (§3): a bare [`Plain`](TextComponent::Plain) string, an ambient-inheriting
/// [`Recursive`](TextComponent::Recursive) list, a fully styled
/// [`Compound`](TextComponent::Compound), or an opaque [`Invalid`](TextComponent::Invalid)
/// wrapping whatever didn't fit the schema.
#[derive(Clone, Debug, PartialEq)]
pub enum TextComponent {
    Plain(String),
    Recursive(Vec<TextComponent>),
    Compound(Box<CompoundNode>),
    Invalid(RawValue),
}

/// A styled node: optional content payload, optional `empty_node`, independent children,
/// a formatting block, opaque interaction stubs, and the `unhandled` residue bag (§3).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompoundNode {
    pub content: Option<Content>,
    pub formatting: Formatting,
    pub empty_node: Option<Box<TextComponent>>,
    pub children: Vec<TextComponent>,
    pub insertion: Option<String>,
    pub click_event: Option<RawValue>,
    pub hover_event: Option<RawValue>,
    pub unhandled: Unhandled,
}

impl TextComponent {
    /// Creates a plain, unstyled text component.
    pub fn text(text: impl Into<String>) -> Self {
        TextComponent::Plain(text.into())
    }

    /// Creates a `Compound` carrying the given content and otherwise-blank formatting.
    pub fn styled(content: Content, formatting: Formatting) -> Self {
        TextComponent::Compound(Box::new(CompoundNode { content: Some(content), formatting, ..Default::default() }))
    }

    /// Returns this component's shallow text if it is a [`Plain`](TextComponent::Plain) or a
    /// `Compound` carrying [`Content::Text`].
    pub fn shallow_text(&self) -> Option<&str> {
        match self {
            TextComponent::Plain(text) => Some(text),
            TextComponent::Compound(node) => match &node.content {
                Some(Content::Text { text }) => Some(text),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<String> for TextComponent {
    fn from(value: String) -> Self {
        TextComponent::Plain(value)
    }
}

impl From<&str> for TextComponent {
    fn from(value: &str) -> Self {
        TextComponent::Plain(value.to_owned())
    }
}
