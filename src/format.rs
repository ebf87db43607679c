//! The tri-state formatting block attached to a [`crate::component::CompoundNode`].

use serde::{Deserialize, Serialize};

use crate::colour::{Colour, ShadowColour};

/// Every style attribute is tri-state: `None` inherits from the surrounding context, `Some(true)`
/// turns it on, `Some(false)` explicitly clears it (§3). Bedrock ignores `underlined` and
/// `strikethrough`; they are still carried here so NBT/JSON round-trips losslessly even when
/// producing section-string output for an edition that cannot express them (§4.1 edge cases).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Formatting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_colour: Option<ShadowColour>,
}

impl Formatting {
    pub fn is_blank(&self) -> bool {
        *self == Formatting::default()
    }
}
