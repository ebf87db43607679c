//! Converts Minecraft "raw text" between Java NBT, Java JSON, Java section-string and Bedrock
//! section-string encodings, pivoting every conversion through a shared [`component::TextComponent`]
//! tree.
//!
//! Every conversion in [`codec`] is total: malformed or unrecognised input is preserved in-band
//! via [`component::TextComponent::Invalid`] and [`raw::Unhandled`] rather than rejected.

#![cfg_attr(ci, deny(missing_docs))]
#![cfg_attr(not(ci), warn(missing_docs))]

pub mod codec;
pub mod colour;
pub mod component;
pub mod content;
pub mod format;
pub mod raw;

pub use self::{
    codec::section::{SectionInput, SectionText},
    colour::{Colour, ShadowColour},
    component::{CompoundNode, TextComponent},
    content::Content,
    format::Formatting,
    raw::{RawValue, Unhandled},
};

#[cfg(any(feature = "nbt", doc))]
pub use self::codec::nbt::{from_java_nbt, to_java_nbt};

#[cfg(any(feature = "json", doc))]
pub use self::codec::json::{from_java_json, to_java_json};

pub use self::codec::section::{
    from_bedrock_section_string, from_java_section_string, to_bedrock_section_string, to_java_section_string,
};
