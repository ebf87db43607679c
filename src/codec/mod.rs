//! Converters between [`TextComponent`] and each of the four wire encodings (§1, §6).
//!
//! [`nbt`] and [`json`] implement [`ComponentCodec`] directly, since their shape is a simple
//! one-value-in, one-value-out conversion. The section-string codecs live under [`section`]
//! with their own free functions, since their signature needs an extra `split_newline` flag
//! and a one-or-many decode result that does not fit the trait below.

#[cfg(any(feature = "json", doc))]
pub mod json;
#[cfg(any(feature = "nbt", doc))]
pub mod nbt;
pub mod section;

use crate::component::TextComponent;

/// A trait for encoding and decoding components to arbitrary formats.
///
/// Every conversion this crate exposes is total (§7): `DecodeOutput`/`EncodeOutput` are bare
/// values, never `Result`, because the data model's `Invalid`/`unhandled` carriers already
/// absorb every shape mismatch in-band.
pub trait ComponentCodec
where
    Self: Clone + Copy,
{
    /// The input type for deserialization.
    type DecodeInput;

    /// The output type for serialization.
    type EncodeOutput;

    /// The output type for deserialization. Always [`TextComponent`] for this crate's codecs.
    type DecodeOutput;

    /// Serializes a component, returning its encoded representation as [`Self::EncodeOutput`].
    fn serialize(self, component: &TextComponent) -> Self::EncodeOutput;

    /// Deserializes a component from an arbitrary [input representation][Self::DecodeInput].
    fn deserialize(self, value: Self::DecodeInput) -> Self::DecodeOutput;
}
