//! Opaque carrier for data this crate accepts and preserves but does not model: the
//! `Invalid` wrapper, `unhandled` residue bags, and the hover/click/insertion interaction
//! stubs (§3, §9 "Opaque interaction/raw-value carrier").

use std::collections::BTreeMap;

/// Either an NBT tag or a JSON value, depending on which codec produced it. Exactly one
/// variant is ever constructible for a given build (feature-gated), but both can coexist in
/// a build with both `nbt` and `json` enabled since a single process may run both codecs.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    #[cfg(feature = "nbt")]
    Nbt(quartz_nbt::NbtTag),
    #[cfg(feature = "json")]
    Json(serde_json::Value),
}

/// Residual compound fields a parser did not consume, keyed by their original field name.
/// Ordered by key so round-trip comparisons (`unhandled` key ordering, §8) are stable.
pub type Unhandled = BTreeMap<String, RawValue>;
