//! Colour names, RGB triples and the two editions' colour code palettes.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// A resolved colour: the original wire name (or hex literal) plus its RGB triple.
///
/// The `name` is always preserved verbatim, even when it fails to resolve to a known
/// palette entry or a valid hex literal — see [`Colour::from_name`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colour {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Resolves a wire colour name: `#RRGGBB` hex literals are parsed first, then both
    /// palettes are searched by name. On failure `(0, 0, 0)` is used but `name` is kept
    /// untouched so a round trip reproduces the original string (§4.3/§7).
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        if let Some((r, g, b)) = parse_hex(&name) {
            return Colour { name, r, g, b };
        }
        if let Some(entry) = java_palette().find_by_name(&name).or_else(|| bedrock_palette().find_by_name(&name)) {
            return Colour { name, r: entry.r, g: entry.g, b: entry.b };
        }
        Colour { name, r: 0, g: 0, b: 0 }
    }

    pub fn new(name: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Colour { name: name.into(), r, g, b }
    }
}

fn parse_hex(name: &str) -> Option<(u8, u8, u8)> {
    if name.len() != 7 || !name.starts_with('#') {
        return None;
    }
    let bytes = &name[1..];
    if !bytes.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&bytes[0..2], 16).ok()?;
    let g = u8::from_str_radix(&bytes[2..4], 16).ok()?;
    let b = u8::from_str_radix(&bytes[4..6], 16).ok()?;
    Some((r, g, b))
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.name.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Colour::from_name(name))
    }
}

/// The `shadow_color` attribute: either a packed ARGB integer or an explicit `[r, g, b, a]`
/// float list, per §4.3's wire detail and §6's integer-unpacking formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShadowColour {
    RgbaInt(u32),
    RgbaFloat([f32; 4]),
}

impl ShadowColour {
    pub fn from_int(value: u32) -> Self {
        ShadowColour::RgbaInt(value)
    }

    /// Unpacks the big-endian ARGB components per §6: `a = (x>>24)&0xFF`, `r = (x>>16)&0xFF`, ...
    pub fn argb(self) -> (u8, u8, u8, u8) {
        match self {
            ShadowColour::RgbaInt(x) => (
                ((x >> 24) & 0xFF) as u8,
                ((x >> 16) & 0xFF) as u8,
                ((x >> 8) & 0xFF) as u8,
                (x & 0xFF) as u8,
            ),
            ShadowColour::RgbaFloat([r, g, b, a]) => (
                (a * 255.0).round() as u8,
                (r * 255.0).round() as u8,
                (g * 255.0).round() as u8,
                (b * 255.0).round() as u8,
            ),
        }
    }
}

impl Serialize for ShadowColour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ShadowColour::RgbaInt(x) => x.serialize(serializer),
            ShadowColour::RgbaFloat(components) => components.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ShadowColour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Vessel {
            Int(u32),
            Float([f32; 4]),
        }

        match Vessel::deserialize(deserializer)? {
            Vessel::Int(x) => Ok(ShadowColour::RgbaInt(x)),
            Vessel::Float(components) => Ok(ShadowColour::RgbaFloat(components)),
        }
    }
}

/// A single palette entry: an edition colour code char bound to an RGB triple and a name.
#[derive(Clone, Copy, Debug)]
pub struct PaletteEntry {
    pub code: char,
    pub name: &'static str,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An ordered colour table for one edition. Order matters: [`Palette::find_closest`] and
/// name lookups both break ties by earliest entry, per §4.6.
pub struct Palette {
    entries: &'static [PaletteEntry],
}

impl Palette {
    pub const fn new(entries: &'static [PaletteEntry]) -> Self {
        Palette { entries }
    }

    pub fn entries(&self) -> &'static [PaletteEntry] {
        self.entries
    }

    pub fn find_by_code(&self, code: char) -> Option<&'static PaletteEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Nearest-neighbour lookup by Manhattan distance in RGB space; ties keep the earlier
    /// entry (§4.6).
    pub fn find_closest(&self, r: u8, g: u8, b: u8) -> &'static PaletteEntry {
        self.entries
            .iter()
            .min_by_key(|e| {
                (e.r as i32 - r as i32).unsigned_abs()
                    + (e.g as i32 - g as i32).unsigned_abs()
                    + (e.b as i32 - b as i32).unsigned_abs()
            })
            .expect("palettes are never empty")
    }
}

macro_rules! entry {
    ($code:expr, $name:expr, $r:expr, $g:expr, $b:expr) => {
        PaletteEntry { code: $code, name: $name, r: $r, g: $g, b: $b }
    };
}

static JAVA_ENTRIES: &[PaletteEntry] = &[
    entry!('0', "black", 0x00, 0x00, 0x00),
    entry!('1', "dark_blue", 0x00, 0x00, 0xAA),
    entry!('2', "dark_green", 0x00, 0xAA, 0x00),
    entry!('3', "dark_aqua", 0x00, 0xAA, 0xAA),
    entry!('4', "dark_red", 0xAA, 0x00, 0x00),
    entry!('5', "dark_purple", 0xAA, 0x00, 0xAA),
    entry!('6', "gold", 0xFF, 0xAA, 0x00),
    entry!('7', "gray", 0xAA, 0xAA, 0xAA),
    entry!('8', "dark_gray", 0x55, 0x55, 0x55),
    entry!('9', "blue", 0x55, 0x55, 0xFF),
    entry!('a', "green", 0x55, 0xFF, 0x55),
    entry!('b', "aqua", 0x55, 0xFF, 0xFF),
    entry!('c', "red", 0xFF, 0x55, 0x55),
    entry!('d', "light_purple", 0xFF, 0x55, 0xFF),
    entry!('e', "yellow", 0xFF, 0xFF, 0x55),
    entry!('f', "white", 0xFF, 0xFF, 0xFF),
];

static BEDROCK_ENTRIES: &[PaletteEntry] = &[
    entry!('0', "black", 0x00, 0x00, 0x00),
    entry!('1', "dark_blue", 0x00, 0x00, 0xAA),
    entry!('2', "dark_green", 0x00, 0xAA, 0x00),
    entry!('3', "dark_aqua", 0x00, 0xAA, 0xAA),
    entry!('4', "dark_red", 0xAA, 0x00, 0x00),
    entry!('5', "dark_purple", 0xAA, 0x00, 0xAA),
    entry!('6', "gold", 0xFF, 0xAA, 0x00),
    entry!('7', "gray", 0xAA, 0xAA, 0xAA),
    entry!('8', "dark_gray", 0x55, 0x55, 0x55),
    entry!('9', "blue", 0x55, 0x55, 0xFF),
    entry!('a', "green", 0x55, 0xFF, 0x55),
    entry!('b', "aqua", 0x55, 0xFF, 0xFF),
    entry!('c', "red", 0xFF, 0x55, 0x55),
    entry!('d', "light_purple", 0xFF, 0x55, 0xFF),
    entry!('e', "yellow", 0xFF, 0xFF, 0x55),
    entry!('f', "white", 0xFF, 0xFF, 0xFF),
    entry!('g', "minecoin_gold", 0xDD, 0xD6, 0x05),
    entry!('h', "material_quartz", 0xE3, 0xD4, 0xD1),
    entry!('i', "material_iron", 0xCE, 0xCA, 0xCA),
    entry!('j', "material_netherite", 0x44, 0x3A, 0x3B),
    entry!('m', "material_redstone", 0x97, 0x16, 0x07),
    entry!('n', "material_copper", 0xB4, 0x68, 0x4D),
    entry!('p', "material_gold", 0xDE, 0xB1, 0x2D),
    entry!('q', "material_emerald", 0x47, 0xA0, 0x36),
    entry!('s', "material_diamond", 0x2C, 0xBA, 0xA8),
    entry!('t', "material_lapis", 0x21, 0x49, 0x7B),
    entry!('u', "material_amethyst", 0x9A, 0x5C, 0xC6),
    entry!('v', "material_resin", 0xEB, 0x71, 0x14),
];

pub fn java_palette() -> &'static Palette {
    static PALETTE: Palette = Palette::new(JAVA_ENTRIES);
    &PALETTE
}

pub fn bedrock_palette() -> &'static Palette {
    static PALETTE: Palette = Palette::new(BEDROCK_ENTRIES);
    &PALETTE
}
