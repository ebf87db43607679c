//! The Java NBT codec: `from_java_nbt`/`to_java_nbt` (§4.3, §4.4).

use quartz_nbt::{NbtCompound, NbtList, NbtTag};

use super::ComponentCodec;
use crate::colour::{Colour, ShadowColour};
use crate::component::{CompoundNode, TextComponent};
use crate::content::Content;
use crate::format::Formatting;
use crate::raw::{RawValue, Unhandled};

/// Converts a Java NBT tag into the pivot tree. Total over every [`NbtTag`] shape: anything
/// that is not a string, list or compound becomes [`TextComponent::Invalid`] (§4.3).
pub fn from_java_nbt(tag: NbtTag) -> TextComponent {
    match tag {
        NbtTag::String(text) => TextComponent::Plain(text),
        NbtTag::List(list) => TextComponent::Recursive(list.into_iter().map(from_java_nbt).collect()),
        NbtTag::Compound(compound) => TextComponent::Compound(Box::new(parse_compound(compound))),
        other => TextComponent::Invalid(RawValue::Nbt(other)),
    }
}

/// Converts a pivot tree back into a Java NBT tag. Inverse of [`from_java_nbt`] (§4.4).
pub fn to_java_nbt(component: &TextComponent) -> NbtTag {
    match component {
        TextComponent::Plain(text) => NbtTag::String(text.clone()),
        TextComponent::Recursive(items) => {
            let mut list = NbtList::new();
            for item in items {
                list.push(to_java_nbt(item));
            }
            NbtTag::List(list)
        }
        TextComponent::Invalid(raw) => raw_to_nbt(raw),
        TextComponent::Compound(node) => NbtTag::Compound(compound_to_nbt(node)),
    }
}

fn raw_to_nbt(raw: &RawValue) -> NbtTag {
    match raw {
        RawValue::Nbt(tag) => tag.clone(),
        #[cfg(feature = "json")]
        RawValue::Json(value) => NbtTag::String(value.to_string()),
    }
}

fn parse_compound(mut compound: NbtCompound) -> CompoundNode {
    let empty_node = compound.remove("").map(|tag| Box::new(from_java_nbt(tag)));

    let content_type = compound.remove("type").and_then(as_string);
    let content = extract_content(&mut compound, content_type.as_deref());

    let children = compound
        .remove("extra")
        .map(|tag| match tag {
            NbtTag::List(list) => list.into_iter().map(from_java_nbt).collect(),
            other => vec![from_java_nbt(other)],
        })
        .unwrap_or_default();

    let insertion = compound.remove("insertion").and_then(as_string);
    let click_event = compound.remove("clickEvent").map(RawValue::Nbt);
    let hover_event = compound.remove("hoverEvent").map(RawValue::Nbt);

    let formatting = extract_formatting(&mut compound);
    let unhandled = residue_to_unhandled(compound);

    CompoundNode {
        content,
        formatting,
        empty_node,
        children,
        insertion,
        click_event,
        hover_event,
        unhandled,
    }
}

type Extractor = fn(&mut NbtCompound) -> Option<Content>;
const EXTRACTORS: &[(&str, Extractor)] = &[
    ("text", extract_text),
    ("translatable", extract_translatable),
    ("score", extract_scoreboard),
    ("selector", extract_entity),
    ("keybind", extract_keybind),
];

fn extract_content(compound: &mut NbtCompound, declared: Option<&str>) -> Option<Content> {
    if let Some(declared) = declared {
        if let Some((_, extractor)) = EXTRACTORS.iter().find(|(name, _)| *name == declared) {
            if let Some(content) = extractor(compound) {
                return Some(content);
            }
        }
    }
    EXTRACTORS.iter().find_map(|(_, extractor)| extractor(compound))
}

fn extract_text(compound: &mut NbtCompound) -> Option<Content> {
    let text = compound.get::<_, &str>("text").ok()?.to_owned();
    compound.remove("text");
    Some(Content::Text { text })
}

fn extract_translatable(compound: &mut NbtCompound) -> Option<Content> {
    let key = compound.get::<_, &str>("translate").ok()?.to_owned();
    compound.remove("translate");

    let fallback = compound.get::<_, &str>("fallback").ok().map(str::to_owned);
    if fallback.is_some() {
        compound.remove("fallback");
    }

    let args = compound.remove("with").map(|tag| match tag {
        NbtTag::List(list) => list.into_iter().map(from_java_nbt).collect(),
        other => vec![from_java_nbt(other)],
    });

    Some(Content::Translatable { key, fallback, args })
}

fn extract_scoreboard(compound: &mut NbtCompound) -> Option<Content> {
    let mut score = compound.get::<_, &NbtCompound>("score").ok()?.clone();

    let selector = score.get::<_, &str>("name").ok().map(str::to_owned);
    let objective = score.get::<_, &str>("objective").ok().map(str::to_owned);
    if selector.is_none() && objective.is_none() {
        return None;
    }

    score.remove("name");
    score.remove("objective");
    compound.remove("score");

    let residue = residue_to_unhandled(score);
    let unhandled = if residue.is_empty() { None } else { Some(residue) };

    Some(Content::Scoreboard { selector, objective, unhandled })
}

fn extract_entity(compound: &mut NbtCompound) -> Option<Content> {
    let selector = compound.get::<_, &str>("selector").ok()?.to_owned();
    compound.remove("selector");
    let separator = compound.remove("separator").map(|tag| Box::new(from_java_nbt(tag)));
    Some(Content::Entity { selector: Some(selector), separator })
}

fn extract_keybind(compound: &mut NbtCompound) -> Option<Content> {
    let key = compound.get::<_, &str>("keybind").ok()?.to_owned();
    compound.remove("keybind");
    Some(Content::Keybind { key: Some(key) })
}

fn extract_formatting(compound: &mut NbtCompound) -> Formatting {
    let colour = compound.remove("color").and_then(as_string).map(Colour::from_name);
    let font = compound.remove("font").and_then(as_string);
    let bold = extract_bool(compound, "bold");
    let italic = extract_bool(compound, "italic");
    let underlined = extract_bool(compound, "underlined");
    let strikethrough = extract_bool(compound, "strikethrough");
    let obfuscated = extract_bool(compound, "obfuscated");
    let shadow_colour = compound.remove("shadow_color").and_then(|tag| match tag {
        NbtTag::Int(x) => Some(ShadowColour::RgbaInt(x as u32)),
        NbtTag::List(list) => {
            let floats: Vec<f32> = list
                .into_iter()
                .filter_map(|tag| match tag {
                    NbtTag::Float(f) => Some(f),
                    _ => None,
                })
                .collect();
            (floats.len() == 4).then(|| ShadowColour::RgbaFloat([floats[0], floats[1], floats[2], floats[3]]))
        }
        _ => None,
    });

    Formatting { colour, font, bold, italic, underlined, strikethrough, obfuscated, shadow_colour }
}

fn extract_bool(compound: &mut NbtCompound, key: &str) -> Option<bool> {
    compound.remove(key).map(|tag| match tag {
        NbtTag::Byte(b) => b != 0,
        NbtTag::Short(s) => s != 0,
        NbtTag::Int(i) => i != 0,
        _ => true,
    })
}

fn as_string(tag: NbtTag) -> Option<String> {
    match tag {
        NbtTag::String(s) => Some(s),
        _ => None,
    }
}

fn residue_to_unhandled(compound: NbtCompound) -> Unhandled {
    compound.into_iter().map(|(key, value)| (key, RawValue::Nbt(value))).collect()
}

fn compound_to_nbt(node: &CompoundNode) -> NbtCompound {
    let mut compound = NbtCompound::new();

    match &node.content {
        Some(Content::Text { text }) => {
            compound.insert("text", text.clone());
        }
        Some(Content::Translatable { key, fallback, args }) => {
            compound.insert("translate", key.clone());
            if let Some(fallback) = fallback {
                compound.insert("fallback", fallback.clone());
            }
            if let Some(args) = args {
                let mut list = NbtList::new();
                for arg in args {
                    list.push(to_java_nbt(arg));
                }
                compound.insert("with", list);
            }
        }
        Some(Content::Scoreboard { selector, objective, unhandled }) => {
            let mut score = NbtCompound::new();
            if let Some(selector) = selector {
                score.insert("name", selector.clone());
            }
            if let Some(objective) = objective {
                score.insert("objective", objective.clone());
            }
            if let Some(unhandled) = unhandled {
                for (key, value) in unhandled {
                    if !score.contains_key(key) {
                        score.insert(key.clone(), raw_to_nbt(value));
                    }
                }
            }
            compound.insert("score", score);
        }
        Some(Content::Entity { selector, separator }) => {
            if let Some(selector) = selector {
                compound.insert("selector", selector.clone());
            }
            if let Some(separator) = separator {
                compound.insert("separator", to_java_nbt(separator));
            }
        }
        Some(Content::Keybind { key }) => {
            if let Some(key) = key {
                compound.insert("keybind", key.clone());
            }
        }
        None => {}
    }

    let fmt = &node.formatting;
    if let Some(colour) = &fmt.colour {
        compound.insert("color", colour.name.clone());
    }
    if let Some(font) = &fmt.font {
        compound.insert("font", font.clone());
    }
    if let Some(b) = fmt.bold {
        compound.insert("bold", NbtTag::Byte(b as i8));
    }
    if let Some(b) = fmt.italic {
        compound.insert("italic", NbtTag::Byte(b as i8));
    }
    if let Some(b) = fmt.underlined {
        compound.insert("underlined", NbtTag::Byte(b as i8));
    }
    if let Some(b) = fmt.strikethrough {
        compound.insert("strikethrough", NbtTag::Byte(b as i8));
    }
    if let Some(b) = fmt.obfuscated {
        compound.insert("obfuscated", NbtTag::Byte(b as i8));
    }
    if let Some(shadow) = fmt.shadow_colour {
        match shadow {
            ShadowColour::RgbaInt(x) => {
                compound.insert("shadow_color", x as i32);
            }
            ShadowColour::RgbaFloat(components) => {
                let mut list = NbtList::new();
                for f in components {
                    list.push(f);
                }
                compound.insert("shadow_color", list);
            }
        }
    }

    if let Some(insertion) = &node.insertion {
        compound.insert("insertion", insertion.clone());
    }
    if let Some(click) = &node.click_event {
        compound.insert("clickEvent", raw_to_nbt(click));
    }
    if let Some(hover) = &node.hover_event {
        compound.insert("hoverEvent", raw_to_nbt(hover));
    }

    if !node.children.is_empty() {
        let mut list = NbtList::new();
        for child in &node.children {
            list.push(to_java_nbt(child));
        }
        compound.insert("extra", list);
    }

    if let Some(empty_node) = &node.empty_node {
        compound.insert("", to_java_nbt(empty_node));
    }

    for (key, value) in &node.unhandled {
        if !compound.contains_key(key) {
            compound.insert(key.clone(), raw_to_nbt(value));
        }
    }

    compound
}

/// Zero-sized [`ComponentCodec`] implementor for the Java NBT wire format.
#[derive(Clone, Copy)]
pub struct NbtCodec;

impl ComponentCodec for NbtCodec {
    type DecodeInput = NbtTag;
    type EncodeOutput = NbtTag;
    type DecodeOutput = TextComponent;

    fn serialize(self, component: &TextComponent) -> Self::EncodeOutput {
        to_java_nbt(component)
    }

    fn deserialize(self, value: Self::DecodeInput) -> Self::DecodeOutput {
        from_java_nbt(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartz_nbt::compound;

    #[test]
    fn hello_world_string_round_trips() {
        let tag = NbtTag::String("Hello World".to_owned());
        let component = from_java_nbt(tag.clone());
        assert_eq!(component, TextComponent::Plain("Hello World".to_owned()));
        assert_eq!(to_java_nbt(&component), tag);
    }

    #[test]
    fn hello_world_list_round_trips() {
        let list = NbtList::from(vec![
            NbtTag::String("Hello ".to_owned()),
            NbtTag::String("World".to_owned()),
        ]);
        let tag = NbtTag::List(list);
        let component = from_java_nbt(tag.clone());
        assert_eq!(to_java_nbt(&component), tag);
    }

    #[test]
    fn unhandled_fields_round_trip() {
        let tag = NbtTag::Compound(compound! {
            "text": "hi",
            "mystery": 42,
        });
        let component = from_java_nbt(tag);
        let TextComponent::Compound(node) = &component else { panic!("expected compound") };
        assert_eq!(node.unhandled.len(), 1);
        assert!(node.unhandled.contains_key("mystery"));
    }

    #[test]
    fn translatable_round_trips_with_fallback_and_args() {
        let tag = NbtTag::Compound(compound! {
            "translate": "chat.type.text",
            "fallback": "%s says %s",
            "with": NbtList::from(vec![NbtTag::String("a".to_owned()), NbtTag::String("b".to_owned())]),
        });
        let component = from_java_nbt(tag.clone());
        let TextComponent::Compound(node) = &component else { panic!("expected compound") };
        assert_eq!(
            node.content,
            Some(Content::Translatable {
                key: "chat.type.text".to_owned(),
                fallback: Some("%s says %s".to_owned()),
                args: Some(vec![TextComponent::Plain("a".to_owned()), TextComponent::Plain("b".to_owned())]),
            })
        );
        assert_eq!(to_java_nbt(&component), tag);
    }

    #[test]
    fn declared_type_score_dispatches_even_with_a_text_field_present() {
        let tag = NbtTag::Compound(compound! {
            "type": "score",
            "text": "13",
            "score": compound! { "name": "Steve", "objective": "health" },
        });
        let component = from_java_nbt(tag);
        let TextComponent::Compound(node) = &component else { panic!("expected compound") };
        assert_eq!(
            node.content,
            Some(Content::Scoreboard {
                selector: Some("Steve".to_owned()),
                objective: Some("health".to_owned()),
                unhandled: None,
            })
        );
        assert!(node.unhandled.contains_key("text"), "undeclared text field should survive as unhandled");
    }

    #[test]
    fn scoreboard_round_trips_with_residue() {
        let tag = NbtTag::Compound(compound! {
            "score": compound! { "name": "Steve", "objective": "health", "value": 20 },
        });
        let component = from_java_nbt(tag.clone());
        assert_eq!(to_java_nbt(&component), tag);
    }

    #[test]
    fn declared_type_selector_dispatches_to_entity() {
        let tag = NbtTag::Compound(compound! {
            "type": "selector",
            "selector": "@a",
            "separator": NbtTag::String(", ".to_owned()),
        });
        let component = from_java_nbt(tag.clone());
        let TextComponent::Compound(node) = &component else { panic!("expected compound") };
        assert_eq!(
            node.content,
            Some(Content::Entity {
                selector: Some("@a".to_owned()),
                separator: Some(Box::new(TextComponent::Plain(", ".to_owned()))),
            })
        );
        assert_eq!(to_java_nbt(&component), tag);
    }

    #[test]
    fn keybind_round_trips() {
        let tag = NbtTag::Compound(compound! { "keybind": "key.jump" });
        let component = from_java_nbt(tag.clone());
        let TextComponent::Compound(node) = &component else { panic!("expected compound") };
        assert_eq!(node.content, Some(Content::Keybind { key: Some("key.jump".to_owned()) }));
        assert_eq!(to_java_nbt(&component), tag);
    }

    #[test]
    fn shadow_colour_int_and_float_forms_round_trip() {
        let int_tag = NbtTag::Compound(compound! { "text": "a", "shadow_color": -16777216i32 });
        let component = from_java_nbt(int_tag.clone());
        let TextComponent::Compound(node) = &component else { panic!("expected compound") };
        assert_eq!(node.formatting.shadow_colour, Some(ShadowColour::RgbaInt(0xFF000000)));
        assert_eq!(to_java_nbt(&component), int_tag);

        let float_tag = NbtTag::Compound(compound! {
            "text": "a",
            "shadow_color": NbtList::from(vec![
                NbtTag::Float(0.1),
                NbtTag::Float(0.2),
                NbtTag::Float(0.3),
                NbtTag::Float(1.0),
            ]),
        });
        let component = from_java_nbt(float_tag.clone());
        let TextComponent::Compound(node) = &component else { panic!("expected compound") };
        assert_eq!(node.formatting.shadow_colour, Some(ShadowColour::RgbaFloat([0.1, 0.2, 0.3, 1.0])));
        assert_eq!(to_java_nbt(&component), float_tag);
    }
}
