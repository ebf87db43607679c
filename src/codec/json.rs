//! The Java JSON codec: `from_java_json`/`to_java_json` (§4.5). Structurally parallel to
//! [`super::nbt`], operating on [`serde_json::Value`] instead of [`quartz_nbt::NbtTag`].

use serde_json::{Map, Value};

use super::ComponentCodec;
use crate::colour::{Colour, ShadowColour};
use crate::component::{CompoundNode, TextComponent};
use crate::content::Content;
use crate::format::Formatting;
use crate::raw::{RawValue, Unhandled};

/// Converts a JSON value into the pivot tree. Total over every [`Value`] shape: numbers,
/// booleans and null at the top level become [`TextComponent::Invalid`].
pub fn from_java_json(value: Value) -> TextComponent {
    match value {
        Value::String(text) => TextComponent::Plain(text),
        Value::Array(items) => TextComponent::Recursive(items.into_iter().map(from_java_json).collect()),
        Value::Object(map) => TextComponent::Compound(Box::new(parse_object(map))),
        other => TextComponent::Invalid(RawValue::Json(other)),
    }
}

/// Converts a pivot tree back into a JSON value. Inverse of [`from_java_json`].
pub fn to_java_json(component: &TextComponent) -> Value {
    match component {
        TextComponent::Plain(text) => Value::String(text.clone()),
        TextComponent::Recursive(items) => Value::Array(items.iter().map(to_java_json).collect()),
        TextComponent::Invalid(raw) => raw_to_json(raw),
        TextComponent::Compound(node) => Value::Object(object_from_compound(node)),
    }
}

fn raw_to_json(raw: &RawValue) -> Value {
    match raw {
        RawValue::Json(value) => value.clone(),
        #[cfg(feature = "nbt")]
        RawValue::Nbt(tag) => Value::String(format!("{tag:?}")),
    }
}

fn parse_object(mut map: Map<String, Value>) -> CompoundNode {
    let empty_node = map.remove("").map(|value| Box::new(from_java_json(value)));

    let content_type = map.remove("type").and_then(as_string);
    let content = extract_content(&mut map, content_type.as_deref());

    let children = map
        .remove("extra")
        .map(|value| match value {
            Value::Array(items) => items.into_iter().map(from_java_json).collect(),
            other => vec![from_java_json(other)],
        })
        .unwrap_or_default();

    let insertion = map.remove("insertion").and_then(as_string);
    let click_event = map.remove("clickEvent").map(RawValue::Json);
    let hover_event = map.remove("hoverEvent").map(RawValue::Json);

    let formatting = extract_formatting(&mut map);
    let unhandled = residue_to_unhandled(map);

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

type Extractor = fn(&mut Map<String, Value>) -> Option<Content>;
const EXTRACTORS: &[(&str, Extractor)] = &[
    ("text", extract_text),
    ("translatable", extract_translatable),
    ("score", extract_scoreboard),
    ("selector", extract_entity),
    ("keybind", extract_keybind),
];

fn extract_content(map: &mut Map<String, Value>, declared: Option<&str>) -> Option<Content> {
    if let Some(declared) = declared {
        if let Some((_, extractor)) = EXTRACTORS.iter().find(|(name, _)| *name == declared) {
            if let Some(content) = extractor(map) {
                return Some(content);
            }
        }
    }
    EXTRACTORS.iter().find_map(|(_, extractor)| extractor(map))
}

fn extract_text(map: &mut Map<String, Value>) -> Option<Content> {
    let text = map.get("text")?.as_str()?.to_owned();
    map.remove("text");
    Some(Content::Text { text })
}

fn extract_translatable(map: &mut Map<String, Value>) -> Option<Content> {
    let key = map.get("translate")?.as_str()?.to_owned();
    map.remove("translate");

    let fallback = map.get("fallback").and_then(Value::as_str).map(str::to_owned);
    if fallback.is_some() {
        map.remove("fallback");
    }

    let args = map.remove("with").map(|value| match value {
        Value::Array(items) => items.into_iter().map(from_java_json).collect(),
        other => vec![from_java_json(other)],
    });

    Some(Content::Translatable { key, fallback, args })
}

fn extract_scoreboard(map: &mut Map<String, Value>) -> Option<Content> {
    let mut score = map.get("score")?.as_object()?.clone();

    let selector = score.get("name").and_then(Value::as_str).map(str::to_owned);
    let objective = score.get("objective").and_then(Value::as_str).map(str::to_owned);
    if selector.is_none() && objective.is_none() {
        return None;
    }

    score.remove("name");
    score.remove("objective");
    map.remove("score");

    let residue = residue_to_unhandled(score);
    let unhandled = if residue.is_empty() { None } else { Some(residue) };

    Some(Content::Scoreboard { selector, objective, unhandled })
}

fn extract_entity(map: &mut Map<String, Value>) -> Option<Content> {
    let selector = map.get("selector")?.as_str()?.to_owned();
    map.remove("selector");
    let separator = map.remove("separator").map(|value| Box::new(from_java_json(value)));
    Some(Content::Entity { selector: Some(selector), separator })
}

fn extract_keybind(map: &mut Map<String, Value>) -> Option<Content> {
    let key = map.get("keybind")?.as_str()?.to_owned();
    map.remove("keybind");
    Some(Content::Keybind { key: Some(key) })
}

fn extract_formatting(map: &mut Map<String, Value>) -> Formatting {
    let colour = map.remove("color").and_then(as_string).map(Colour::from_name);
    let font = map.remove("font").and_then(as_string);
    let bold = map.remove("bold").and_then(|v| v.as_bool());
    let italic = map.remove("italic").and_then(|v| v.as_bool());
    let underlined = map.remove("underlined").and_then(|v| v.as_bool());
    let strikethrough = map.remove("strikethrough").and_then(|v| v.as_bool());
    let obfuscated = map.remove("obfuscated").and_then(|v| v.as_bool());
    let shadow_colour = map.remove("shadow_color").and_then(|value| match value {
        Value::Number(n) => n.as_i64().map(|x| ShadowColour::RgbaInt(x as i32 as u32)),
        Value::Array(items) => {
            let floats: Vec<f32> = items.iter().filter_map(Value::as_f64).map(|f| f as f32).collect();
            (floats.len() == 4).then(|| ShadowColour::RgbaFloat([floats[0], floats[1], floats[2], floats[3]]))
        }
        _ => None,
    });

    Formatting { colour, font, bold, italic, underlined, strikethrough, obfuscated, shadow_colour }
}

fn as_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

fn residue_to_unhandled(map: Map<String, Value>) -> Unhandled {
    map.into_iter().map(|(key, value)| (key, RawValue::Json(value))).collect()
}

fn object_from_compound(node: &CompoundNode) -> Map<String, Value> {
    let mut map = Map::new();

    match &node.content {
        Some(Content::Text { text }) => {
            map.insert("text".to_owned(), Value::String(text.clone()));
        }
        Some(Content::Translatable { key, fallback, args }) => {
            map.insert("translate".to_owned(), Value::String(key.clone()));
            if let Some(fallback) = fallback {
                map.insert("fallback".to_owned(), Value::String(fallback.clone()));
            }
            if let Some(args) = args {
                map.insert("with".to_owned(), Value::Array(args.iter().map(to_java_json).collect()));
            }
        }
        Some(Content::Scoreboard { selector, objective, unhandled }) => {
            let mut score = Map::new();
            if let Some(selector) = selector {
                score.insert("name".to_owned(), Value::String(selector.clone()));
            }
            if let Some(objective) = objective {
                score.insert("objective".to_owned(), Value::String(objective.clone()));
            }
            if let Some(unhandled) = unhandled {
                for (key, value) in unhandled {
                    if !score.contains_key(key) {
                        score.insert(key.clone(), raw_to_json(value));
                    }
                }
            }
            map.insert("score".to_owned(), Value::Object(score));
        }
        Some(Content::Entity { selector, separator }) => {
            if let Some(selector) = selector {
                map.insert("selector".to_owned(), Value::String(selector.clone()));
            }
            if let Some(separator) = separator {
                map.insert("separator".to_owned(), to_java_json(separator));
            }
        }
        Some(Content::Keybind { key }) => {
            if let Some(key) = key {
                map.insert("keybind".to_owned(), Value::String(key.clone()));
            }
        }
        None => {}
    }

    let fmt = &node.formatting;
    if let Some(colour) = &fmt.colour {
        map.insert("color".to_owned(), Value::String(colour.name.clone()));
    }
    if let Some(font) = &fmt.font {
        map.insert("font".to_owned(), Value::String(font.clone()));
    }
    if let Some(b) = fmt.bold {
        map.insert("bold".to_owned(), Value::Bool(b));
    }
    if let Some(b) = fmt.italic {
        map.insert("italic".to_owned(), Value::Bool(b));
    }
    if let Some(b) = fmt.underlined {
        map.insert("underlined".to_owned(), Value::Bool(b));
    }
    if let Some(b) = fmt.strikethrough {
        map.insert("strikethrough".to_owned(), Value::Bool(b));
    }
    if let Some(b) = fmt.obfuscated {
        map.insert("obfuscated".to_owned(), Value::Bool(b));
    }
    if let Some(shadow) = fmt.shadow_colour {
        let value = match shadow {
            ShadowColour::RgbaInt(x) => Value::from(x),
            ShadowColour::RgbaFloat(components) => {
                Value::Array(components.iter().map(|f| Value::from(*f as f64)).collect())
            }
        };
        map.insert("shadow_color".to_owned(), value);
    }

    if let Some(insertion) = &node.insertion {
        map.insert("insertion".to_owned(), Value::String(insertion.clone()));
    }
    if let Some(click) = &node.click_event {
        map.insert("clickEvent".to_owned(), raw_to_json(click));
    }
    if let Some(hover) = &node.hover_event {
        map.insert("hoverEvent".to_owned(), raw_to_json(hover));
    }

    if !node.children.is_empty() {
        map.insert("extra".to_owned(), Value::Array(node.children.iter().map(to_java_json).collect()));
    }

    if let Some(empty_node) = &node.empty_node {
        map.insert(String::new(), to_java_json(empty_node));
    }

    for (key, value) in &node.unhandled {
        if !map.contains_key(key) {
            map.insert(key.clone(), raw_to_json(value));
        }
    }

    map
}

/// Zero-sized [`ComponentCodec`] implementor for the Java JSON wire format.
#[derive(Clone, Copy)]
pub struct JsonCodec;

impl ComponentCodec for JsonCodec {
    type DecodeInput = Value;
    type EncodeOutput = Value;
    type DecodeOutput = TextComponent;

    fn serialize(self, component: &TextComponent) -> Self::EncodeOutput {
        to_java_json(component)
    }

    fn deserialize(self, value: Self::DecodeInput) -> Self::DecodeOutput {
        from_java_json(value)
    }
}
