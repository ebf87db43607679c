//! The shared section-string emitter and parser, parameterised by [`Edition`] (§4.1, §4.2).
//!
//! Both editions walk the same two-snapshot diff algorithm; only the palette and the set of
//! style codes differ, so the difference is concentrated in the [`Edition`] trait rather than
//! duplicated per edition.

use crate::colour::{Colour, Palette};
use crate::component::{CompoundNode, TextComponent};
use crate::content::Content;
use crate::format::Formatting;

/// One of the five boolean style attributes a section string can toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StyleField {
    Bold,
    Italic,
    Underlined,
    Strikethrough,
    Obfuscated,
}

impl StyleField {
    fn wants(self, fmt: &Formatting) -> bool {
        match self {
            StyleField::Bold => fmt.bold,
            StyleField::Italic => fmt.italic,
            StyleField::Underlined => fmt.underlined,
            StyleField::Strikethrough => fmt.strikethrough,
            StyleField::Obfuscated => fmt.obfuscated,
        }
        .unwrap_or(false)
    }

    fn get(self, state: &EmittedState) -> bool {
        match self {
            StyleField::Bold => state.bold,
            StyleField::Italic => state.italic,
            StyleField::Underlined => state.underlined,
            StyleField::Strikethrough => state.strikethrough,
            StyleField::Obfuscated => state.obfuscated,
        }
    }

    fn set(self, state: &mut EmittedState, value: bool) {
        let field = match self {
            StyleField::Bold => &mut state.bold,
            StyleField::Italic => &mut state.italic,
            StyleField::Underlined => &mut state.underlined,
            StyleField::Strikethrough => &mut state.strikethrough,
            StyleField::Obfuscated => &mut state.obfuscated,
        };
        *field = value;
    }
}

/// The colour code + style bits a client would actually be rendering at some point in the
/// emitted stream, or that the parser has accumulated while walking the source string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct EmittedState {
    colour: Option<char>,
    bold: bool,
    italic: bool,
    underlined: bool,
    strikethrough: bool,
    obfuscated: bool,
}

/// An edition's section-string dialect: its colour palette and which style codes it supports,
/// in the order turn-on codes are emitted (§4.1 step 3).
pub trait Edition: Copy {
    fn palette() -> &'static Palette;
    fn style_codes() -> &'static [(char, StyleField)];

    fn is_style_code(code: char) -> bool {
        Self::style_codes().iter().any(|(c, _)| *c == code)
    }

    fn is_recognised_code(code: char) -> bool {
        code == 'r' || Self::palette().find_by_code(code).is_some() || Self::is_style_code(code)
    }
}

/// The Java edition: 16-colour palette, all five style codes (`l o n m k`).
#[derive(Clone, Copy, Debug)]
pub struct Java;

impl Edition for Java {
    fn palette() -> &'static Palette {
        crate::colour::java_palette()
    }

    fn style_codes() -> &'static [(char, StyleField)] {
        &[
            ('l', StyleField::Bold),
            ('o', StyleField::Italic),
            ('n', StyleField::Underlined),
            ('m', StyleField::Strikethrough),
            ('k', StyleField::Obfuscated),
        ]
    }
}

/// The Bedrock edition: 28-colour palette, three style codes only (`l o k`).
#[derive(Clone, Copy, Debug)]
pub struct Bedrock;

impl Edition for Bedrock {
    fn palette() -> &'static Palette {
        crate::colour::bedrock_palette()
    }

    fn style_codes() -> &'static [(char, StyleField)] {
        &[('l', StyleField::Bold), ('o', StyleField::Italic), ('k', StyleField::Obfuscated)]
    }
}

// ---- emitter (§4.1) -------------------------------------------------------

/// A single component, or a slice of components emitted one per line (§4.1, §6).
pub enum SectionInput {
    One(TextComponent),
    Many(Vec<TextComponent>),
}

impl From<TextComponent> for SectionInput {
    fn from(component: TextComponent) -> Self {
        SectionInput::One(component)
    }
}

impl From<&TextComponent> for SectionInput {
    fn from(component: &TextComponent) -> Self {
        SectionInput::One(component.clone())
    }
}

impl From<Vec<TextComponent>> for SectionInput {
    fn from(components: Vec<TextComponent>) -> Self {
        SectionInput::Many(components)
    }
}

impl From<&[TextComponent]> for SectionInput {
    fn from(components: &[TextComponent]) -> Self {
        SectionInput::Many(components.to_vec())
    }
}

/// Emits the Java section-string form of `input`.
pub fn to_java_section_string(input: impl Into<SectionInput>) -> String {
    emit::<Java>(input.into())
}

/// Emits the Bedrock section-string form of `input`.
pub fn to_bedrock_section_string(input: impl Into<SectionInput>) -> String {
    emit::<Bedrock>(input.into())
}

fn emit<E: Edition>(input: SectionInput) -> String {
    match input {
        SectionInput::One(component) => emit_one::<E>(&component),
        SectionInput::Many(components) => {
            components.iter().map(emit_one::<E>).collect::<Vec<_>>().join("\n")
        }
    }
}

fn emit_one<E: Edition>(component: &TextComponent) -> String {
    let mut out = String::new();
    let mut src_fmt = Formatting::default();
    let mut dst_state = EmittedState { colour: Some('0'), ..EmittedState::default() };
    walk_emit::<E>(component, &mut src_fmt, &mut dst_state, &mut out);
    out
}

fn resolve(ambient: &Formatting, node: &Formatting) -> Formatting {
    Formatting {
        colour: node.colour.clone().or_else(|| ambient.colour.clone()),
        font: node.font.clone().or_else(|| ambient.font.clone()),
        bold: node.bold.or(ambient.bold),
        italic: node.italic.or(ambient.italic),
        underlined: node.underlined.or(ambient.underlined),
        strikethrough: node.strikethrough.or(ambient.strikethrough),
        obfuscated: node.obfuscated.or(ambient.obfuscated),
        shadow_colour: node.shadow_colour.or(ambient.shadow_colour),
    }
}

fn walk_emit<E: Edition>(component: &TextComponent, src_fmt: &mut Formatting, dst: &mut EmittedState, out: &mut String) {
    match component {
        TextComponent::Plain(text) => {
            diff_and_emit::<E>(src_fmt, dst, out);
            out.push_str(text);
        }
        TextComponent::Invalid(_) => {}
        TextComponent::Recursive(children) => {
            let mut first = true;
            for child in children {
                if first {
                    walk_emit::<E>(child, src_fmt, dst, out);
                    first = false;
                } else {
                    let mut child_fmt = src_fmt.clone();
                    walk_emit::<E>(child, &mut child_fmt, dst, out);
                }
            }
        }
        TextComponent::Compound(node) => {
            if let Some(empty_node) = &node.empty_node {
                let mut child_fmt = src_fmt.clone();
                walk_emit::<E>(empty_node, &mut child_fmt, dst, out);
            }

            *src_fmt = resolve(src_fmt, &node.formatting);
            diff_and_emit::<E>(src_fmt, dst, out);

            if let Some(Content::Text { text }) = &node.content {
                out.push_str(text);
            }

            for child in &node.children {
                let mut child_fmt = src_fmt.clone();
                walk_emit::<E>(child, &mut child_fmt, dst, out);
            }
        }
    }
}

/// Diffs `src` against `dst`, emitting the minimal escape sequence to converge them (§4.1
/// steps 1-3) and updating `dst` to match.
fn diff_and_emit<E: Edition>(src: &Formatting, dst: &mut EmittedState, out: &mut String) {
    let needs_reset = E::style_codes().iter().any(|(_, field)| field.get(dst) && !field.wants(src));
    if needs_reset {
        out.push_str("§r");
        *dst = EmittedState::default();
        dst.colour = Some('0');
    }

    if let Some(colour) = &src.colour {
        let entry = E::palette().find_closest(colour.r, colour.g, colour.b);
        if dst.colour != Some(entry.code) {
            out.push('§');
            out.push(entry.code);
            dst.colour = Some(entry.code);
        }
    }

    for (code, field) in E::style_codes() {
        let wants = field.wants(src);
        if wants && !field.get(dst) {
            out.push('§');
            out.push(*code);
        }
        field.set(dst, wants);
    }
}

// ---- parser (§4.2) --------------------------------------------------------

/// The result of parsing a section string: a single component, or one per `\n`-delimited line
/// when `split_newline` was requested.
pub enum SectionText {
    Single(TextComponent),
    Lines(Vec<TextComponent>),
}

struct Run {
    text: String,
    formatting: Formatting,
}

/// Parses a Java section string.
pub fn from_java_section_string(s: &str, split_newline: bool) -> SectionText {
    parse::<Java>(s, split_newline)
}

/// Parses a Bedrock section string.
pub fn from_bedrock_section_string(s: &str, split_newline: bool) -> SectionText {
    parse::<Bedrock>(s, split_newline)
}

fn parse<E: Edition>(s: &str, split_newline: bool) -> SectionText {
    let runs = tokenize::<E>(s);
    if !split_newline {
        return SectionText::Single(collapse_runs(runs));
    }

    let mut lines: Vec<Vec<Run>> = vec![Vec::new()];
    for run in runs {
        let mut parts = run.text.split('\n');
        if let Some(first) = parts.next() {
            if !first.is_empty() {
                lines.last_mut().unwrap().push(Run { text: first.to_owned(), formatting: run.formatting.clone() });
            }
        }
        for part in parts {
            lines.push(Vec::new());
            if !part.is_empty() {
                lines.last_mut().unwrap().push(Run { text: part.to_owned(), formatting: run.formatting.clone() });
            }
        }
    }

    SectionText::Lines(lines.into_iter().map(collapse_runs).collect())
}

/// Run-tokenises a raw section string: closes a run on any recognised `§X` boundary (emitting
/// it only if it accumulated non-empty text), mutates the working style state per the code, and
/// passes unrecognised codes through as literal text (§4.2).
fn tokenize<E: Edition>(s: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut state = EmittedState::default();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '§' {
            current.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some(code) if E::is_recognised_code(code) => {
                chars.next();
                if !current.is_empty() {
                    runs.push(Run { text: std::mem::take(&mut current), formatting: state_to_formatting::<E>(&state) });
                }
                apply_code::<E>(&mut state, code);
            }
            _ => current.push('§'),
        }
    }

    if !current.is_empty() {
        runs.push(Run { text: current, formatting: state_to_formatting::<E>(&state) });
    }

    runs
}

fn apply_code<E: Edition>(state: &mut EmittedState, code: char) {
    if code == 'r' {
        *state = EmittedState::default();
        return;
    }
    if E::palette().find_by_code(code).is_some() {
        state.colour = Some(code);
        return;
    }
    if let Some((_, field)) = E::style_codes().iter().find(|(c, _)| *c == code) {
        field.set(state, true);
    }
}

fn state_to_formatting<E: Edition>(state: &EmittedState) -> Formatting {
    let colour = state.colour.map(|code| {
        let entry = E::palette().find_by_code(code).expect("tokenize only records validated colour codes");
        Colour::new(entry.name, entry.r, entry.g, entry.b)
    });

    Formatting {
        colour,
        font: None,
        bold: state.bold.then_some(true),
        italic: state.italic.then_some(true),
        underlined: state.underlined.then_some(true),
        strikethrough: state.strikethrough.then_some(true),
        obfuscated: state.obfuscated.then_some(true),
        shadow_colour: None,
    }
}

fn collapse_runs(runs: Vec<Run>) -> TextComponent {
    let mut runs = runs.into_iter();
    let Some(first) = runs.next() else {
        return TextComponent::Plain(String::new());
    };
    let Some(second) = runs.next() else {
        return collapse_single(first);
    };

    let children = std::iter::once(first).chain(std::iter::once(second)).chain(runs).map(collapse_single).collect();
    TextComponent::Compound(Box::new(CompoundNode { children, ..Default::default() }))
}

fn collapse_single(run: Run) -> TextComponent {
    if run.formatting.is_blank() {
        TextComponent::Plain(run.text)
    } else {
        TextComponent::Compound(Box::new(CompoundNode {
            content: Some(Content::Text { text: run.text }),
            formatting: run.formatting,
            ..Default::default()
        }))
    }
}
