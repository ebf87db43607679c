//! Integration tests built from the literal round-trip scenarios.

use rawtext::{
    from_bedrock_section_string, from_java_nbt, from_java_section_string, to_bedrock_section_string,
    to_java_nbt, to_java_section_string, Colour, Content, Formatting, SectionText, TextComponent,
};
use serde_json::json;

/// A single-character compound with a given colour and otherwise-blank formatting.
fn coloured_char(name: &str, r: u8, g: u8, b: u8, ch: char) -> TextComponent {
    let formatting = Formatting { colour: Some(Colour::new(name, r, g, b)), ..Default::default() };
    TextComponent::styled(Content::text(ch.to_string()), formatting)
}

#[test]
fn bare_string_tag_is_plain_and_renders_unstyled() {
    let tag = quartz_nbt::NbtTag::String("Hello World".to_owned());
    let component = from_java_nbt(tag);
    assert_eq!(component, TextComponent::Plain("Hello World".to_owned()));
    assert_eq!(to_bedrock_section_string(&component), "Hello World");
}

#[test]
fn list_of_two_strings_is_recursive_and_concatenates() {
    let list = quartz_nbt::NbtTag::List(quartz_nbt::NbtList::from(vec![
        quartz_nbt::NbtTag::String("Hello ".to_owned()),
        quartz_nbt::NbtTag::String("World".to_owned()),
    ]));
    let component = from_java_nbt(list);
    assert_eq!(
        component,
        TextComponent::Recursive(vec![
            TextComponent::Plain("Hello ".to_owned()),
            TextComponent::Plain("World".to_owned()),
        ])
    );
    assert_eq!(to_java_section_string(&component), "Hello World");
}

#[test]
fn two_coloured_runs_parse_into_a_contentless_compound_with_two_children() {
    let parsed = match from_java_section_string("\u{a7}4Hello\u{a7}1World", false) {
        SectionText::Single(component) => component,
        SectionText::Lines(_) => panic!("expected a single component"),
    };

    let TextComponent::Compound(node) = &parsed else { panic!("expected a compound") };
    assert!(node.content.is_none());
    assert_eq!(node.children.len(), 2);

    let TextComponent::Compound(first) = &node.children[0] else { panic!("expected a compound child") };
    assert_eq!(first.formatting.colour.as_ref().unwrap().name, "dark_red");
    assert_eq!(node.children[0].shallow_text(), Some("Hello"));

    let TextComponent::Compound(second) = &node.children[1] else { panic!("expected a compound child") };
    assert_eq!(second.formatting.colour.as_ref().unwrap().name, "dark_blue");
    assert_eq!(node.children[1].shallow_text(), Some("World"));

    // Round trip back through NBT keeps the same shape (extra list of two styled text nodes).
    let nbt = to_java_nbt(&parsed);
    assert_eq!(from_java_nbt(nbt), parsed);
}

#[test]
fn empty_section_string_round_trips_through_every_emitter() {
    let component = match from_java_section_string("", false) {
        SectionText::Single(component) => component,
        SectionText::Lines(_) => panic!("expected a single component"),
    };
    assert_eq!(component, TextComponent::Plain(String::new()));
    assert_eq!(to_java_section_string(&component), "");
    assert_eq!(to_bedrock_section_string(&component), "");
    assert_eq!(to_java_nbt(&component), quartz_nbt::NbtTag::String(String::new()));
}

#[test]
fn bedrock_and_java_section_string_canonicalisation_is_a_fixed_point() {
    let raw = "\u{a7}4Hello\u{a7}1World";
    for from in [from_java_section_string, from_bedrock_section_string] {
        let component = match from(raw, false) {
            SectionText::Single(c) => c,
            SectionText::Lines(_) => panic!("expected a single component"),
        };
        let emitted = to_java_section_string(&component);
        let reparsed = match from_java_section_string(&emitted, false) {
            SectionText::Single(c) => c,
            SectionText::Lines(_) => panic!("expected a single component"),
        };
        assert_eq!(to_java_section_string(&reparsed), emitted, "canonical form is not a fixed point");
    }
}

#[test]
fn nbt_and_json_agree_on_a_styled_compound() {
    let tag = quartz_nbt::compound! {
        "text": "hi",
        "color": "red",
        "bold": true,
    };
    let from_nbt = from_java_nbt(quartz_nbt::NbtTag::Compound(tag));

    let value = json!({"text": "hi", "color": "red", "bold": true});
    let from_json = rawtext::from_java_json(value);

    assert_eq!(from_nbt, from_json);
}

#[test]
fn unrecognised_top_level_nbt_tag_survives_as_invalid() {
    let tag = quartz_nbt::NbtTag::Int(42);
    let component = from_java_nbt(tag.clone());
    assert_eq!(to_java_nbt(&component), tag);
}

/// Ten single-character compounds, each carrying one of the first ten palette colours in
/// order, with italic/underlined/bold/strikethrough/obfuscated set one each on the first,
/// third, fifth, seventh and ninth node respectively. Canonicalises to a fixed Bedrock and
/// Java section string, exercising the first-child-mutates-ambient sibling-chaining quirk,
/// the sticky-reset rule and the initial black destination colour together.
fn ten_compound_colour_cycle() -> TextComponent {
    let mut h = coloured_char("black", 0x00, 0x00, 0x00, 'H');
    let TextComponent::Compound(node) = &mut h else { unreachable!() };
    node.formatting.italic = Some(true);

    let e = coloured_char("dark_blue", 0x00, 0x00, 0xAA, 'e');

    let mut l1 = coloured_char("dark_green", 0x00, 0xAA, 0x00, 'l');
    let TextComponent::Compound(node) = &mut l1 else { unreachable!() };
    node.formatting.underlined = Some(true);

    let l2 = coloured_char("dark_aqua", 0x00, 0xAA, 0xAA, 'l');

    let mut o1 = coloured_char("dark_red", 0xAA, 0x00, 0x00, 'o');
    let TextComponent::Compound(node) = &mut o1 else { unreachable!() };
    node.formatting.bold = Some(true);

    let w = coloured_char("dark_purple", 0xAA, 0x00, 0xAA, 'W');

    let mut o2 = coloured_char("gold", 0xFF, 0xAA, 0x00, 'o');
    let TextComponent::Compound(node) = &mut o2 else { unreachable!() };
    node.formatting.strikethrough = Some(true);

    let r = coloured_char("gray", 0xAA, 0xAA, 0xAA, 'r');

    let mut l3 = coloured_char("dark_gray", 0x55, 0x55, 0x55, 'l');
    let TextComponent::Compound(node) = &mut l3 else { unreachable!() };
    node.formatting.obfuscated = Some(true);

    let d = coloured_char("blue", 0x55, 0x55, 0xFF, 'd');

    TextComponent::Recursive(vec![h, e, l1, l2, o1, w, o2, r, l3, d])
}

#[test]
fn ten_compound_colour_cycle_canonicalises_to_the_fixed_bedrock_and_java_strings() {
    let component = ten_compound_colour_cycle();

    assert_eq!(
        to_bedrock_section_string(&component),
        "\u{a7}oH\u{a7}1e\u{a7}2l\u{a7}3l\u{a7}4\u{a7}lo\u{a7}r\u{a7}5\u{a7}oW\u{a7}6o\u{a7}7r\u{a7}8\u{a7}kl\u{a7}r\u{a7}9\u{a7}od"
    );
    assert_eq!(
        to_java_section_string(&component),
        "\u{a7}oH\u{a7}1e\u{a7}2\u{a7}nl\u{a7}r\u{a7}3\u{a7}ol\u{a7}4\u{a7}lo\u{a7}r\u{a7}5\u{a7}oW\u{a7}6\u{a7}mo\u{a7}r\u{a7}7\u{a7}or\u{a7}8\u{a7}kl\u{a7}r\u{a7}9\u{a7}od"
    );
}

#[test]
fn java_canonical_form_of_the_ten_compound_cycle_round_trips_and_canonicalises_to_bedrock() {
    let java = to_java_section_string(&ten_compound_colour_cycle());
    let reparsed = match from_java_section_string(&java, false) {
        SectionText::Single(c) => c,
        SectionText::Lines(_) => panic!("expected a single component"),
    };
    assert_eq!(to_java_section_string(&reparsed), java, "canonical Java form is not a fixed point");
    assert_eq!(
        to_bedrock_section_string(&reparsed),
        "\u{a7}oH\u{a7}1e\u{a7}2l\u{a7}3l\u{a7}4\u{a7}lo\u{a7}r\u{a7}5\u{a7}oW\u{a7}6o\u{a7}7r\u{a7}8\u{a7}kl\u{a7}r\u{a7}9\u{a7}od"
    );
}
