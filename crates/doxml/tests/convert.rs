/*
 * convert.rs
 * Copyright (c) 2025 doxml contributors
 *
 * End-to-end conversion tests: XML text in, document tree out.
 */

use doxml::{
    AttrValue, AttributePolicy, ConvertError, DoxmlConfig, Element, Node, NodeKind,
    ParserOptions, TransformPipeline, UnknownTagPolicy, XmlParser, parse_document,
};

fn convert(input: &str) -> Element {
    parse_document(input, None, &ParserOptions::default()).unwrap()
}

fn first(element: &Element) -> &Element {
    element.children[0].as_element().unwrap()
}

#[test]
fn test_text_then_child_then_tail() {
    let document = convert("<document><paragraph>hello<strong/>world</paragraph></document>");

    let paragraph = first(&document);
    assert_eq!(paragraph.children[0], Node::text("hello"));
    assert_eq!(paragraph.children[1].kind(), Some(NodeKind::Strong));
    assert_eq!(paragraph.children[2], Node::text("world"));

    insta::assert_snapshot!(document.pformat(), @r"
    <document>
        <paragraph>
            hello
            <strong>
            world
    ");
}

#[test]
fn test_tail_lands_in_parent() {
    let document = convert("<document><section><paragraph>a</paragraph>after</section></document>");

    let section = first(&document);
    assert_eq!(section.children.len(), 2);
    assert_eq!(section.children[1], Node::text("after"));
    assert_eq!(first(section).children, vec![Node::text("a")]);
}

#[test]
fn test_single_class_is_a_list() {
    let document = convert(r#"<document><paragraph class="foo">x</paragraph></document>"#);

    let paragraph = first(&document);
    assert_eq!(paragraph.get("classes"), Some(&AttrValue::from(vec!["foo"])));

    let json = serde_json::to_value(paragraph).unwrap();
    assert_eq!(json["attributes"]["classes"], serde_json::json!(["foo"]));
}

#[test]
fn test_code_language() {
    let document = convert(
        r#"<document><literal_block classes="code python">x=1</literal_block><literal_block classes="code">x=1</literal_block></document>"#,
    );

    let python = document.children[0].as_element().unwrap();
    assert_eq!(python.get_str("language"), Some("python"));

    let unknown = document.children[1].as_element().unwrap();
    assert_eq!(unknown.get("language"), None);
    assert_eq!(unknown.classes(), ["code"]);
}

#[test]
fn test_title_promotion() {
    let document = parse_document(
        "<document><title>Intro</title><paragraph>Body</paragraph></document>",
        Some("intro.xml"),
        &ParserOptions::default(),
    )
    .unwrap();

    insta::assert_snapshot!(document.pformat(), @r#"
    <document source="intro.xml">
        <section ids="Introtitle">
            <title>
                Intro
            <paragraph>
                Body
    "#);
}

#[test]
fn test_no_promotion_without_leading_title() {
    let document = convert("<document><paragraph>P</paragraph><title>T</title></document>");
    let kinds: Vec<_> = document.children.iter().filter_map(Node::kind).collect();
    assert_eq!(kinds, vec![NodeKind::Paragraph, NodeKind::Title]);
}

#[test]
fn test_unknown_tag_fails() {
    let parser = XmlParser::default();
    let mut document = Element::document(None);
    let input = "<document><paragraph>before</paragraph><frobnicate/><paragraph>after</paragraph></document>";

    let err = parser.parse(input, &mut document).unwrap_err();
    match &err {
        ConvertError::UnknownTag { tag, position } => {
            assert_eq!(tag, "frobnicate");
            assert_eq!(*position, input.find("<frobnicate").unwrap());
        }
        other => panic!("expected UnknownTag, got {:?}", other),
    }
    assert!(err.to_string().contains("<frobnicate>"));

    // Only what was built before the unknown tag
    assert_eq!(document.children.len(), 1);
    assert_eq!(first(&document).astext(), "before");
}

#[test]
fn test_unknown_tag_substitution() {
    let options = ParserOptions::default().with_unknown_tags(UnknownTagPolicy::Substitute);
    let document = parse_document(
        r#"<document><widget classes="w">block<emphasis>a<gadget>b</gadget></emphasis></widget></document>"#,
        None,
        &options,
    )
    .unwrap();

    insta::assert_snapshot!(document.pformat(), @r#"
    <document>
        <container classes="w">
            block
            <emphasis>
                a
                <inline>
                    b
    "#);
}

#[test]
fn test_namespaced_attributes_are_dropped() {
    let document = convert(
        r#"<document xmlns:env="http://ns"><paragraph env:attr="v" ids="p1">t</paragraph></document>"#,
    );

    let paragraph = first(&document);
    assert_eq!(paragraph.get("{http://ns}attr"), None);
    assert!(paragraph.attributes.keys().all(|key| !key.contains('{')));
    assert_eq!(paragraph.get_str("ids"), Some("p1"));
}

#[test]
fn test_malformed_input() {
    let mut document = Element::document(None);
    let err = XmlParser::default()
        .parse("<document><paragraph>unclosed</document>", &mut document)
        .unwrap_err();
    assert!(matches!(err, ConvertError::MalformedInput(_)));
    assert!(document.is_empty());
}

#[test]
fn test_common_lists_policy() {
    let options = ParserOptions::default().with_attribute_policy(AttributePolicy::CommonLists);
    let document = parse_document(
        r#"<document><footnote ids="f1" names="one" backrefs="r1 r2"><paragraph>Note</paragraph></footnote></document>"#,
        None,
        &options,
    )
    .unwrap();

    let footnote = first(&document);
    assert_eq!(footnote.get("ids"), Some(&AttrValue::from(vec!["f1"])));
    assert_eq!(footnote.get("backrefs"), Some(&AttrValue::from(vec!["r1 r2"])));
    insta::assert_snapshot!(footnote.starttag(), @r#"<footnote backrefs="r1 r2" ids="f1" names="one">"#);
}

#[test]
fn test_common_lists_multi_word_title() {
    let options = ParserOptions::default().with_attribute_policy(AttributePolicy::CommonLists);
    let document = parse_document(
        r#"<document><title>Getting Started</title><paragraph names="first steps">Body</paragraph></document>"#,
        None,
        &options,
    )
    .unwrap();

    let section = first(&document);
    assert_eq!(section.kind, NodeKind::Section);
    assert_eq!(section.get("ids"), Some(&AttrValue::from(vec!["Getting Startedtitle"])));
    let paragraph = section.children[1].as_element().unwrap();
    assert_eq!(paragraph.get("names"), Some(&AttrValue::from(vec!["first steps"])));
}

#[test]
fn test_docutils_sample() {
    let input = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE document PUBLIC "+//IDN docutils.sourceforge.net//DTD Docutils Generic//EN//XML" "http://docutils.sourceforge.net/docs/ref/docutils.dtd">
<document ids="sample" names="sample" source="sample.rst" title="Sample">
    <title>Sample</title>
    <paragraph><emphasis>Inline</emphasis> markup survives.</paragraph>
    <paragraph><reference name="example" refuri="https://example.org/?a=1&amp;b=2">Example</reference> is a link.</paragraph>
    <!-- a comment -->
    <bullet_list bullet="-">
        <list_item><paragraph>one</paragraph></list_item>
        <list_item><paragraph>two</paragraph></list_item>
    </bullet_list>
    <literal_block classes="code rust" xml:space="preserve">fn main() {}</literal_block>
</document>"#;

    let options = ParserOptions::default().with_drop_blank_text(true);
    let document = parse_document(input, Some("sample.xml"), &options).unwrap();

    insta::assert_snapshot!(document.pformat(), @r#"
    <document source="sample.xml">
        <section ids="Sampletitle">
            <title>
                Sample
            <paragraph>
                <emphasis>
                    Inline
                 markup survives.
            <paragraph>
                <reference name="example" refuri="https://example.org/?a=1&amp;b=2">
                    Example
                 is a link.
            <bullet_list bullet="-">
                <list_item>
                    <paragraph>
                        one
                <list_item>
                    <paragraph>
                        two
            <literal_block classes="code rust" language="rust">
                fn main() {}
    "#);
}

#[test]
fn test_math_ext_option() {
    let options = ParserOptions::default().with_math_ext(true);
    let document = parse_document(
        "<document><math_block>E = mc^2</math_block><paragraph><math>x</math> is small</paragraph></document>",
        None,
        &options,
    )
    .unwrap();

    insta::assert_snapshot!(document.pformat(), @r#"
    <document>
        <displaymath latex="E = mc^2">
            E = mc^2
        <paragraph>
            <inline_math latex="x">
                x
             is small
    "#);
}

#[test]
fn test_configured_conversion_with_math_env() {
    let config = DoxmlConfig::from_toml_str(
        r#"
[parser]
drop-blank-text = true

[math-env]
enabled = true
"#,
    )
    .unwrap();

    let mut document = parse_document(
        "<document>\n  <math_block>a+b</math_block>\n  <paragraph><math>c</math></paragraph>\n</document>",
        Some("chapter.xml"),
        &config.parser,
    )
    .unwrap();
    TransformPipeline::from_config(&config)
        .execute(&mut document)
        .unwrap();

    let kinds: Vec<_> = document.descendants().filter_map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![NodeKind::DisplayMath, NodeKind::Paragraph, NodeKind::InlineMath]
    );
    assert_eq!(first(&document).get_str("latex"), Some("a+b"));
}

#[test]
fn test_math_env_skips_other_sources() {
    let config = DoxmlConfig::from_toml_str("[math-env]\nenabled = true\n").unwrap();
    let mut document = parse_document(
        "<document><math_block>a</math_block></document>",
        Some("chapter.rst"),
        &config.parser,
    )
    .unwrap();
    TransformPipeline::from_config(&config)
        .execute(&mut document)
        .unwrap();
    assert_eq!(first(&document).kind, NodeKind::MathBlock);
}
