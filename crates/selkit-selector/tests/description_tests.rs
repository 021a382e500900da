//! Integration tests for JSON selector descriptions and render options.

use selkit_selector::{
    Combinator, DescendantSpacing, ElementKind, FragmentDescription, RenderOptions,
    SelectorDescription, SelectorError, combine, element, id,
};

const TABLE_JSON: &str = r#"{
    "combine": {
        "left": {
            "combine": {
                "left": { "compound": [
                    { "kind": "element", "value": "div" },
                    { "kind": "id", "value": "main" },
                    { "kind": "class", "value": "container" },
                    { "kind": "class", "value": "draggable" }
                ] },
                "combinator": "+",
                "right": { "compound": [
                    { "kind": "element", "value": "table" },
                    { "kind": "id", "value": "data" }
                ] }
            }
        },
        "combinator": "~",
        "right": {
            "combine": {
                "left": { "compound": [
                    { "kind": "element", "value": "tr" },
                    { "kind": "pseudo_class", "value": "nth-of-type(even)" }
                ] },
                "combinator": " ",
                "right": { "compound": [
                    { "kind": "element", "value": "td" },
                    { "kind": "pseudo_class", "value": "nth-of-type(even)" }
                ] }
            }
        }
    }
}"#;

#[test]
fn test_build_table_description() {
    let selector = SelectorDescription::from_json(TABLE_JSON)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        selector.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_compound_description_fields() {
    let description = SelectorDescription::from_json(
        r#"{"compound": [{"kind": "pseudo_element", "value": "after"}]}"#,
    )
    .unwrap();
    assert_eq!(
        description,
        SelectorDescription::Compound(vec![FragmentDescription {
            kind: ElementKind::PseudoElement,
            value: "after".to_string(),
        }])
    );
}

#[test]
fn test_empty_compound_builds_empty_selector() {
    let selector = SelectorDescription::from_json(r#"{"compound": []}"#)
        .unwrap()
        .build()
        .unwrap();
    assert!(selector.is_simple());
    assert_eq!(selector.stringify(), "");
}

#[test]
fn test_description_reports_order_error() {
    let description = SelectorDescription::from_json(
        r#"{"compound": [{"kind": "class", "value": "a"}, {"kind": "element", "value": "div"}]}"#,
    )
    .unwrap();
    assert_eq!(
        description.build(),
        Err(SelectorError::Order {
            kind: ElementKind::Element,
            previous: ElementKind::Class
        })
    );
}

#[test]
fn test_description_reports_cardinality_error_in_right_operand() {
    let description = SelectorDescription::from_json(
        r#"{"combine": {
            "left": {"compound": [{"kind": "element", "value": "ul"}]},
            "combinator": ">",
            "right": {"compound": [
                {"kind": "element", "value": "li"},
                {"kind": "element", "value": "span"}
            ]}
        }}"#,
    )
    .unwrap();
    assert_eq!(
        description.build(),
        Err(SelectorError::Cardinality {
            kind: ElementKind::Element
        })
    );
}

#[test]
fn test_invalid_combinator_is_rejected() {
    let err = SelectorDescription::from_json(
        r#"{"combine": {
            "left": {"compound": []},
            "combinator": "=>",
            "right": {"compound": []}
        }}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Description(ref msg) if msg.contains("invalid combinator")
    ));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let err =
        SelectorDescription::from_json(r#"{"compound": [{"kind": "universal", "value": "*"}]}"#)
            .unwrap_err();
    assert!(matches!(err, SelectorError::Description(_)));
}

#[test]
fn test_unknown_field_in_combine_is_rejected() {
    let err = SelectorDescription::from_json(
        r#"{"combine": {
            "left": {"compound": []},
            "combinator": ">",
            "right": {"compound": []},
            "bogus": 1
        }}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Description(ref msg) if msg.contains("unknown field `bogus`")
    ));
}

#[test]
fn test_unknown_field_in_fragment_is_rejected() {
    let err = SelectorDescription::from_json(
        r#"{"compound": [{"kind": "class", "value": "a", "bogus": 1}]}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Description(ref msg) if msg.contains("unknown field `bogus`")
    ));
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(
        SelectorDescription::from_json("{\"compound\": ["),
        Err(SelectorError::Description(_))
    ));
}

#[test]
fn test_describe_then_build_renders_identically() {
    let selector = combine(
        id("nav").class("open").unwrap(),
        Combinator::Descendant,
        combine(
            element("a").attr("href").unwrap(),
            Combinator::NextSibling,
            element("span").pseudo_element("before").unwrap(),
        ),
    );
    let description = selector.describe();
    let rebuilt = description.build().unwrap();
    assert_eq!(rebuilt, selector);
    assert_eq!(rebuilt.stringify(), "#nav.open   a[href] + span::before");
}

#[test]
fn test_description_json_round_trip() {
    let description = combine(element("ul"), Combinator::Child, element("li")).describe();
    let json = description.to_json().unwrap();
    assert!(json.contains("\"combinator\": \">\""));
    assert_eq!(SelectorDescription::from_json(&json).unwrap(), description);
}

#[test]
fn test_render_options_from_json() {
    assert_eq!(
        RenderOptions::from_json(r#"{"descendant": "single"}"#).unwrap(),
        RenderOptions::single_space()
    );
    assert_eq!(RenderOptions::from_json("{}").unwrap(), RenderOptions::default());
    assert_eq!(
        RenderOptions::default().descendant,
        DescendantSpacing::Spliced
    );
    assert!(RenderOptions::from_json(r#"{"descendant": "double"}"#).is_err());
    assert!(RenderOptions::from_json(r#"{"spacing": "single"}"#).is_err());
}

#[test]
fn test_single_space_only_changes_descendant() {
    let options = RenderOptions::single_space();
    for combinator in [
        Combinator::Child,
        Combinator::NextSibling,
        Combinator::SubsequentSibling,
    ] {
        let selector = combine(element("a"), combinator, element("b"));
        assert_eq!(selector.render(options), selector.stringify());
    }
    let descendant = combine(element("a"), Combinator::Descendant, element("b"));
    assert_eq!(descendant.render(options), "a b");
}
