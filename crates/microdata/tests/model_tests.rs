//! Tests for the model and its JSON projection.

use microdata::{Item, Microdata, ParseOptions, Value, parse_html};

#[test]
fn test_json_projection_matches_canonical_form() {
    let data = parse_html(
        r#"<div itemscope itemtype="http://example.com/Person">
            <p>My name is <span itemprop="name">Penelope</span>.</p>
            <p>I am <date itemprop="age" value="22">22 years old.</span>.</p>
        </div>"#,
        "http://example.com",
        &ParseOptions::default(),
    )
    .unwrap();

    assert_eq!(
        data.to_json().unwrap(),
        r#"{"items":[{"type":["http://example.com/Person"],"properties":{"name":["Penelope"],"age":["22 years old.."]}}]}"#
    );
}

#[test]
fn test_json_nested_item_and_id() {
    let data = Microdata::from(vec![
        Item::new()
            .with_type("A")
            .with_id("urn:a")
            .with_value("child", Item::new().with_type("B").with_value("n", "x")),
    ]);

    assert_eq!(
        data.to_json().unwrap(),
        r#"{"items":[{"type":["A"],"properties":{"child":[{"type":["B"],"properties":{"n":["x"]}}]},"id":"urn:a"}]}"#
    );
}

#[test]
fn test_empty_item_serializes_all_collections() {
    let data = Microdata::from(vec![Item::new()]);
    assert_eq!(
        data.to_json().unwrap(),
        r#"{"items":[{"type":[],"properties":{}}]}"#
    );
    assert_eq!(Microdata::new().to_json().unwrap(), r#"{"items":[]}"#);
}

#[test]
fn test_round_trip_preserves_structure() {
    let data = parse_html(
        r#"<div itemscope itemtype="A B" itemid="/a" itemref="ext">
            <span itemprop="z">1</span>
            <div itemprop="child" itemscope itemtype="C"><span itemprop="y">2</span></div>
            <span itemprop="z">3</span>
        </div>
        <p id="ext" itemprop="a">4</p>"#,
        "http://example.com",
        &ParseOptions::default(),
    )
    .unwrap();

    let compact = Microdata::from_json(&data.to_json().unwrap()).unwrap();
    let pretty = Microdata::from_json(&data.to_json_pretty().unwrap()).unwrap();
    assert_eq!(compact, data);
    assert_eq!(pretty, data);

    let names: Vec<&str> = compact.items()[0]
        .properties()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(names, ["a", "z", "child"]);
}

#[test]
fn test_from_json_accepts_missing_fields() {
    let data = Microdata::from_json(r#"{"items":[{"properties":{"p":[{}]}}]}"#).unwrap();

    let item = &data.items()[0];
    assert!(item.types().is_empty());
    let nested = item.property("p").unwrap()[0].as_item().unwrap();
    assert_eq!(nested, &Item::new());
}

#[test]
fn test_from_json_rejects_bad_input() {
    let err = Microdata::from_json(r#"{"items":[{"properties":{"p":[1]}}]}"#).unwrap_err();
    assert!(matches!(err, microdata::Error::Json(_)));
}

#[test]
fn test_equality_depends_on_property_order() {
    let ab = Item::new().with_value("a", "1").with_value("b", "2");
    let ba = Item::new().with_value("b", "2").with_value("a", "1");

    assert_ne!(ab, ba);
    assert_eq!(ab, ab.clone());
}

#[test]
fn test_equality_depends_on_value_order_and_types() {
    let first = Item::new().with_value("a", "1").with_value("a", "2");
    let second = Item::new().with_value("a", "2").with_value("a", "1");
    assert_ne!(first, second);

    assert_ne!(Item::new().with_type("A").with_type("B"), Item::new().with_type("B").with_type("A"));
    assert_ne!(Item::new().with_id("urn:x"), Item::new());
}

#[test]
fn test_empty_id_is_absent() {
    let item = Item::new().with_id("");
    assert_eq!(item.id(), None);
    assert_eq!(item, Item::new());
}

#[test]
fn test_value_accessors() {
    let text = Value::from("x");
    let item = Value::from(Item::new().with_type("T"));

    assert_eq!(text.as_text(), Some("x"));
    assert!(text.as_item().is_none());
    assert_eq!(item.as_item().map(Item::types), Some(&["T".to_string()][..]));
    assert!(item.as_text().is_none());
}

#[test]
fn test_texts_skips_nested_items() {
    let item = Item::new()
        .with_value("p", "a")
        .with_value("p", Item::new())
        .with_value("p", "b");

    assert_eq!(item.texts("p").collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(item.texts("missing").count(), 0);
}

#[test]
fn test_iteration() {
    let data = Microdata::from(vec![Item::new().with_type("A"), Item::new().with_type("B")]);

    let borrowed: Vec<&str> = (&data).into_iter().map(|i| i.types()[0].as_str()).collect();
    assert_eq!(borrowed, ["A", "B"]);
    assert_eq!(data.len(), 2);
    assert_eq!(data.into_iter().count(), 2);
}
