use indoc::indoc;
use serde_json::json;

use crate::{Error, MatchOptions, Query, Record};

const DOCUMENT: &str = indoc! {r#"
    <html><body>
    <div class="test" id="test">
        <span>test</span>
        <span class="t">
            test2
        </span>
        <span class="t">
            test3
        </span>
    </div>
    <div class="test" id="test bis">
        <span>test bis</span>
        <span class="t">
            test2 bis
        </span>
        <span class="t">
            test3 bis
        </span>
    </div>
    <div class="people">
        <div>
            <span class="Name">John</span>
            <span class="LastName">Doe</span>
            <span>23</span>
            <div class="marks">
                <span>18</span>
                <span>19</span>
            </div>
        </div>
        <div>
            <span class="Name">Peter</span>
            <span>Parker</span>
            <span class="age">18</span>
            <div>
                <span>20</span>
                <span>19</span>
            </div>
        </div>
    </div>
    </body></html>
"#};

fn to_json(record: &Record) -> serde_json::Value {
    serde_json::to_value(record).expect("record serializes")
}

fn extract(pattern: &str) -> Option<serde_json::Value> {
    let query = Query::new(pattern).expect("valid pattern");
    query.extract(DOCUMENT).map(|record| to_json(&record))
}

#[test]
fn body_rooted_pattern() {
    let result = extract(r#"<body><div class="test" id="${test}"></div></body>"#);

    assert_eq!(result, Some(json!({ "test": "test" })));
}

#[test]
fn later_hits_overwrite_scalars() {
    let result = extract(r#"<div class="test" id="${test}"></div>"#);

    assert_eq!(result, Some(json!({ "test": "test bis" })));
}

#[test]
fn child_text_across_hits() {
    let result = extract(r#"<div class="test"><span>${test}</span></div>"#);

    assert_eq!(result, Some(json!({ "test": "test bis" })));
}

#[test]
fn one_hit_per_record() {
    let query = Query::new(r#"<div class="test"><span>${test}</span></div>"#).expect("valid pattern");
    let records: Vec<_> = query.extract_all(DOCUMENT).iter().map(to_json).collect();

    assert_eq!(records, [json!({ "test": "test" }), json!({ "test": "test bis" })]);
}

#[test]
fn person_fields() {
    let result = extract(indoc! {r#"
        <div class="people">
        <div>
        <span>${Name}</span>
        <span>${LastName}</span>
        <span>${age}</span>
        </div>
        </div>
    "#});

    assert_eq!(
        result,
        Some(json!({ "Name": "John", "LastName": "Doe", "age": "23" }))
    );
}

#[test]
fn people_block_list() {
    let result = extract(indoc! {r#"
        <div class="people">
            <div datatype="block" key="people[]">
                <span>${name}</span>
                <span>${last}</span>
                <div datatype="optional">
                    <span datatype="repeatable">${marks[]}</span>
                </div>
            </div>
        </div>
    "#});

    assert_eq!(
        result,
        Some(json!({
            "people": [
                { "name": "John", "last": "Doe", "marks": ["18", "19"] },
                { "name": "Peter", "last": "Parker", "marks": ["20", "19"] },
            ]
        }))
    );
}

#[test]
fn checker_selects_numeric_span() {
    let result = extract(indoc! {r#"
        <div class="people">
            <div datatype="block repeatable" key="ages[]">
                <span class="Name">${name}</span>
                <span datatype="repeatable">${/^[0-9]+$/}${age}</span>
            </div>
        </div>
    "#});

    assert_eq!(
        result,
        Some(json!({
            "ages": [
                { "name": "John", "age": "23" },
                { "name": "Peter", "age": "18" },
            ]
        }))
    );
}

#[test]
fn no_hit_is_none() {
    assert_eq!(extract(r#"<table class="test"><tr><td>${x}</td></tr></table>"#), None);
    assert_eq!(extract(r#"<div class="missing">${x}</div>"#), None);
}

#[test]
fn strict_matches_document_root_only() {
    let options = MatchOptions::new().strict(true);
    let query = Query::with_options(
        r#"<div class="card"><h1>${title}</h1><p>${body}</p></div>"#,
        options,
    )
    .expect("valid pattern");

    let direct = query.extract(r#"<div class="card"><h1>Hi</h1><p>There</p></div>"#);
    assert_eq!(direct.map(|r| to_json(&r)), Some(json!({ "title": "Hi", "body": "There" })));

    let nested = query.extract(r#"<main><div class="card"><h1>Hi</h1><p>There</p></div></main>"#);
    assert_eq!(nested, None);
}

#[test]
fn non_strict_finds_nested_hits() {
    let query = Query::new(r#"<div class="card"><h1>${title}</h1></div>"#).expect("valid pattern");

    let record = query.extract(r#"<main><div class="card"><h1>Hi</h1></div></main>"#);
    assert_eq!(record.map(|r| to_json(&r)), Some(json!({ "title": "Hi" })));
}

#[test]
fn untrimmed_text_keeps_whitespace() {
    let options = MatchOptions::new().trim_text(false);
    let query = Query::with_options(r#"<p class="x">${text}</p>"#, options).expect("valid pattern");

    let record = query.extract("<p class=\"x\">\n  hi\n</p>");
    assert_eq!(record.map(|r| to_json(&r)), Some(json!({ "text": "\n  hi\n" })));
}

#[test]
fn pattern_without_element() {
    assert!(matches!(Query::new("only text"), Err(Error::NoRootElement)));
}

#[test]
fn class_term_that_is_not_a_selector() {
    let err = Query::new(r#"<div class="1st">${x}</div>"#).unwrap_err();

    assert!(matches!(&err, Error::InvalidSelector { selector, .. } if selector == "div.1st"));
}

#[test]
fn strict_mode_skips_selector() {
    let options = MatchOptions::new().strict(true);

    assert!(Query::with_options(r#"<div class="1st">${x}</div>"#, options).is_ok());
}

#[test]
fn try_from_source() {
    let query = Query::try_from("<b>${x}</b>").expect("valid pattern");

    assert_eq!(query.pattern().len(), 1);
    assert!(!query.options().strict);
}

#[test]
fn pretty_people_records() {
    let query = Query::new(indoc! {r#"
        <div class="people">
            <div datatype="block" key="people[]">
                <span class="Name">${name}</span>
            </div>
        </div>
    "#})
    .expect("valid pattern");
    let record = query.extract(DOCUMENT).expect("document matches");

    insta::assert_snapshot!(record.format(true, Default::default()), @r#"
    {
      "people": [
        {
          "name": "John"
        },
        {
          "name": "Peter"
        }
      ]
    }
    "#);
}

#[test]
fn deeply_nested_pattern_compiles_and_hits_the_limit() {
    let depth = 20_000;
    let source = format!("{}${{x}}{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let options = MatchOptions::new().strict(true).recursion_limit(16);

    let query = Query::with_options(&source, options).expect("deep pattern compiles");
    assert_eq!(query.pattern().len(), depth);

    assert_eq!(query.extract(&source), None);
}
