//! End-to-end dictionary tests over a realistic media-naming config:
//! several groups, cross-group links, named capture groups, and example
//! text, loaded from XML and evaluated entry by entry.

use reweave_expression::{build_expressions, evaluate, ExpressionDictionary};
use reweave_xml::Document;

const MEDIA_CONFIG: &str = r#"
<Application name="pez">
  <Expressions name="field-type-expressions">
    <Expression name="alpha-num-expression" eg="a1b2">
      <Pattern><![CDATA[[a-zA-Z0-9]+]]></Pattern>
    </Expression>
    <Expression name="person's-name-expression" eg="Ted O'Neill">
      <Pattern eg="Mick Mars"><![CDATA[[a-zA-Z\s']+]]></Pattern>
    </Expression>
    <Expression name="spaced-dash-expression">
      <Pattern eg=" - "><![CDATA[\s*-\s*]]></Pattern>
    </Expression>
    <Expression name="digits-expression" eg="42">
      <Pattern><![CDATA[[0-9]+]]></Pattern>
    </Expression>
  </Expressions>
  <Expressions name="date-expressions">
    <Expression name="day-expression" eg="30">
      <Pattern><![CDATA[(?<d>[0-9]{1,2})]]></Pattern>
    </Expression>
    <Expression name="month-expression" eg="Jun">
      <Pattern><![CDATA[(?<mmm>[A-Za-z]{3})]]></Pattern>
    </Expression>
    <Expression name="year-expression" eg="2026">
      <Pattern><![CDATA[(?<year>[0-9]{4})]]></Pattern>
    </Expression>
    <Expression name="date-expression">
      <Pattern link="day-expression" eg="30"/>
      <Pattern eg=" "><![CDATA[\s]]></Pattern>
      <Pattern link="month-expression" eg="Jun"/>
      <Pattern eg=" "><![CDATA[\s]]></Pattern>
      <Pattern link="year-expression" eg="2026"/>
    </Expression>
  </Expressions>
  <Expressions name="media-expressions">
    <Expression name="track-no-expression" eg="01">
      <Pattern><![CDATA[(?<trackno>\d{2})]]></Pattern>
    </Expression>
    <Expression name="track-title-expression" eg="Kickstart My Heart">
      <Pattern><![CDATA[(?<title>[a-zA-Z\s]+)]]></Pattern>
    </Expression>
    <Expression name="track-filename-expression" eg="01 - Kickstart My Heart.mp3">
      <Pattern link="track-no-expression"/>
      <Pattern link="spaced-dash-expression"/>
      <Pattern link="track-title-expression"/>
      <Pattern><![CDATA[\.mp3]]></Pattern>
    </Expression>
  </Expressions>
</Application>
"#;

fn media_dictionary() -> ExpressionDictionary {
    let document = Document::parse(MEDIA_CONFIG).expect("config should parse");
    build_expressions(&document, document.root()).expect("dictionary should build")
}

#[test]
fn test_loads_every_group_into_one_namespace() {
    let dictionary = media_dictionary();
    assert_eq!(dictionary.len(), 11);
    assert!(dictionary.contains_key("alpha-num-expression"));
    assert!(dictionary.contains_key("date-expression"));
    assert!(dictionary.contains_key("track-filename-expression"));
}

#[test]
fn test_every_expression_evaluates() {
    let dictionary = media_dictionary();
    for name in dictionary.keys() {
        let result = evaluate(name, &dictionary);
        assert!(result.is_ok(), "{name}: {:?}", result.err());
    }
}

#[test]
fn test_date_expression_composes_across_links() {
    let dictionary = media_dictionary();
    let evaluation = evaluate("date-expression", &dictionary).unwrap();

    assert_eq!(
        evaluation.source(),
        r"(?<d>[0-9]{1,2})\s(?<mmm>[A-Za-z]{3})\s(?<year>[0-9]{4})"
    );
    assert_eq!(
        evaluation.named_groups,
        Some(vec![
            "d".to_string(),
            "mmm".to_string(),
            "year".to_string()
        ])
    );
    assert_eq!(evaluation.eg, "30 Jun 2026");
    assert!(evaluation.regex.is_match("30 Jun 2026"));
}

#[test]
fn test_track_filename_links_across_groups() {
    let dictionary = media_dictionary();
    let evaluation = evaluate("track-filename-expression", &dictionary).unwrap();

    assert_eq!(
        evaluation.source(),
        r"(?<trackno>\d{2})\s*-\s*(?<title>[a-zA-Z\s]+)\.mp3"
    );
    assert_eq!(
        evaluation.named_groups,
        Some(vec!["trackno".to_string(), "title".to_string()])
    );
    assert_eq!(evaluation.eg, "01 - Kickstart My Heart.mp3");

    let captures = evaluation
        .regex
        .captures("01 - Kickstart My Heart.mp3")
        .unwrap();
    assert_eq!(&captures["trackno"], "01");
    assert_eq!(&captures["title"], "Kickstart My Heart");
}

#[test]
fn test_person_name_example_overrides_pattern_example() {
    let dictionary = media_dictionary();
    let evaluation = evaluate("person's-name-expression", &dictionary).unwrap();
    assert_eq!(evaluation.source(), r"[a-zA-Z\s']+");
    assert_eq!(evaluation.eg, "Ted O'Neill");
    assert!(evaluation.regex.is_match("Mick Mars"));
}
