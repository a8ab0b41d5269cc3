//! Results Decoding Integration Tests
//!
//! Decodes a full SELECT response and checks both result views, datatype
//! coercion, the string fallback and the handling of unknown term kinds.

use chrono::{FixedOffset, TimeZone};
use oxigraph::model::Term as OxTerm;
use sparql_client::{DateFormat, Error, Literal, ResolverConfig, ResultSet, Term};

const PEOPLE: &str = include_str!("data/people.json");

fn people() -> ResultSet {
    PEOPLE.parse().expect("fixture decodes")
}

#[test]
fn test_decode_counts_rows_and_vars() {
    let results = people();
    assert_eq!(results.len(), 2);
    assert_eq!(results.vars().len(), 9);
    assert!(results.links().is_empty());
}

#[test]
fn test_decode_from_reader() {
    let results = ResultSet::from_reader(PEOPLE.as_bytes()).unwrap();
    assert_eq!(results, people());
}

#[test]
fn test_bindings_view() {
    let bindings = people().bindings();

    assert_eq!(bindings.len(), 9);
    assert_eq!(bindings["x"], vec![Term::BlankNode("r1".into()), Term::BlankNode("r2".into())]);
    // only the second row binds mbox, only the first binds updated
    assert_eq!(bindings["mbox"], vec![Term::Iri("mailto:bob@work.example.org".into())]);
    assert_eq!(bindings["updated"].len(), 1);
}

#[test]
fn test_solutions_view() {
    let solutions = people().solutions();
    assert_eq!(solutions.len(), 2);

    let alice = &solutions[0];
    assert_eq!(alice.get("x"), Some(&Term::BlankNode("r1".into())));
    assert_eq!(alice.get("hpage"), Some(&Term::Iri("http://work.example.org/alice/".into())));
    assert_eq!(alice.get("name"), Some(&Term::string("Alice")));
    assert_eq!(alice.get("age"), Some(&Term::Literal(Literal::Integer(17))));
    assert_eq!(alice.get("score"), Some(&Term::Literal(Literal::Float(0.2))));
    assert_eq!(alice.get("z"), Some(&Term::Literal(Literal::Boolean(true))));
    assert!(!alice.contains("mbox"));

    let updated = FixedOffset::east_opt(2 * 3600).unwrap().with_ymd_and_hms(2014, 7, 21, 4, 0, 40).unwrap();
    assert_eq!(alice.get("updated"), Some(&Term::Literal(Literal::DateTime(updated))));

    let bob = &solutions[1];
    assert_eq!(bob.get("name"), Some(&Term::lang_literal("Bob", "en")));
    assert_eq!(bob.get("z"), Some(&Term::Literal(Literal::Boolean(false))));
    assert!(!bob.contains("updated"));
}

#[test]
fn test_lenient_typing_keeps_the_row() {
    let doc = r#"{
        "head": { "vars": ["n", "odd"] },
        "results": { "bindings": [
            { "n": { "type": "typed-literal", "datatype": "http://www.w3.org/2001/XMLSchema#integer", "value": "abc" },
              "odd": { "type": "something-else", "value": "x" } }
        ] }
    }"#;
    let results: ResultSet = doc.parse().unwrap();

    let solutions = results.solutions();
    assert_eq!(solutions[0].get("n"), Some(&Term::string("abc")));
    assert!(!solutions[0].contains("odd"));

    let bindings = results.bindings();
    assert_eq!(bindings["n"], vec![Term::string("abc")]);
    assert!(!bindings.contains_key("odd"));
}

#[test]
fn test_custom_date_format() {
    let doc = r#"{
        "head": { "vars": ["when"] },
        "results": { "bindings": [
            { "when": { "type": "typed-literal", "datatype": "http://www.w3.org/2001/XMLSchema#dateTime", "value": "2014-07-21 04:00:40 +0200" } }
        ] }
    }"#;
    let results: ResultSet = doc.parse().unwrap();

    let default_view = results.solutions();
    assert_eq!(default_view[0].get("when"), Some(&Term::string("2014-07-21 04:00:40 +0200")));

    let config = ResolverConfig::default().with_date_format(DateFormat::pattern("%Y-%m-%d %H:%M:%S %z"));
    let custom_view = results.solutions_with(&config);
    let when = custom_view[0].get("when").and_then(Term::as_literal).and_then(Literal::as_date_time).unwrap();
    assert_eq!(when.timestamp(), 1_405_908_040);

    // resolving again with another config does not touch earlier terms
    assert_eq!(default_view[0].get("when"), Some(&Term::string("2014-07-21 04:00:40 +0200")));
}

#[test]
fn test_sparql11_literal_datatypes_opt_in() {
    let doc = r#"{
        "head": { "vars": ["age"] },
        "results": { "bindings": [
            { "age": { "type": "literal", "datatype": "http://www.w3.org/2001/XMLSchema#integer", "value": "43" } }
        ] }
    }"#;
    let results: ResultSet = doc.parse().unwrap();

    assert_eq!(results.bindings()["age"], vec![Term::string("43")]);

    let config = ResolverConfig::default().with_literal_datatypes(true);
    assert_eq!(results.bindings_with(&config)["age"], vec![Term::Literal(Literal::Integer(43))]);
}

#[test]
fn test_ask_response() {
    let results: ResultSet = r#"{ "head": {}, "boolean": false }"#.parse().unwrap();
    assert_eq!(results.boolean(), Some(false));
    assert!(results.solutions().is_empty());
    assert!(results.bindings().is_empty());
}

#[test]
fn test_truncated_document_is_malformed() {
    let truncated = &PEOPLE[..PEOPLE.len() / 2];
    match truncated.parse::<ResultSet>() {
        Err(Error::MalformedInput(_)) => {}
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_terms_convert_to_oxigraph() {
    let solutions = people().solutions();
    for (var, term) in solutions[1].iter() {
        let converted = OxTerm::try_from(term);
        assert!(converted.is_ok(), "?{} = {} failed to convert: {:?}", var, term, converted);
    }
}
