use verba_syntax::{
    EntryKey, KeyPart, ParseError, PhraseBody, Position, Reference, Segment, parse_file,
};

fn key(parts: &[KeyPart]) -> EntryKey {
    EntryKey { parts: parts.to_vec() }
}

fn lit(name: &str) -> KeyPart {
    KeyPart::Literal(name.to_string())
}

#[test]
fn parses_simple_definitions_and_comments() {
    let definitions = parse_file(
        r#"
        // Basic terms.
        card = "card";
        draw($n) = "Draw {$n}."; // trailing comment
        "#,
    )
    .unwrap();

    assert_eq!(definitions.len(), 2);
    assert_eq!(definitions[0].name, "card");
    assert!(definitions[0].parameters.is_empty());
    assert_eq!(definitions[1].name, "draw");
    assert_eq!(definitions[1].parameters, vec!["n"]);
    assert_eq!(definitions[1].position, Position { line: 4, column: 9 });
}

#[test]
fn parses_variant_block_with_shared_keys() {
    let definitions = parse_file(
        r#"card = :fem {
            *one: "carta",
            other, many: "cartas",
            nom.one: "Karte",
        };"#,
    )
    .unwrap();

    let PhraseBody::Variants(entries) = &definitions[0].body else {
        panic!("expected variant block");
    };
    assert_eq!(definitions[0].tags, vec!["fem"]);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].keys, vec![key(&[KeyPart::Wildcard(Some("one".to_string()))])]);
    assert!(entries[0].keys[0].is_default_marker());
    assert_eq!(entries[1].keys, vec![key(&[lit("other")]), key(&[lit("many")])]);
    assert_eq!(entries[2].keys[0].variant_key(), "nom.one");
}

#[test]
fn modifiers_in_any_order() {
    let definitions = parse_file(
        r#"destroyed($t, $n) = :match($n) :from($t) :masc :masc {
            1: "{$t} destroyed",
            *other: "{$t} all destroyed",
        };"#,
    )
    .unwrap();

    let definition = &definitions[0];
    assert_eq!(definition.tags, vec!["masc"]);
    assert_eq!(definition.from_param.as_deref(), Some("t"));
    assert_eq!(definition.match_params, vec!["n"]);
}

#[test]
fn match_keys_with_wildcards() {
    let definitions = parse_file(
        r#"pick($n, $e) = :match($n, $e) { 1.masc: "a", 1.*fem: "b", *.neut: "c", *: "d" };"#,
    )
    .unwrap();

    let PhraseBody::Variants(entries) = &definitions[0].body else {
        panic!("expected arms");
    };
    assert_eq!(
        entries[1].keys[0],
        key(&[lit("1"), KeyPart::Wildcard(Some("fem".to_string()))])
    );
    assert_eq!(entries[2].keys[0], key(&[KeyPart::Wildcard(None), lit("neut")]));
    assert!(entries[3].keys[0].is_catch_all());
}

#[test]
fn string_escapes() {
    let definitions = parse_file(r#"quote = "say \"hi\"\t\\ \u{e9}\n";"#).unwrap();
    let PhraseBody::Template(template) = &definitions[0].body else {
        panic!("expected template");
    };
    assert_eq!(template.as_literal().as_deref(), Some("say \"hi\"\t\\ \u{e9}\n"));
}

#[test]
fn template_segments_are_parsed() {
    let definitions = parse_file(r#"ally_of($s) = "{subtype($s)} ally";"#).unwrap();
    let PhraseBody::Template(template) = &definitions[0].body else {
        panic!("expected template");
    };
    let Segment::Interpolation(interpolation) = &template.segments[0] else {
        panic!("expected interpolation");
    };
    assert!(matches!(&interpolation.reference, Reference::Call { name, .. } if name == "subtype"));
}

#[test]
fn unknown_modifier_is_unknown_directive() {
    let error = parse_file(r#"x($a) = :frob($a) "text";"#).unwrap_err();
    assert_eq!(
        error,
        ParseError::UnknownDirective {
            directive: "frob".to_string(),
            position: Position { line: 1, column: 9 },
        }
    );
}

#[test]
fn template_errors_are_rebased_onto_the_source() {
    let error = parse_file("ok = \"fine\";\nx = \"a {b\";").unwrap_err();
    assert_eq!(
        error,
        ParseError::UnterminatedInterpolation { position: Position { line: 2, column: 8 } }
    );
}

#[test]
fn template_error_positions_count_raw_escapes() {
    let quote = parse_file(r#"x = "a\"b {c";"#).unwrap_err();
    assert_eq!(quote.position(), Position { line: 1, column: 11 });
    let newline = parse_file(r#"x = "a\nb {c";"#).unwrap_err();
    assert_eq!(newline.position(), Position { line: 1, column: 11 });
    let unicode = parse_file("ok = \"\\u{25CF}\";\nx = \"\\u{25CF} {c\";").unwrap_err();
    assert_eq!(unicode.position(), Position { line: 2, column: 15 });
}

#[test]
fn missing_semicolon_is_a_syntax_error() {
    let error = parse_file(r#"x = "a""#).unwrap_err();
    assert!(matches!(error, ParseError::Syntax { .. }), "{error}");
    assert_eq!(error.position(), Position { line: 1, column: 8 });
}

#[test]
fn duplicate_from_is_rejected() {
    let error = parse_file(r#"x($a, $b) = :from($a) :from($b) "{$a}";"#).unwrap_err();
    assert!(error.to_string().contains("more than one :from"), "{error}");
}

#[test]
fn bodyless_from_renders_its_parameter() {
    let definitions = parse_file("wrapped($t) = :masc :from($t);").unwrap();
    let PhraseBody::Template(template) = &definitions[0].body else {
        panic!("expected a template body");
    };
    let [Segment::Interpolation(interpolation)] = template.segments.as_slice() else {
        panic!("expected a single interpolation, got {template:?}");
    };
    assert_eq!(interpolation.reference, Reference::Parameter("t".to_string()));
    assert!(interpolation.selectors.is_empty() && interpolation.transform.is_none());
    assert_eq!(definitions[0].tags, vec!["masc"]);
    assert!(definitions[0].bodyless);

    let error = parse_file("x($t) = :masc;").unwrap_err();
    assert!(error.to_string().contains("no body and no :from"), "{error}");
}

#[test]
fn trailing_garbage_is_rejected() {
    let error = parse_file("x = \"a\";\n123").unwrap_err();
    assert_eq!(error.position(), Position { line: 2, column: 1 });
}
