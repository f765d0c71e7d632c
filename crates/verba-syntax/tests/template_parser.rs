use insta::assert_snapshot;
use verba_syntax::{
    Argument, Interpolation, ParseError, Position, Reference, Segment, Selector, TransformCall,
    parse_template,
};

fn literal(text: &str) -> Segment {
    Segment::Literal(text.to_string())
}

fn interpolation(reference: Reference) -> Interpolation {
    Interpolation { transform: None, reference, selectors: vec![] }
}

fn error(template: &str) -> ParseError {
    parse_template(template).expect_err("template should not parse")
}

// ============================================================================
// Escapes
// ============================================================================

#[test]
fn escaped_braces_render_literally() {
    let template = parse_template("Use {{name}} syntax").unwrap();
    assert_eq!(template.segments, vec![literal("Use {name} syntax")]);
}

#[test]
fn escaped_parameter_is_not_interpolated() {
    let template = parse_template("Use {{$name}} for parameters.").unwrap();
    assert_eq!(template.segments, vec![literal("Use {$name} for parameters.")]);
}

#[test]
fn escape_span_keeps_directive_characters() {
    let template = parse_template("{{@cap x:one $y}}").unwrap();
    assert_eq!(template.as_literal().as_deref(), Some("{@cap x:one $y}"));
}

#[test]
fn lone_closing_escape_renders_single_brace() {
    let template = parse_template("a }} b").unwrap();
    assert_eq!(template.segments, vec![literal("a } b")]);
}

#[test]
fn escape_next_to_interpolation() {
    let template = parse_template("{{x}}{$y}").unwrap();
    assert_eq!(
        template.segments,
        vec![
            literal("{x}"),
            Segment::Interpolation(interpolation(Reference::Parameter("y".to_string()))),
        ]
    );
}

#[test]
fn unclosed_escape_is_an_error() {
    assert_snapshot!(
        error("Use {{name").to_string(),
        @"unterminated escape at 1:5: '{{' without matching '}}'"
    );
}

// ============================================================================
// Interpolations
// ============================================================================

#[test]
fn parameter_and_selected_term() {
    let template = parse_template("Draw {$n} {card:$n}.").unwrap();
    assert_eq!(
        template.segments,
        vec![
            literal("Draw "),
            Segment::Interpolation(interpolation(Reference::Parameter("n".to_string()))),
            literal(" "),
            Segment::Interpolation(Interpolation {
                transform: None,
                reference: Reference::Term("card".to_string()),
                selectors: vec![Selector::Parameter("n".to_string())],
            }),
            literal("."),
        ]
    );
}

#[test]
fn chained_literal_selectors() {
    let template = parse_template("{card:acc:one}").unwrap();
    let interpolation = template.interpolations().next().unwrap();
    assert_eq!(
        interpolation.selectors,
        vec![Selector::Literal("acc".to_string()), Selector::Literal("one".to_string())]
    );
}

#[test]
fn transform_with_dotted_context() {
    let template = parse_template("{@der:acc.other $t}").unwrap();
    let interpolation = template.interpolations().next().unwrap();
    assert_eq!(
        interpolation.transform,
        Some(TransformCall {
            name: "der".to_string(),
            context: Some(Selector::Literal("acc.other".to_string())),
        })
    );
    assert_eq!(interpolation.reference, Reference::Parameter("t".to_string()));
}

#[test]
fn transform_with_parameter_context() {
    let template = parse_template("{@count:$n card}").unwrap();
    let interpolation = template.interpolations().next().unwrap();
    assert_eq!(
        interpolation.transform.as_ref().and_then(|t| t.context.clone()),
        Some(Selector::Parameter("n".to_string()))
    );
}

#[test]
fn uppercase_initial_adds_cap() {
    let template = parse_template("{Card}").unwrap();
    let interpolation = template.interpolations().next().unwrap();
    assert_eq!(interpolation.transform.as_ref().map(|t| t.name.as_str()), Some("cap"));
    assert_eq!(interpolation.reference, Reference::Term("card".to_string()));
}

#[test]
fn call_with_simple_arguments() {
    let template = parse_template(r#"{subtype($s, 2, -1, "x, y", ally)}"#).unwrap();
    let interpolation = template.interpolations().next().unwrap();
    assert_eq!(
        interpolation.reference,
        Reference::Call {
            name: "subtype".to_string(),
            args: vec![
                Argument::Parameter("s".to_string()),
                Argument::Number(2),
                Argument::Number(-1),
                Argument::Text("x, y".to_string()),
                Argument::Term("ally".to_string()),
            ],
        }
    );
}

#[test]
fn quoted_argument_may_contain_closing_brace() {
    let template = parse_template(r#"{label("}")} done"#).unwrap();
    assert_eq!(template.segments.len(), 2);
}

#[test]
fn adjacent_literals_are_merged() {
    let template = parse_template("a {{b}} c }} d").unwrap();
    assert_eq!(template.segments, vec![literal("a {b} c } d")]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn nested_call_in_argument() {
    assert_snapshot!(error("{f(g($x))}").to_string(), @"illegal nested call to 'g' at 1:4");
}

#[test]
fn transformed_argument() {
    assert_snapshot!(
        error("{f(@cap $x)}").to_string(),
        @"illegal argument '@cap $x' at 1:4: arguments must be simple"
    );
}

#[test]
fn selected_argument() {
    assert!(matches!(
        error("{f($x:one)}"),
        ParseError::IllegalComplexArgument { argument, .. } if argument == "$x:one"
    ));
}

#[test]
fn second_transform() {
    assert_snapshot!(error("{@cap @a card}").to_string(), @"illegal nested call to '@a' at 1:7");
}

#[test]
fn transform_on_auto_capitalized_reference() {
    assert_snapshot!(error("{@a Card}").to_string(), @"illegal nested call to '@cap' at 1:5");
}

#[test]
fn inline_match_is_unknown_directive() {
    assert_snapshot!(error("{:match($n) x}").to_string(), @"unknown directive ':match' at 1:2");
}

#[test]
fn unterminated_interpolation() {
    assert_snapshot!(
        error("Draw {$n").to_string(),
        @"unterminated interpolation at 1:6: missing '}'"
    );
}

#[test]
fn stray_closing_brace() {
    assert_snapshot!(error("a } b").to_string(), @"syntax error at 1:3: unmatched '}'");
}

#[test]
fn empty_interpolation() {
    assert!(matches!(error("{}"), ParseError::Syntax { .. }));
}

#[test]
fn error_position_counts_lines() {
    assert_eq!(error("line one\n{bad").position(), Position { line: 2, column: 1 });
}
