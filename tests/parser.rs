use culebra::{
    ast::{BinaryOperator, Node, NodeKind, Position, SuffixKind, UnaryOperator},
    error::ParseError,
    interpreter::parser::core::parse_program,
};
use pretty_assertions::assert_eq;

fn single(src: &str) -> Node {
    let program = parse_program(src).unwrap_or_else(|e| panic!("parse failed: {e}"));
    let NodeKind::Statements(mut statements) = program.kind else {
        panic!("program is not a statement list")
    };
    assert_eq!(statements.len(), 1, "expected one statement in {src:?}");
    statements.remove(0)
}

fn number(text: &str, line: usize, column: usize) -> Node {
    Node::new(NodeKind::Number(text.to_string()), Position::new(line, column))
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expected = Node::new(
        NodeKind::Binary { first: Box::new(number("2", 1, 1)),
                           rest:  vec![(BinaryOperator::Add,
                                        Node::new(NodeKind::Binary { first: Box::new(number("3", 1, 5)),
                                                                     rest:  vec![(BinaryOperator::Mul,
                                                                                  number("4", 1, 9))], },
                                                  Position::new(1, 5)))], },
        Position::new(1, 1),
    );

    assert_eq!(single("2 + 3 * 4"), expected);
}

#[test]
fn prefix_minus_covers_the_multiplicative_level() {
    let node = single("-2 * 3");
    let NodeKind::Unary { op, operand } = node.kind else { panic!("not unary: {node:?}") };
    assert_eq!(op, UnaryOperator::Minus);
    assert!(matches!(operand.kind, NodeKind::Binary { .. }));
}

#[test]
fn statements_carry_positions() {
    let program = parse_program("x = 1\n\n  y; z").unwrap();
    let NodeKind::Statements(statements) = program.kind else { panic!() };

    let positions: Vec<Position> = statements.iter().map(|s| s.position).collect();
    assert_eq!(positions,
               vec![Position::new(1, 1), Position::new(3, 3), Position::new(3, 6)]);
}

#[test]
fn assignments() {
    assert!(matches!(single("mut x = 1").kind,
                     NodeKind::Assignment { mutable: true,
                                            .. }));
    assert!(matches!(single("x = 1").kind,
                     NodeKind::Assignment { mutable: false,
                                            .. }));

    let node = single("a.b.c = 1");
    let NodeKind::PropertyAssignment { object, name, .. } = node.kind else {
        panic!("not a property assignment: {node:?}")
    };
    assert_eq!(name, "c");
    let NodeKind::Call { suffixes, .. } = object.kind else { panic!() };
    assert_eq!(suffixes.len(), 1);
    assert_eq!(suffixes[0].kind, SuffixKind::Property("b".to_string()));
}

#[test]
fn invalid_assignment_targets() {
    assert_eq!(parse_program("1 = 2"),
               Err(ParseError::InvalidAssignmentTarget { position: Position::new(1, 1) }));
    assert_eq!(parse_program("f() = 2"),
               Err(ParseError::InvalidAssignmentTarget { position: Position::new(1, 2) }));
}

#[test]
fn call_chain_suffixes() {
    let node = single("a.b(1, 2)[0]");
    let NodeKind::Call { callee, suffixes } = node.kind else { panic!() };
    assert_eq!(callee.kind, NodeKind::Identifier("a".to_string()));

    let kinds: Vec<&str> = suffixes.iter()
                                   .map(|s| match &s.kind {
                                       SuffixKind::Arguments(_) => "arguments",
                                       SuffixKind::Index(_) => "index",
                                       SuffixKind::Property(_) => "property",
                                   })
                                   .collect();
    assert_eq!(kinds, vec!["property", "arguments", "index"]);
}

#[test]
fn else_may_start_on_a_new_line() {
    let node = single("if a { 1 }\nelse if b { 2 }\nelse { 3 }");
    let NodeKind::If { branches, otherwise } = node.kind else { panic!() };
    assert_eq!(branches.len(), 2);
    assert!(otherwise.is_some());
}

#[test]
fn function_parameters() {
    let node = single("fn(a, mut b,) { a }");
    let NodeKind::Function { params, .. } = node.kind else { panic!() };
    let params: Vec<(&str, bool)> = params.iter().map(|p| (p.name.as_str(), p.mutable)).collect();
    assert_eq!(params, vec![("a", false), ("b", true)]);
}

#[test]
fn interpolated_strings_track_embedded_positions() {
    let node = single(r#""a ${x} b""#);
    let NodeKind::InterpolatedString(parts) = node.kind else { panic!() };

    assert_eq!(parts,
               vec![Node::new(NodeKind::Text("a ".to_string()), Position::new(1, 2)),
                    Node::new(NodeKind::Identifier("x".to_string()), Position::new(1, 6)),
                    Node::new(NodeKind::Text(" b".to_string()), Position::new(1, 8)),]);
}

#[test]
fn syntax_errors() {
    assert!(matches!(parse_program(r#""${1""#),
                     Err(ParseError::UnterminatedInterpolation { .. })));
    assert_eq!(parse_program("x = [1, 2"),
               Err(ParseError::UnexpectedEndOfInput { position: Position::new(1, 10) }));
    assert!(matches!(parse_program("x = 1 2"),
                     Err(ParseError::UnexpectedToken { position: Position { line:   1,
                                                                            column: 7, },
                                                       .. })));
}
