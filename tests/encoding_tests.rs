// tests/encoding_tests.rs

use cutparse::ast::{ArithmeticOperator, BooleanOperator, ComparisonOperator, Node, NodeKind};
use cutparse::encoding::{Encoder, Presentation, to_json, to_json_pretty};
use serde_json::json;

fn compact(cut: &str) -> serde_json::Value {
    Encoder::new(Presentation::Compact).encode(&cutparse::parse(cut).unwrap())
}

fn verbose(cut: &str) -> serde_json::Value {
    Encoder::new(Presentation::Verbose).encode(&cutparse::parse(cut).unwrap())
}

// ============================================================================
// Code Tables
// ============================================================================

#[test]
fn test_node_kind_codes() {
    let table = [
        (NodeKind::UnaryBoolean, 0),
        (NodeKind::BinaryBoolean, 1),
        (NodeKind::UnaryRelational, 2),
        (NodeKind::BinaryRelational, 3),
        (NodeKind::TernaryRelational, 4),
        (NodeKind::UnaryExpression, 5),
        (NodeKind::BinaryExpression, 6),
        (NodeKind::Function, 7),
        (NodeKind::Identifier, 8),
        (NodeKind::DoubleLiteral, 9),
        (NodeKind::IntegerLiteral, 10),
        (NodeKind::BooleanLiteral, 11),
    ];

    for (kind, code) in table {
        assert_eq!(kind.code(), code, "Failed for {:?}", kind);
    }
}

#[test]
fn test_boolean_operator_codes() {
    assert_eq!(BooleanOperator::And.code(), 0);
    assert_eq!(BooleanOperator::Or.code(), 1);
}

#[test]
fn test_comparison_operator_codes() {
    // fixed order, not alphabetical
    let table = [
        (ComparisonOperator::Equal, "==", 0),
        (ComparisonOperator::GreaterEqual, ">=", 1),
        (ComparisonOperator::LessEqual, "<=", 2),
        (ComparisonOperator::GreaterThan, ">", 3),
        (ComparisonOperator::LessThan, "<", 4),
        (ComparisonOperator::NotEqual, "!=", 5),
    ];

    for (op, symbol, code) in table {
        assert_eq!(op.code(), code, "Failed for {}", symbol);
        assert_eq!(op.symbol(), symbol);
    }
}

#[test]
fn test_arithmetic_operator_codes() {
    let table = [
        (ArithmeticOperator::Add, "+", 0),
        (ArithmeticOperator::Subtract, "-", 1),
        (ArithmeticOperator::Multiply, "*", 2),
        (ArithmeticOperator::Divide, "/", 3),
        (ArithmeticOperator::Power, "**", 4),
        (ArithmeticOperator::Caret, "^", 4),
    ];

    for (op, symbol, code) in table {
        assert_eq!(op.code(), code, "Failed for {}", symbol);
        assert_eq!(op.symbol(), symbol);
    }
}

// ============================================================================
// Compact Encoding
// ============================================================================

#[test]
fn test_encode_empty_cut() {
    assert_eq!(compact(""), json!([2, [11, true]]));
}

#[test]
fn test_encode_binary_relational() {
    assert_eq!(compact("1==1"), json!([3, [10, 1], [10, 1], 0]));
}

#[test]
fn test_encode_ternary_relational() {
    assert_eq!(
        compact("1 < 2 <= 3"),
        json!([4, [10, 1], [10, 2], [10, 3], 4, 2])
    );
}

#[test]
fn test_encode_boolean_nodes() {
    assert_eq!(
        compact("not [a or b]"),
        json!([
            0,
            [
                0,
                [1, [2, [8, "a", true]], [2, [8, "b", true]], 1],
                false,
                true
            ],
            true,
            false
        ])
    );
}

#[test]
fn test_encode_arithmetic_nodes() {
    assert_eq!(
        compact("-(x) ^ 2.5"),
        json!([
            2,
            [
                5,
                [6, [5, [8, "x", true], false, true], [9, 2.5], 4],
                true,
                false
            ]
        ])
    );
}

#[test]
fn test_encode_function() {
    assert_eq!(
        compact("foo(bar, 1)"),
        json!([2, [7, "foo", 2, [[2, [8, "bar", false]], [2, [10, 1]]], true]])
    );
    assert_eq!(compact("nTracks()"), json!([2, [7, "nTracks", 0, [], true]]));
}

#[test]
fn test_encode_non_finite_doubles() {
    assert_eq!(compact("nan"), json!([2, [9, "nan"]]));
    assert_eq!(compact("inf"), json!([2, [9, "inf"]]));

    let negative = Node::DoubleLiteral(f64::NEG_INFINITY);
    assert_eq!(
        Encoder::new(Presentation::Compact).encode(&negative),
        json!([9, "-inf"])
    );
}

#[test]
fn test_power_spellings_share_a_code() {
    assert_eq!(compact("a ** 2"), compact("a ^ 2"));
}

// ============================================================================
// Verbose Encoding
// ============================================================================

#[test]
fn test_verbose_binary_relational() {
    assert_eq!(
        verbose("1==1"),
        json!([
            "BinaryRelationalNode",
            ["IntegerNode", 1],
            ["IntegerNode", 1],
            "=="
        ])
    );
}

#[test]
fn test_verbose_keeps_power_spelling() {
    assert_eq!(
        verbose("a ^ 2"),
        json!([
            "UnaryRelationalNode",
            [
                "BinaryExpressionNode",
                ["IdentifierNode", "a", true],
                ["IntegerNode", 2],
                "^"
            ]
        ])
    );
    assert_eq!(verbose("a ** 2")[1][3], json!("**"));
}

#[test]
fn test_verbose_names_every_kind() {
    let value = verbose("not [f(x, 1.5) + -y > 2 and true] or z < 1 < 2");
    let text = value.to_string();
    for name in [
        "UnaryBooleanNode",
        "BinaryBooleanNode",
        "UnaryRelationalNode",
        "BinaryRelationalNode",
        "TernaryRelationalNode",
        "UnaryExpressionNode",
        "BinaryExpressionNode",
        "FunctionNode",
        "IdentifierNode",
        "DoubleNode",
        "IntegerNode",
        "BooleanNode",
    ] {
        assert!(text.contains(name), "Missing {} in {}", name, text);
    }
}

/// Replaces every string with a placeholder and every number with 0.
fn shape(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(shape).collect())
        }
        serde_json::Value::String(_) | serde_json::Value::Number(_) => json!(0),
        other => other.clone(),
    }
}

#[test]
fn test_presentation_never_changes_shape() {
    let cuts = [
        "",
        "a",
        "[a and b] or not c",
        "1 < x <= 2",
        "f(g(x), [y], -z ** 2) != 0x10",
        "(a + b) * c / d - 1.5e3",
    ];

    for cut in cuts {
        assert_eq!(
            shape(&compact(cut)),
            shape(&verbose(cut)),
            "Failed for cut: {}",
            cut
        );
    }
}

// ============================================================================
// Text Output
// ============================================================================

#[test]
fn test_to_json() {
    let tree = cutparse::parse("a and b").unwrap();
    assert_eq!(
        to_json(&tree, Presentation::Compact),
        r#"[1,[2,[8,"a",true]],[2,[8,"b",true]],0]"#
    );
    assert_eq!(
        to_json(&tree, Presentation::Verbose),
        r#"["BinaryBooleanNode",["UnaryRelationalNode",["IdentifierNode","a",true]],["UnaryRelationalNode",["IdentifierNode","b",true]],"and"]"#
    );
}

#[test]
fn test_to_json_pretty() {
    let tree = cutparse::parse("1").unwrap();
    assert_eq!(
        to_json_pretty(&tree, Presentation::Compact),
        "[\n  2,\n  [\n    10,\n    1\n  ]\n]"
    );
}
