use cutparse::cli::{CheckOptions, CheckResult, CliError, execute_check};
use cutparse::{Mode, Node, ParseError, ParseOptions, Presentation, decompile::decompile};
use serde_json::json;
use std::thread;

fn check(cut: &str, options: ParseOptions) -> Result<CheckResult, CliError> {
    execute_check(&CheckOptions {
        cut: cut.to_string(),
        options,
        ..Default::default()
    })
}

// ============================================================================
// Decompilation
// ============================================================================

#[test]
fn test_decompile_normalizes_spacing() {
    let tree = cutparse::parse("[a>1   and  b<=2]or   not c").unwrap();
    assert_eq!(decompile(&tree), "[a > 1 and b <= 2] or not c");
}

#[test]
fn test_decompile_literals() {
    let test_cases = vec![
        ("1.", "1.0"),
        (".5", "0.5"),
        ("1e4", "10000.0"),
        ("0x1F", "31"),
        ("True", "true"),
        ("infinity", "infinity"),
        ("nan", "nan"),
    ];

    for (input, expected) in test_cases {
        let tree = cutparse::parse(input).unwrap();
        assert_eq!(tree.to_string(), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_decompile_functions_and_signs() {
    let tree = cutparse::parse("f(x,-y,[z]) ** +2").unwrap();
    assert_eq!(tree.to_string(), "f(x, -y, [z]) ** +2");
}

#[test]
fn test_decompile_round_trip() {
    let cuts = [
        "",
        "a",
        "1 < 2 < 3",
        "[a and b] or not c",
        "not not [x != 1]",
        "2**3**2",
        "2^(3**2)",
        "-2**-1 + +a",
        "(a + b) * (c - d) / e",
        "a - (b - c)",
        "pi+:good > 0 and K_S0:all",
        "passesCut(M > 5 and [p < 3], 2 < E < 4) == true",
        "outer(inner(deep(x)), y) > z",
        "1.5e-7 <= x",
        "nTracks() >= 0x10",
    ];

    for cut in cuts {
        let tree = cutparse::parse(cut).unwrap();
        let text = tree.to_string();
        let reparsed = cutparse::parse(&text)
            .unwrap_or_else(|e| panic!("'{}' decompiled to '{}': {}", cut, text, e));
        assert_eq!(reparsed, tree, "Failed for cut: {}", cut);
    }
}

#[test]
fn test_decompile_expression_round_trip() {
    let tree = cutparse::parse_expression("sqrt(px^2 + py^2) / -E").unwrap();
    assert_eq!(cutparse::parse_expression(&tree.to_string()).unwrap(), tree);
}

// ============================================================================
// Check Command
// ============================================================================

#[test]
fn test_check_encodes_compact_by_default() {
    match check("1==1", ParseOptions::default()).unwrap() {
        CheckResult::Encoded(value) => assert_eq!(value, json!([3, [10, 1], [10, 1], 0])),
        other => panic!("Expected Encoded, got {:?}", other),
    }
}

#[test]
fn test_check_verbose() {
    let options = ParseOptions {
        presentation: Presentation::Verbose,
        ..Default::default()
    };
    match check("a", options).unwrap() {
        CheckResult::Encoded(value) => assert_eq!(
            value,
            json!(["UnaryRelationalNode", ["IdentifierNode", "a", true]])
        ),
        other => panic!("Expected Encoded, got {:?}", other),
    }
}

#[test]
fn test_check_expression_mode() {
    let options = ParseOptions {
        mode: Mode::Expression,
        ..Default::default()
    };
    match check("x * 2", options).unwrap() {
        CheckResult::Encoded(value) => {
            assert_eq!(value, json!([6, [8, "x", true], [10, 2], 2]))
        }
        other => panic!("Expected Encoded, got {:?}", other),
    }
    assert!(check("x > 2", options).is_err());
}

#[test]
fn test_check_syntax_only() {
    let result = execute_check(&CheckOptions {
        cut: "a > 1".to_string(),
        syntax_only: true,
        ..Default::default()
    })
    .unwrap();
    assert!(matches!(result, CheckResult::SyntaxValid));
}

#[test]
fn test_check_decompile() {
    let result = execute_check(&CheckOptions {
        cut: "a>1".to_string(),
        decompile: true,
        ..Default::default()
    })
    .unwrap();
    assert!(matches!(result, CheckResult::Decompiled(ref text) if text == "a > 1"));
}

#[test]
fn test_check_reports_parse_errors() {
    let err = check("[1==1)", ParseOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        CliError::Parse(ParseError::MismatchedClose {
            found: ')',
            expected: ']',
            ..
        })
    ));
    assert_eq!(err.to_string(), "Parse error: Illegal ')', expected ']'.");
}

// ============================================================================
// Independence of Parses
// ============================================================================

#[test]
fn test_parses_share_no_state() {
    // a failed parse must not leak grouping or scope state into the next one
    assert!(cutparse::parse("f(x").is_err());
    assert!(cutparse::parse("(").is_err());
    match cutparse::parse("y").unwrap() {
        Node::UnaryRelational { expr } => assert!(matches!(
            *expr,
            Node::Identifier {
                is_top_level: true,
                ..
            }
        )),
        other => panic!("Expected UnaryRelational, got {:?}", other),
    }
}

#[test]
fn test_concurrent_parses() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let cut = format!("f(g(x{i}), {i}) > {i} and [y{i} < 2 or z]");
                cutparse::parse(&cut).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let tree = handle.join().unwrap();
        let cut = format!("f(g(x{i}), {i}) > {i} and [y{i} < 2 or z]");
        let expected = cutparse::parse(&cut).unwrap();
        assert_eq!(tree, expected);
    }
}
