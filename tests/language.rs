//! End-to-end checks through the public API: source text in, values,
//! diagnostics, JSON and REPL transcripts out.

use monkey::diagnostics::DiagnosticPrinter;
use monkey::interpreter::Interpreter;
use monkey::lexer::{tokenize, TokenKind};
use monkey::parser::{parse, Parser};
use monkey::repl::Repl;
use monkey::value::Value;
use pretty_assertions::assert_eq;

fn run(source: &str) -> Option<Value> {
    let program = parse(source).unwrap_or_else(|errors| panic!("parse errors: {:?}", errors));
    Interpreter::new().eval_program(&program)
}

#[test]
fn counter_program() {
    let source = "
        let max = fn(a, b) { if (a > b) { a } else { b } };
        let clamp = fn(x, lo, hi) { max(lo, if (x > hi) { hi } else { x }) };
        clamp(15, 0, 10) + clamp(-3, 0, 10) + clamp(4, 0, 10)
    ";
    assert_eq!(run(source), Some(Value::Integer(14)));
}

#[test]
fn higher_order_functions() {
    let source = "
        let twice = fn(f, x) { f(f(x)) };
        let add = fn(n) { fn(x) { x + n } };
        twice(add(3), 10)
    ";
    assert_eq!(run(source), Some(Value::Integer(16)));
}

#[test]
fn recursive_factorial() {
    let source = "
        let fact = fn(n) { if (n <= 1) { return 1; } n * fact(n - 1) };
        fact(10)
    ";
    assert_eq!(run(source), Some(Value::Integer(3628800)));
}

#[test]
fn errors_stop_the_program() {
    let source = "let a = 1; let b = a + true; a";
    assert_eq!(
        run(source),
        Some(Value::Error("type mismatch: INTEGER + BOOLEAN".into()))
    );
}

#[test]
fn trailing_let_yields_nothing() {
    assert_eq!(run("let a = 1; let b = a;"), None);
}

#[test]
fn tokens_end_with_a_single_eof() {
    let tokens = tokenize("let five = 5;");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn parse_reports_every_error() {
    let errors = parse("let = 1; 5 +; )").unwrap_err();
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(messages[0], "expected next token to be IDENT, got = instead");
    assert!(messages.contains(&"no prefix parse function for ; found".to_string()));
    assert!(messages.contains(&"no prefix parse function for ) found".to_string()));
}

#[test]
fn diagnostics_point_at_the_error() {
    let source = "let a = 1;\nlet b 2;";
    let errors = parse(source).unwrap_err();

    let mut out = Vec::new();
    DiagnosticPrinter::new("main.monkey", source)
        .write_all(&mut out, &errors)
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "error[E_EXPECTED_TOKEN]: expected next token to be =, got INT instead\n\
         \x20 --> main.monkey:2:7\n\
         \x20  |\n\
         \x20 2 | let b 2;\n\
         \x20  |       ^\n"
    );
}

#[test]
fn ast_json_is_tagged_by_node_type() {
    let program = parse("let x = -1 + y;").unwrap();
    let json: serde_json::Value = serde_json::from_str(&program.to_json().unwrap()).unwrap();

    let stmt = &json["statements"][0];
    assert_eq!(stmt["type"], "Let");
    assert_eq!(stmt["name"]["value"], "x");
    assert_eq!(stmt["value"]["type"], "Infix");
    assert_eq!(stmt["value"]["operator"], "+");
    assert_eq!(stmt["value"]["left"]["type"], "Prefix");
    assert_eq!(stmt["value"]["right"]["type"], "Identifier");
}

#[test]
fn rendering_survives_a_round_trip() {
    let source = "let f = fn(x, y) { if (x < y) { return x; } else { y } }; f(1, 2 * 3)";
    let mut parser = Parser::from_source(source);
    let first = parser.parse_program();
    assert!(!parser.has_errors());

    let rendered = first.to_string();
    assert_eq!(
        rendered,
        "let f = fn(x, y) { if ((x < y)) { return x } else { y } }; f(1, (2 * 3))"
    );
    assert_eq!(parse(&rendered).unwrap().to_string(), rendered);
}

#[test]
fn repl_session_transcript() {
    let input = "let inc = fn(x) { x + 1 };\ninc(41)\nlet 5\nmissing\n";
    let mut repl = Repl::new(">> ", Interpreter::new());
    let mut out = Vec::new();
    repl.run(input.as_bytes(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Hello! This is the Monkey programming language!\n\
         >> >> 42\n\
         >> Woops! We ran into some monkey business here!\n\
         \texpected next token to be IDENT, got INT instead\n\
         >> identifier not found: missing\n\
         >> \n"
    );
}

#[test]
fn deeply_nested_source_runs() {
    let depth = 200_000;
    let source = format!("{}1", "-".repeat(depth));
    assert_eq!(run(&source), Some(Value::Integer(1)));
}

#[test]
fn repeated_calls_do_not_grow_the_session() {
    let mut repl = Repl::new("", Interpreter::new());
    let mut out = Vec::new();
    repl.eval_line("let sum = fn(n) { if (n == 0) { 0 } else { n + sum(n - 1) } };", &mut out)
        .unwrap();

    let scopes = repl.interpreter().environments().len();
    for _ in 0..50 {
        repl.eval_line("sum(100)", &mut out).unwrap();
    }
    assert_eq!(repl.interpreter().environments().len(), scopes);
    assert!(String::from_utf8(out).unwrap().ends_with("5050\n"));
}
