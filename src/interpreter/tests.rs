/*
 * ==========================================================================
 * MONKEY - Pratt parser and tree-walking interpreter
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the MONKEY programming language project.
 *
 * MONKEY is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{BlockStatement, Statement};
use crate::parser::Parser;
use crate::value::{FALSE, NULL, TRUE};

fn eval_with(interpreter: &mut Interpreter, source: &str) -> Option<Value> {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parse errors for {:?}: {:?}",
        source,
        parser.errors()
    );
    interpreter.eval_program(&program)
}

fn eval(source: &str) -> Value {
    eval_with(&mut Interpreter::new(), source).unwrap_or(NULL)
}

fn assert_error(source: &str, expected: &str) {
    match eval(source) {
        Value::Error(message) => assert_eq!(message, expected, "source: {}", source),
        other => panic!("expected error for {:?}, got {:?}", source, other),
    }
}

#[test]
fn integer_expressions() {
    let cases = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("--5", 5),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "source: {}", source);
    }
}

#[test]
fn arithmetic_matches_native_integers() {
    let operands: [i64; 7] = [-17, -3, -1, 1, 2, 7, 1000];

    for a in operands {
        for b in operands {
            let cases = [
                ("+", a.wrapping_add(b)),
                ("-", a.wrapping_sub(b)),
                ("*", a.wrapping_mul(b)),
                ("/", a / b),
            ];
            for (op, expected) in cases {
                let source = format!("let a = {}; let b = {}; a {} b", a, b, op);
                assert_eq!(eval(&source), Value::Integer(expected), "source: {}", source);
            }
        }
    }
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval("7 / 2"), Value::Integer(3));
    assert_eq!(eval("-7 / 2"), Value::Integer(-3));
    assert_eq!(eval("7 / -2"), Value::Integer(-3));
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_eq!(
        eval("9223372036854775807 + 1"),
        Value::Integer(i64::MIN)
    );
    assert_eq!(
        eval("let min = -9223372036854775807 - 1; min / -1"),
        Value::Integer(i64::MIN)
    );
    assert_eq!(
        eval("let min = -9223372036854775807 - 1; -min"),
        Value::Integer(i64::MIN)
    );
}

#[test]
fn division_by_zero_is_an_error() {
    assert_error("1 / 0", "division by zero: 1 / 0");
    assert!(eval("let zero = 0; 10 / zero").is_error());
}

#[test]
fn boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 > 1", false),
        ("1 <= 1", true),
        ("2 <= 1", false),
        ("1 >= 1", true),
        ("1 >= 2", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("false != true", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
        ("(1 > 2) == false", true),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Boolean(expected), "source: {}", source);
    }
}

#[test]
fn booleans_are_the_shared_constants() {
    assert_eq!(eval("true"), TRUE);
    assert_eq!(eval("1 > 2"), FALSE);
}

#[test]
fn bang_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
        ("!fn() { 1 }", false),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Boolean(expected), "source: {}", source);
    }
}

#[test]
fn bang_of_null_is_true() {
    assert_eq!(eval("!if (false) { 1 }"), TRUE);
}

#[test]
fn if_else_expressions() {
    let cases = [
        ("if (true) { 10 }", Value::Integer(10)),
        ("if (false) { 10 }", NULL),
        ("if (1 < 2) { 10 }", Value::Integer(10)),
        ("if (1 > 2) { 10 }", NULL),
        ("if (1 > 2) { 10 } else { 20 }", Value::Integer(20)),
        ("if (1 < 2) { 10 } else { 20 }", Value::Integer(10)),
        ("if (true) { }", NULL),
        ("if (true) { let x = 1; }", NULL),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "source: {}", source);
    }
}

#[test]
fn non_boolean_condition_is_an_error() {
    assert_error("if (1) { 10 }", "non-boolean condition in if expression: INTEGER");
    assert_error(
        "if (if (false) { 1 }) { 10 }",
        "non-boolean condition in if expression: NULL",
    );
}

#[test]
fn return_statements() {
    let cases = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
        ("if (10 > 1) { return 10; }; 99", 10),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "source: {}", source);
    }
}

#[test]
fn bare_return_yields_null() {
    assert_eq!(eval("return; 5"), NULL);
}

#[test]
fn return_unwinds_out_of_an_operand() {
    assert_eq!(eval("1 + if (true) { return 5 }; 99"), Value::Integer(5));
}

#[test]
fn error_handling() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("true < false;", "unknown operator: BOOLEAN < BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        ("-(1 + foobar)", "identifier not found: foobar"),
        ("foobar + 1", "identifier not found: foobar"),
        ("1 + foobar", "identifier not found: foobar"),
        (
            "if (false) { 1 } == if (false) { 2 }",
            "unknown operator: NULL == NULL",
        ),
    ];

    for (source, expected) in cases {
        assert_error(source, expected);
    }
}

#[test]
fn let_statements() {
    let cases = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
        ("let x = 5; x + 1;", 6),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "source: {}", source);
    }
}

#[test]
fn let_produces_no_value() {
    assert_eq!(eval_with(&mut Interpreter::new(), "let a = 1;"), None);
    assert_eq!(eval_with(&mut Interpreter::new(), "1; let a = 1;"), None);
    assert_eq!(eval_with(&mut Interpreter::new(), ""), None);
}

#[test]
fn unbound_identifier_mentions_its_name() {
    match eval("let x = 1; y") {
        Value::Error(message) => assert!(message.contains("y")),
        other => panic!("expected error, got {:?}", other),
    }
}

#[test]
fn failed_let_does_not_bind() {
    let mut interpreter = Interpreter::new();
    let result = eval_with(&mut interpreter, "let a = 1; let b = a + true; let c = 3;");
    assert_eq!(result, Some(Value::error("type mismatch: INTEGER + BOOLEAN")));

    let root = interpreter.root();
    assert_eq!(interpreter.environments().get(root, "a"), Some(&Value::Integer(1)));
    assert_eq!(interpreter.environments().get(root, "b"), None);
    assert_eq!(interpreter.environments().get(root, "c"), None);
}

#[test]
fn blocks_share_the_enclosing_scope() {
    assert_eq!(
        eval("if (true) { let inner = 7; }; inner"),
        Value::Integer(7)
    );
}

#[test]
fn bindings_persist_across_programs() {
    let mut interpreter = Interpreter::new();
    eval_with(&mut interpreter, "let x = 40;");
    assert_eq!(eval_with(&mut interpreter, "x + 2"), Some(Value::Integer(42)));
}

#[test]
fn function_object() {
    match eval("fn(x) { x + 2; };") {
        Value::Function(func) => {
            let params: Vec<String> = func.parameters.iter().map(|p| p.to_string()).collect();
            assert_eq!(params, vec!["x"]);
            assert_eq!(func.body.to_string(), "{ (x + 2) }");
        }
        other => panic!("expected function, got {:?}", other),
    }

    assert_eq!(eval("fn(a, b) { a }").inspect(), "fn(a, b) { a }");
}

#[test]
fn function_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
        ("let add = fn(a, b) { a + b }; add(2, 3)", 5),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "source: {}", source);
    }
}

#[test]
fn closures_capture_their_defining_scope() {
    let source = "
        let new_adder = fn(x) { fn(y) { x + y } };
        let add_two = new_adder(2);
        add_two(3);
    ";
    assert_eq!(eval(source), Value::Integer(5));
    assert_eq!(eval("let mk = fn(x) { fn(y) { x + y } }; mk(2)(3)"), Value::Integer(5));
}

#[test]
fn return_stops_at_the_call_boundary() {
    let source = "
        let f = fn(x) { if (x > 0) { return 1; } return 0; };
        f(5) + f(-5) + 10
    ";
    assert_eq!(eval(source), Value::Integer(11));
}

#[test]
fn recursion() {
    let source = "
        let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) };
        fib(15)
    ";
    assert_eq!(eval(source), Value::Integer(610));
}

#[test]
fn parameters_do_not_leak_into_the_caller() {
    let mut interpreter = Interpreter::new();
    let result = eval_with(&mut interpreter, "let f = fn(secret) { secret }; f(1); secret");
    assert_eq!(result, Some(Value::error("identifier not found: secret")));
}

#[test]
fn parameters_shadow_outer_bindings() {
    assert_eq!(
        eval("let x = 1; let f = fn(x) { x * 10 }; f(5) + x"),
        Value::Integer(51)
    );
}

#[test]
fn function_without_value_returns_null() {
    assert_eq!(eval("let f = fn() { let a = 1; }; f()"), NULL);
    assert_eq!(eval("fn() { }()"), NULL);
}

#[test]
fn call_errors() {
    assert_error("let x = 1; x(2)", "not a function: INTEGER");
    assert_error("fn(a, b) { a }(1)", "wrong number of arguments: want=2, got=1");
    assert_error("let f = fn(a) { a }; f(missing)", "identifier not found: missing");
    assert_error("let f = fn() { 1 + true }; f() + 1", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn runaway_recursion_is_an_error() {
    let mut interpreter = Interpreter::new().with_max_call_depth(16);
    let result = eval_with(&mut interpreter, "let loop = fn(n) { loop(n + 1) }; loop(0)");
    assert_eq!(result, Some(Value::error("maximum call depth exceeded (16)")));

    // The depth counter unwinds with the error.
    assert_eq!(
        eval_with(&mut interpreter, "let id = fn(x) { x }; id(3)"),
        Some(Value::Integer(3))
    );
}

#[test]
fn explicit_block_statement() {
    let mut parser = Parser::from_source("let a = 2; a * 21");
    let program = parser.parse_program();
    let token = program.statements[0].token().clone();

    let block = Statement::Block(BlockStatement {
        token,
        statements: program.statements,
    });

    let mut interpreter = Interpreter::new();
    let root = interpreter.root();
    assert_eq!(interpreter.eval_statement(&block, root), Some(Value::Integer(42)));
    assert_eq!(
        interpreter.environments().get(root, "a"),
        Some(&Value::Integer(2))
    );
}

#[test]
fn inspect_strings() {
    assert_eq!(Value::Integer(-12).inspect(), "-12");
    assert_eq!(TRUE.inspect(), "true");
    assert_eq!(NULL.inspect(), "null");
    assert_eq!(Value::error("boom").inspect(), "boom");
    assert_eq!(Value::ReturnValue(Box::new(Value::Integer(1))).inspect(), "1");
}

#[test]
fn calls_release_their_scopes() {
    let mut interpreter = Interpreter::new();
    eval_with(
        &mut interpreter,
        "let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) };",
    );
    let before = interpreter.environments().len();

    assert_eq!(eval_with(&mut interpreter, "fib(15)"), Some(Value::Integer(610)));
    assert_eq!(interpreter.environments().len(), before);

    assert_eq!(eval_with(&mut interpreter, "fib(15)"), Some(Value::Integer(610)));
    assert_eq!(interpreter.environments().len(), before);
}

#[test]
fn failed_calls_release_their_scopes() {
    let mut interpreter = Interpreter::new().with_max_call_depth(16);
    let before = interpreter.environments().len();

    let result = eval_with(&mut interpreter, "let loop = fn(n) { loop(n + 1) }; loop(0)");
    assert_eq!(result, Some(Value::error("maximum call depth exceeded (16)")));
    assert_eq!(interpreter.environments().len(), before);
}

#[test]
fn returned_closures_keep_their_scope() {
    let mut interpreter = Interpreter::new();
    eval_with(&mut interpreter, "let mk = fn(x) { fn(y) { x + y } };");
    let before = interpreter.environments().len();

    eval_with(&mut interpreter, "let add_two = mk(2); let add_ten = mk(10);");
    assert_eq!(interpreter.environments().len(), before + 2);

    assert_eq!(
        eval_with(&mut interpreter, "add_two(3) + add_ten(3)"),
        Some(Value::Integer(18))
    );
    assert_eq!(interpreter.environments().len(), before + 2);
}

#[test]
fn closures_created_inside_a_call_are_released_with_it() {
    let mut interpreter = Interpreter::new();
    let before = interpreter.environments().len();

    let source = "
        let mk = fn(x) { fn(y) { x + y } };
        let apply = fn(n) { let inc = mk(1); let id = fn(v) { v }; inc(id(n)) };
        apply(41)
    ";
    assert_eq!(eval_with(&mut interpreter, source), Some(Value::Integer(42)));
    assert_eq!(interpreter.environments().len(), before);
}

#[test]
fn seeded_bindings_are_visible() {
    let mut interpreter = Interpreter::new();
    let root = interpreter.root();
    let scope = interpreter.environments_mut().enclosed(root);
    interpreter
        .environments_mut()
        .set(scope, "answer", Value::Integer(42));

    let program = crate::parser::parse("answer / 2").unwrap();
    assert_eq!(
        interpreter.eval_program_in(&program, scope),
        Some(Value::Integer(21))
    );
    assert_eq!(
        interpreter.eval_program(&program),
        Some(Value::error("identifier not found: answer"))
    );
}

#[test]
fn deeply_nested_expressions_evaluate() {
    let depth = 100_000;

    let negations = format!("{}7", "-".repeat(depth));
    assert_eq!(eval(&negations), Value::Integer(7));

    let sum = format!("0{}", " + 1".repeat(depth));
    assert_eq!(eval(&sum), Value::Integer(depth as i64));

    let nested = 20_000;
    let ifs = format!("{}5{}", "if (true) { ".repeat(nested), " }".repeat(nested));
    assert_eq!(eval(&ifs), Value::Integer(5));
}

#[test]
fn deeply_nested_function_body() {
    let depth = 50_000;
    let source = format!(
        "let f = fn(x) {{ {}x }}; f(3)",
        "-".repeat(depth)
    );
    assert_eq!(eval(&source), Value::Integer(3));
}
