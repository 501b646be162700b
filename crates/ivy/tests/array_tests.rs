//! Behaviour of the built-in Array type, driven through whole programs

use ivy::ast::{BlockLiteral, Expression, InfixOp, PrefixOp, Program, Statement};
use ivy::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════

fn int(n: i64) -> Expression {
    Expression::int(n)
}

fn s(v: &str) -> Expression {
    Expression::string(v)
}

fn var(name: &str) -> Expression {
    Expression::ident(name)
}

fn arr(items: Vec<Expression>) -> Expression {
    Expression::array(items)
}

fn send(receiver: Expression, method: &str, args: Vec<Expression>) -> Expression {
    Expression::call(receiver, method, args)
}

fn send_block(receiver: Expression, method: &str, param: &str, body: Expression) -> Expression {
    Expression::call_with_block(
        receiver,
        method,
        vec![],
        BlockLiteral::new(&[param], vec![Statement::expr(body)]),
    )
}

fn idx(receiver: Expression, index: i64) -> Expression {
    Expression::index(receiver, int(index))
}

fn assign(name: &str, value: Expression) -> Statement {
    Statement::assign(name, value)
}

fn expr(e: Expression) -> Statement {
    Statement::expr(e)
}

fn add(l: Expression, r: Expression) -> Expression {
    Expression::infix(l, InfixOp::Add, r)
}

/// Run a program that must succeed and leave no call frames behind.
fn eval_ok(statements: Vec<Statement>) -> Value {
    let mut interp = Interpreter::new();
    let value = interp
        .run(&Program::new(statements))
        .expect("evaluation failed");
    assert_eq!(interp.call_depth(), 0);
    value
}

/// Run a program whose last top-level builtin call fails.
fn eval_err(statements: Vec<Statement>) -> (EvalError, Interpreter) {
    let mut interp = Interpreter::new();
    let err = interp
        .run(&Program::new(statements))
        .expect_err("expected an error");
    assert_eq!(interp.call_depth(), 1);
    (err, interp)
}

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::Integer).collect())
}

fn strs(values: &[&str]) -> Value {
    Value::array(values.iter().map(|v| Value::string(*v)).collect())
}

fn bools(values: &[bool]) -> Value {
    Value::array(values.iter().copied().map(Value::Bool).collect())
}

fn sample() -> Expression {
    arr(vec![int(1), s("a"), int(10), int(5)])
}

// ═══════════════════════════════════════════════════════════════════════
// Literals and Indexing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_array_literal() {
    let value = eval_ok(vec![expr(arr(vec![int(1), s("234"), Expression::boolean(true)]))]);
    assert_eq!(
        value,
        Value::array(vec![Value::Integer(1), Value::string("234"), Value::Bool(true)])
    );
}

#[test]
fn test_index_reads() {
    let cases = vec![
        (idx(arr(vec![]), 1), Value::Null),
        (idx(arr(vec![int(1), int(2), int(3)]), 100), Value::Null),
        (idx(arr(vec![int(1), int(2), int(10), int(5)]), 2), Value::Integer(10)),
        (idx(sample(), 1), Value::string("a")),
        (idx(arr(vec![int(1), s("a"), int(10), s("b")]), -2), Value::Integer(10)),
        (idx(arr(vec![int(1), s("a"), int(10), s("b")]), -5), Value::Null),
    ];

    for (i, (input, expected)) in cases.into_iter().enumerate() {
        assert_eq!(eval_ok(vec![expr(input)]), expected, "case {i}");
    }
}

#[test]
fn test_index_writes() {
    for index in [2, -2, -4] {
        let value = eval_ok(vec![
            assign("a", sample()),
            expr(Expression::index_assign(var("a"), int(index), idx(var("a"), 1))),
            expr(idx(var("a"), index)),
        ]);
        assert_eq!(value, Value::string("a"), "index {index}");
    }
}

#[test]
fn test_index_write_past_end() {
    let mut interp = Interpreter::new();
    let value = interp
        .run(&Program::new(vec![
            assign("a", arr(vec![])),
            expr(Expression::index_assign(var("a"), int(10), int(100))),
            expr(idx(var("a"), 10)),
        ]))
        .unwrap();
    assert_eq!(value, Value::Integer(100));

    let a = interp.global_scope().env.get("a").unwrap();
    let items = a.to_vec().unwrap();
    assert_eq!(items.len(), 11);
    assert!(items[..10].iter().all(Value::is_null));
}

#[test]
fn test_index_write_yields_value() {
    let value = eval_ok(vec![
        assign("a", arr(vec![])),
        expr(Expression::index_assign(var("a"), int(0), s("x"))),
    ]);
    assert_eq!(value, Value::string("x"));
}

#[test]
fn test_index_write_negative_out_of_range() {
    let (err, interp) = eval_err(vec![
        assign("a", arr(vec![int(1)])),
        expr(Expression::index_assign(var("a"), int(-2), int(9))),
    ]);
    assert_eq!(err.kind(), Some(ErrorKind::IndexOutOfRange));
    assert_eq!(interp.global_scope().env.get("a"), Some(ints(&[1])));
}

#[test]
fn test_index_arithmetic() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2), int(3), int(5), int(10)])),
        expr(Expression::index_assign(
            var("a"),
            int(0),
            add(
                add(idx(var("a"), 1), idx(var("a"), 2)),
                Expression::infix(idx(var("a"), 3), InfixOp::Mul, idx(var("a"), 4)),
            ),
        )),
        expr(idx(var("a"), 0)),
    ]);
    assert_eq!(value, Value::Integer(55));
}

#[test]
fn test_sparse_to_s() {
    let value = eval_ok(vec![
        assign("code", arr(vec![])),
        expr(Expression::index_assign(var("code"), int(100), s("Continue"))),
        expr(Expression::index_assign(var("code"), int(101), s("Switching Protocols"))),
        expr(Expression::index_assign(var("code"), int(102), s("Processing"))),
        expr(Expression::index_assign(var("code"), int(200), s("OK"))),
        expr(send(var("code"), "to_s", vec![])),
    ]);

    let mut parts = vec!["nil".to_string(); 201];
    parts[100] = r#""Continue""#.to_string();
    parts[101] = r#""Switching Protocols""#.to_string();
    parts[102] = r#""Processing""#.to_string();
    parts[200] = r#""OK""#.to_string();
    let expected = format!("[{}]", parts.join(", "));

    assert_eq!(value, Value::string(expected));
}

#[test]
fn test_index_type_error() {
    let (err, _) = eval_err(vec![expr(Expression::index(sample(), s("0")))]);
    assert_eq!(err.to_string(), "Expect index argument to be Integer. got=String");
}

// ═══════════════════════════════════════════════════════════════════════
// at
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_at() {
    let cases = vec![
        (send(arr(vec![]), "at", vec![int(1)]), Value::Null),
        (send(arr(vec![int(1), int(2), int(10), int(5)]), "at", vec![int(2)]), Value::Integer(10)),
        (send(sample(), "at", vec![int(1)]), Value::string("a")),
        (send(sample(), "at", vec![int(4)]), Value::Null),
        (send(sample(), "at", vec![int(-2)]), Value::Integer(10)),
        (send(sample(), "at", vec![int(-5)]), Value::Null),
    ];

    for (i, (input, expected)) in cases.into_iter().enumerate() {
        assert_eq!(eval_ok(vec![expr(input)]), expected, "case {i}");
    }
}

#[test]
fn test_at_arithmetic() {
    let at = |i| send(var("a"), "at", vec![int(i)]);
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2), int(3), int(5), int(10)])),
        expr(Expression::index_assign(
            var("a"),
            int(0),
            add(add(at(1), at(2)), Expression::infix(at(3), InfixOp::Mul, at(4))),
        )),
        expr(at(0)),
    ]);
    assert_eq!(value, Value::Integer(55));
}

// ═══════════════════════════════════════════════════════════════════════
// Mutating Methods
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_clear() {
    for items in [vec![int(1), int(2), int(3)], vec![]] {
        let value = eval_ok(vec![assign("a", arr(items)), expr(send(var("a"), "clear", vec![]))]);
        assert_eq!(value, ints(&[]));
    }
}

#[test]
fn test_concat() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2)])),
        expr(send(var("a"), "concat", vec![arr(vec![int(3)]), arr(vec![int(4)])])),
    ]);
    assert_eq!(value, ints(&[1, 2, 3, 4]));

    let value = eval_ok(vec![
        assign("a", arr(vec![])),
        expr(send(
            var("a"),
            "concat",
            vec![
                arr(vec![int(1)]),
                arr(vec![int(2)]),
                arr(vec![s("a"), s("b")]),
                arr(vec![int(3)]),
                arr(vec![int(4)]),
            ],
        )),
    ]);
    assert_eq!(
        value,
        Value::array(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::string("a"),
            Value::string("b"),
            Value::Integer(3),
            Value::Integer(4),
        ])
    );

    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2)])),
        expr(send(var("a"), "concat", vec![])),
    ]);
    assert_eq!(value, ints(&[1, 2]));
}

#[test]
fn test_concat_mutates_receiver() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1)])),
        expr(send(var("a"), "concat", vec![arr(vec![int(2)])])),
        expr(var("a")),
    ]);
    assert_eq!(value, ints(&[1, 2]));
}

#[test]
fn test_concat_fail() {
    let (err, _) = eval_err(vec![
        assign("a", arr(vec![int(1), int(2)])),
        expr(send(var("a"), "concat", vec![int(3)])),
    ]);
    assert_eq!(err.to_string(), "Expect argument to be Array. got=Integer");

    let (err, _) = eval_err(vec![
        assign("a", arr(vec![])),
        expr(send(var("a"), "concat", vec![s("a")])),
    ]);
    assert_eq!(err.to_string(), "Expect argument to be Array. got=String");
}

#[test]
fn test_pop() {
    let value = eval_ok(vec![
        assign("a", send(arr(vec![int(1), int(2), int(3)]), "pop", vec![])),
        expr(var("a")),
    ]);
    assert_eq!(value, Value::Integer(3));

    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2), int(3)])),
        expr(send(var("a"), "pop", vec![])),
        expr(send(var("a"), "length", vec![])),
    ]);
    assert_eq!(value, Value::Integer(2));

    assert_eq!(eval_ok(vec![expr(send(arr(vec![]), "pop", vec![]))]), Value::Null);
}

#[test]
fn test_push() {
    let pushed = |arg: Expression, read: Expression| {
        eval_ok(vec![
            assign("a", arr(vec![int(1), int(2), int(3)])),
            expr(send(var("a"), "push", vec![arg])),
            expr(read),
        ])
    };

    assert_eq!(pushed(s("test"), idx(var("a"), 3)), Value::string("test"));
    assert_eq!(pushed(s("test"), send(var("a"), "length", vec![])), Value::Integer(4));
    assert_eq!(pushed(Expression::nil(), idx(var("a"), 3)), Value::Null);

    let value = eval_ok(vec![
        assign("a", arr(vec![])),
        expr(send(var("a"), "push", vec![s("foo")])),
        expr(send(var("a"), "push", vec![int(1)])),
        expr(send(var("a"), "push", vec![int(234)])),
        expr(idx(var("a"), 0)),
    ]);
    assert_eq!(value, Value::string("foo"));
}

#[test]
fn test_push_many_returns_receiver() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1)])),
        expr(send(var("a"), "push", vec![int(2), int(3)])),
    ]);
    assert_eq!(value, ints(&[1, 2, 3]));
}

#[test]
fn test_shift() {
    let value = eval_ok(vec![
        assign("a", send(arr(vec![int(1), int(2), int(3)]), "shift", vec![])),
        expr(var("a")),
    ]);
    assert_eq!(value, Value::Integer(1));

    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2), int(3)])),
        expr(send(var("a"), "shift", vec![])),
        expr(var("a")),
    ]);
    assert_eq!(value, ints(&[2, 3]));

    assert_eq!(eval_ok(vec![expr(send(arr(vec![]), "shift", vec![]))]), Value::Null);
}

#[test]
fn test_shift_fail() {
    let (err, interp) = eval_err(vec![
        assign("a", arr(vec![int(1), int(2)])),
        expr(send(var("a"), "shift", vec![int(3), int(3), int(4), int(5)])),
    ]);
    assert_eq!(err.kind(), Some(ErrorKind::WrongArgumentCount));
    assert_eq!(err.to_string(), "Expect 0 argument. got=4");
    assert_eq!(interp.global_scope().env.get("a"), Some(ints(&[1, 2])));
}

// ═══════════════════════════════════════════════════════════════════════
// Size and Selection
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_length() {
    let cases = vec![
        (arr(vec![int(1), int(2), int(3)]), 3),
        (arr(vec![Expression::nil()]), 1),
        (arr(vec![]), 0),
        (
            arr(vec![
                int(-10),
                s("123"),
                arr(vec![int(1), int(2), int(3)]),
                int(1),
                int(2),
                int(3),
            ]),
            6,
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(
            eval_ok(vec![expr(send(input, "length", vec![]))]),
            Value::Integer(expected)
        );
    }
}

#[test]
fn test_count() {
    let count = |items: Vec<Expression>, args: Vec<Expression>| {
        eval_ok(vec![assign("a", arr(items)), expr(send(var("a"), "count", args))])
    };

    assert_eq!(count(vec![int(1), int(2)], vec![]), Value::Integer(2));
    assert_eq!(count(vec![int(1), int(2)], vec![int(1)]), Value::Integer(1));
    assert_eq!(
        count(
            vec![s("a"), s("bb"), s("c"), s("db"), s("bb"), int(2)],
            vec![s("bb")]
        ),
        Value::Integer(2)
    );
    let t = || Expression::boolean(true);
    assert_eq!(
        count(
            vec![t(), t(), t(), Expression::boolean(false), t()],
            vec![t()]
        ),
        Value::Integer(4)
    );
    assert_eq!(count(vec![], vec![t()]), Value::Integer(0));
}

#[test]
fn test_count_with_block() {
    let value = eval_ok(vec![
        assign("a", arr((1..=8).map(int).collect())),
        expr(send_block(
            var("a"),
            "count",
            "i",
            Expression::infix(var("i"), InfixOp::Gt, int(3)),
        )),
    ]);
    assert_eq!(value, Value::Integer(5));
}

#[test]
fn test_count_fail() {
    let (err, _) = eval_err(vec![
        assign("a", arr(vec![int(1), int(2)])),
        expr(send(var("a"), "count", vec![int(3), int(3)])),
    ]);
    assert_eq!(err.kind(), Some(ErrorKind::WrongArgumentCount));
    assert_eq!(err.to_string(), "Expect one argument. got=2");
}

#[test]
fn test_first() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2)])),
        expr(send(var("a"), "first", vec![])),
    ]);
    assert_eq!(value, Value::Integer(1));

    let value = eval_ok(vec![
        assign("a", arr(vec![int(3), int(4), int(5), int(1), int(6)])),
        expr(send(var("a"), "first", vec![int(2)])),
    ]);
    assert_eq!(value, ints(&[3, 4]));

    let value = eval_ok(vec![
        assign("a", arr(vec![s("a"), s("b"), s("d"), s("q")])),
        expr(send(var("a"), "first", vec![int(2)])),
    ]);
    assert_eq!(value, strs(&["a", "b"]));
}

#[test]
fn test_last() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(3), int(4), int(5), int(1), int(6)])),
        expr(send(var("a"), "last", vec![int(3)])),
    ]);
    assert_eq!(value, ints(&[5, 1, 6]));

    let value = eval_ok(vec![
        assign("a", arr(vec![s("a"), s("b"), s("d"), s("q")])),
        expr(send(var("a"), "last", vec![int(2)])),
    ]);
    assert_eq!(value, strs(&["d", "q"]));
}

#[test]
fn test_first_and_last_fail() {
    for (method, arg) in [("first", "a"), ("last", "l")] {
        let (err, _) = eval_err(vec![
            assign("a", arr(vec![int(1), int(2)])),
            expr(send(var("a"), method, vec![s(arg)])),
        ]);
        assert_eq!(
            err.to_string(),
            "Expect index argument to be Integer. got=String",
            "{method}"
        );
    }
}

#[test]
fn test_rotate() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2)])),
        expr(send(var("a"), "rotate", vec![])),
    ]);
    assert_eq!(value, ints(&[2, 1]));

    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2), int(3), int(4)])),
        expr(send(var("a"), "rotate", vec![int(2)])),
    ]);
    assert_eq!(value, ints(&[3, 4, 1, 2]));
}

#[test]
fn test_rotate_fail() {
    let (err, _) = eval_err(vec![
        assign("a", arr(vec![int(1), int(2)])),
        expr(send(var("a"), "rotate", vec![s("a")])),
    ]);
    assert_eq!(err.to_string(), "Expect index argument to be Integer. got=String");
}

// ═══════════════════════════════════════════════════════════════════════
// Self-containing Arrays
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_array_containing_itself() {
    // a = [1]; a.push(a)
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1)])),
        expr(send(var("a"), "push", vec![var("a")])),
        expr(arr(vec![
            send(var("a"), "to_s", vec![]),
            send(var("a"), "inspect", vec![]),
            send(var("a"), "length", vec![]),
            send(var("a"), "count", vec![var("a")]),
            send(arr(vec![var("a")]), "to_s", vec![]),
        ])),
    ]);
    assert_eq!(
        value,
        Value::array(vec![
            Value::string("[1, [...]]"),
            Value::string("[1, [...]]"),
            Value::Integer(2),
            Value::Integer(1),
            Value::string("[[1, [...]]]"),
        ])
    );
}

#[test]
fn test_self_containing_arrays_equal() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1)])),
        expr(send(var("a"), "push", vec![var("a")])),
        assign("b", arr(vec![int(1)])),
        expr(send(var("b"), "push", vec![var("b")])),
        assign("c", arr(vec![int(2)])),
        expr(send(var("c"), "push", vec![var("c")])),
        expr(arr(vec![
            Expression::infix(var("a"), InfixOp::Eq, var("b")),
            Expression::infix(var("a"), InfixOp::Eq, var("c")),
            Expression::infix(var("a"), InfixOp::NotEq, var("c")),
        ])),
    ]);
    assert_eq!(value, bools(&[true, false, true]));
}

// ═══════════════════════════════════════════════════════════════════════
// Block Methods
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_each() {
    let value = eval_ok(vec![expr(send_block(
        arr((1..=5).map(int).collect()),
        "each",
        "i",
        var("i"),
    ))]);
    // Yields the last block value.
    assert_eq!(value, Value::Integer(5));

    let value = eval_ok(vec![
        assign("sum", int(0)),
        Statement::expr(Expression::call_with_block(
            arr((1..=5).map(int).collect()),
            "each",
            vec![],
            BlockLiteral::new(&["i"], vec![assign("sum", add(var("sum"), var("i")))]),
        )),
        expr(var("sum")),
    ]);
    assert_eq!(value, Value::Integer(15));
}

#[test]
fn test_each_on_empty_is_nil() {
    let value = eval_ok(vec![expr(send_block(arr(vec![]), "each", "i", var("i")))]);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_each_index() {
    let value = eval_ok(vec![
        assign("sum", int(0)),
        Statement::expr(Expression::call_with_block(
            arr(vec![int(2), int(3), int(40), int(5), int(22)]),
            "each_index",
            vec![],
            BlockLiteral::new(&["i"], vec![assign("sum", add(var("sum"), var("i")))]),
        )),
        expr(var("sum")),
    ]);
    assert_eq!(value, Value::Integer(10));
}

#[test]
fn test_map() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2), int(7)])),
        expr(send_block(var("a"), "map", "i", add(var("i"), int(3)))),
    ]);
    assert_eq!(value, ints(&[4, 5, 10]));

    let t = Expression::boolean(true);
    let f = Expression::boolean(false);
    let value = eval_ok(vec![
        assign("a", arr(vec![t.clone(), f.clone(), t.clone(), f, t])),
        expr(send_block(
            var("a"),
            "map",
            "i",
            Expression::prefix(PrefixOp::Not, var("i")),
        )),
    ]);
    assert_eq!(value, bools(&[false, true, false, true, false]));

    let value = eval_ok(vec![
        assign("a", arr(vec![s("1"), s("sss"), s("qwe")])),
        expr(send_block(var("a"), "map", "i", add(var("i"), s("1")))),
    ]);
    assert_eq!(value, strs(&["11", "sss1", "qwe1"]));
}

#[test]
fn test_select() {
    let value = eval_ok(vec![
        assign("a", arr((1..=5).map(int).collect())),
        expr(send_block(
            var("a"),
            "select",
            "i",
            Expression::infix(var("i"), InfixOp::Gt, int(3)),
        )),
    ]);
    assert_eq!(value, ints(&[4, 5]));

    let t = Expression::boolean(true);
    let f = Expression::boolean(false);
    let value = eval_ok(vec![
        assign("a", arr(vec![t.clone(), f.clone(), t.clone(), f, t])),
        expr(send_block(var("a"), "select", "i", var("i"))),
    ]);
    assert_eq!(value, bools(&[true, true, true]));

    let value = eval_ok(vec![
        assign("a", arr(vec![s("test"), s("not2"), s("3"), s("test"), s("5")])),
        expr(send_block(
            var("a"),
            "select",
            "i",
            Expression::infix(var("i"), InfixOp::Eq, s("test")),
        )),
    ]);
    assert_eq!(value, strs(&["test", "test"]));
}

#[test]
fn test_block_may_mutate_array() {
    let value = eval_ok(vec![
        assign("a", arr(vec![int(1), int(2), int(3)])),
        Statement::expr(Expression::call_with_block(
            var("a"),
            "each",
            vec![],
            BlockLiteral::new(
                &["i"],
                vec![expr(Expression::if_else(
                    Expression::infix(var("i"), InfixOp::Eq, int(1)),
                    vec![expr(send(var("a"), "pop", vec![]))],
                    None,
                ))],
            ),
        )),
        expr(var("a")),
    ]);
    assert_eq!(value, ints(&[1, 2]));
}

#[test]
fn test_block_error_propagates() {
    let mut interp = Interpreter::new();
    let err = interp
        .run(&Program::new(vec![expr(send_block(
            arr(vec![int(1), s("x")]),
            "map",
            "i",
            add(var("i"), int(1)),
        ))]))
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UnsupportedOperator));
    assert_eq!(interp.backtrace(), &[CallFrame::new("map", "Array")]);
}

#[test]
fn test_array_class() {
    let value = eval_ok(vec![expr(send(arr(vec![]), "class", vec![]))]);
    assert_eq!(value.inspect(), "Array");

    let value = eval_ok(vec![expr(send(Expression::constant("Array"), "new", vec![]))]);
    assert_eq!(value, ints(&[]));
}

#[test]
fn test_undefined_array_method() {
    let mut interp = Interpreter::new();
    let err = interp
        .run(&Program::new(vec![expr(send(arr(vec![]), "nope", vec![]))]))
        .unwrap_err();
    assert_eq!(err.to_string(), "undefined method `nope` for class `Array`");
    // Resolution failed, so no frame was pushed.
    assert_eq!(interp.call_depth(), 0);
}
