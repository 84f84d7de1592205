use std::{cell::RefCell, fs, io, rc::Rc};

use culebra::{
    ast::Position,
    error::{Error, RuntimeError},
    evaluate_program,
    interpreter::{environment::Environment, prelude, value::core::Value},
};
use pretty_assertions::assert_eq;

fn run(src: &str) -> Result<Value, Error> {
    let env = Environment::new();
    prelude::install_with_output(&env, Rc::new(RefCell::new(io::sink())));
    evaluate_program("<test>", &env, src)
}

fn eval(src: &str) -> Value {
    run(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_success_in(env: &Rc<Environment>, src: &str) {
    if let Err(e) = evaluate_program("<test>", env, src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(eval("2 + 3 * 4"), Value::Integer(14));
    assert_eq!(eval("(2 + 3) * 4"), Value::Integer(20));
    assert_eq!(eval("10 - 4 - 3"), Value::Integer(3));
    assert_eq!(eval("-2 * 3 + 10"), Value::Integer(4));
    assert_eq!(eval("7 / 2"), Value::Integer(3));
    assert_eq!(eval("-7 % 3"), Value::Integer(-1));
}

#[test]
fn while_with_false_condition_is_undefined() {
    assert_eq!(eval("mut i = 0\nwhile i < 0 { i = i + 1 }"), Value::Null);
    assert_eq!(eval("mut i = 0\nwhile i < 5 { i = i + 1 }\ni"), Value::Integer(5));
}

#[test]
fn if_chains() {
    let classify = "classify = fn(n) {
                        if n < 0 { 'negative' }
                        else if n == 0 { 'zero' }
                        else { 'positive' }
                    }\n";

    assert_eq!(eval(&format!("{classify}classify(-3)")), Value::from("negative"));
    assert_eq!(eval(&format!("{classify}classify(0)")), Value::from("zero"));
    assert_eq!(eval(&format!("{classify}classify(8)")), Value::from("positive"));
    assert_eq!(eval("if false { 1 }"), Value::Null);
}

#[test]
fn only_false_and_undefined_are_falsy() {
    assert_eq!(eval("if 0 { 'yes' } else { 'no' }"), Value::from("yes"));
    assert_eq!(eval("if '' { 'yes' } else { 'no' }"), Value::from("yes"));
    assert_eq!(eval("if [] { 'yes' } else { 'no' }"), Value::from("yes"));
    assert_eq!(eval("if undefined { 'yes' } else { 'no' }"), Value::from("no"));
    assert_eq!(eval("!undefined"), Value::Bool(true));
    assert_eq!(eval("!0"), Value::Bool(false));
}

#[test]
fn function_calls_and_arity() {
    assert_eq!(eval("f = fn(x) { x + 1 }\nf(5)"), Value::Integer(6));
    assert_eq!(eval("add = fn(a, b) { a + b }\nadd(2, 5)"), Value::Integer(7));

    assert!(matches!(runtime_error("f = fn(x) { x + 1 }\nf()"),
                     RuntimeError::ArityError { expected: 1,
                                                found: 0,
                                                .. }));
}

#[test]
fn extra_arguments_are_not_evaluated() {
    let src = "mut hit = false
               mark = fn() { hit = true }
               f = fn(x) { x }
               f(5, mark())
               hit";
    assert_eq!(eval(src), Value::Bool(false));

    let src = "mut hit = false
               mark = fn() { hit = true }
               f = fn(x, y) { x }
               f(5, mark())
               hit";
    assert_eq!(eval(src), Value::Bool(true));
}

#[test]
fn recursion_through_self() {
    let src = "fact = fn(n) { if n <= 1 { 1 } else { n * self(n - 1) } }
               fact(10)";
    assert_eq!(eval(src), Value::Integer(3_628_800));
}

#[test]
fn closures_keep_their_scope_alive() {
    let src = "make_counter = fn() {
                   mut count = 0
                   fn() { count = count + 1 }
               }
               c = make_counter()
               c()
               c()";
    assert_eq!(eval(src), Value::Integer(2));

    let src = "make_counter = fn() {
                   mut count = 0
                   fn() { count = count + 1 }
               }
               a = make_counter()
               b = make_counter()
               a()
               a()
               b()";
    assert_eq!(eval(src), Value::Integer(1));
}

#[test]
fn declarations_stay_in_their_call_frame() {
    let err = runtime_error("f = fn() { local = 1; local }\nf()\nlocal");
    assert_eq!(err,
               RuntimeError::UndefinedVariable { name:     "local".to_string(),
                                                 position: Position::new(3, 1), });
}

#[test]
fn assignment_reaches_outer_bindings() {
    assert_eq!(eval("mut n = 1\nbump = fn() { n = n + 10 }\nbump()\nn"), Value::Integer(11));
}

#[test]
fn immutable_bindings_cannot_be_reassigned() {
    assert!(matches!(runtime_error("x = 1\nx = 2"), RuntimeError::ImmutableBinding { .. }));
    assert!(matches!(runtime_error("f = fn(x) { x = 2 }\nf(1)"),
                     RuntimeError::ImmutableBinding { .. }));
    assert!(matches!(runtime_error("x = 1\nf = fn() { x = 2 }\nf()"),
                     RuntimeError::ImmutableBinding { .. }));
    assert!(matches!(runtime_error("puts = 1"), RuntimeError::ImmutableBinding { .. }));

    assert_eq!(eval("mut x = 1\nx = 2\nx"), Value::Integer(2));
    assert_eq!(eval("f = fn(mut x) { x = x + 1; x }\nf(1)"), Value::Integer(2));
}

#[test]
fn methods_mutate_their_receiver() {
    let src = "mut obj = { count: 0, incr: fn() { this.count = this.count + 1 } }
               obj.incr()
               obj.incr()
               obj.count";
    assert_eq!(eval(src), Value::Integer(2));
}

#[test]
fn receiver_properties_resolve_as_bare_names() {
    let src = "counter = { n: 0, bump: fn() { n = n + 1 } }
               counter.bump()
               counter.bump()
               counter.n";
    assert_eq!(eval(src), Value::Integer(2));
}

#[test]
fn bound_methods_remember_their_receiver() {
    let src = "obj = { count: 5, get: fn() { this.count } }
               get = obj.get
               get()";
    assert_eq!(eval(src), Value::Integer(5));
}

#[test]
fn out_of_range_index_keeps_the_running_value() {
    assert_eq!(eval("a = [1, 2, 3]\na[5]").to_string(), "[1, 2, 3]");
    assert_eq!(eval("a = [1, 2, 3]\na[-1]").to_string(), "[1, 2, 3]");
    assert_eq!(eval("a = [1, 2, 3]\na[2]"), Value::Integer(3));
    assert_eq!(eval("m = [[1, 2], [3, 4]]\nm[1][0]"), Value::Integer(3));
}

#[test]
fn string_interpolation() {
    assert_eq!(eval(r#""${1 + 2} apples""#), Value::from("3 apples"));
    assert_eq!(eval(r#"name = 'world'; "hello, ${name}!""#), Value::from("hello, world!"));
    assert_eq!(eval(r#""${[1, 'a']} and ${{k: true}}""#), Value::from("[1, a] and {k: true}"));
    assert_eq!(eval(r#""${undefined}""#), Value::from("undefined"));
    assert_eq!(eval(r#""a\tb\${x}""#), Value::from("a\tb${x}"));
    assert_eq!(eval(r#""${ '}' }""#), Value::from("}"));
    assert_eq!(eval(r#""<${ '{' }>""#), Value::from("<{>"));
}

#[test]
fn unary_operators() {
    assert_eq!(eval("+'a'"), Value::from("a"));
    assert_eq!(eval("-(2 - 5)"), Value::Integer(3));
    assert!(matches!(runtime_error("-'a'"),
                     RuntimeError::TypeError { expected: "integer",
                                               found: "string",
                                               .. }));
    assert!(matches!(runtime_error("-true"),
                     RuntimeError::TypeError { expected: "integer",
                                               found: "boolean",
                                               .. }));
    assert_eq!(eval("x = -9223372036854775807 - 1\nx").to_string(), "-9223372036854775808");
    assert!(matches!(runtime_error("x = -9223372036854775807 - 1\n-x"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn self_referencing_values_display_and_compare() {
    assert_eq!(eval("a = []\na.push(a)\n\"${a}\""), Value::from("[[...]]"));
    assert_eq!(eval("o = {name: 'o'}\no.me = o\n\"${o}\""),
               Value::from("{name: o, me: {...}}"));
    assert_eq!(eval("a = [1]\na.push(a)\nb = [1]\nb.push(b)\na == b"), Value::Bool(true));
    assert_eq!(eval("a = [1]\na.push(a)\nb = [2]\nb.push(b)\na == b"), Value::Bool(false));
    assert_eq!(eval("o = {}\no.me = o\np = {}\np.me = p\no == p"), Value::Bool(true));

    let output = Rc::new(RefCell::new(Vec::<u8>::new()));
    let env = Environment::new();
    prelude::install_with_output(&env, output.clone());
    assert_success_in(&env, "a = [1]\na.push([a])\nputs(a)");
    assert_eq!(String::from_utf8(output.borrow().clone()).unwrap(), "[1, [[...]]]\n");
}

#[test]
fn logical_operators_short_circuit() {
    let src = "mut hit = false
               mark = fn() { hit = true }
               false && mark()
               true || mark()
               hit";
    assert_eq!(eval(src), Value::Bool(false));

    assert_eq!(eval("0 || 5"), Value::Integer(0));
    assert_eq!(eval("undefined || 5"), Value::Integer(5));
    assert_eq!(eval("1 && 'x'"), Value::from("x"));
    assert_eq!(eval("1 && false && 2"), Value::Bool(false));
}

#[test]
fn equality_is_structural() {
    assert_eq!(eval("[1, [2]] == [1, [2]]"), Value::Bool(true));
    assert_eq!(eval("{a: 1} == {a: 1}"), Value::Bool(true));
    assert_eq!(eval("{a: 1} != {a: 2}"), Value::Bool(true));
    assert_eq!(eval("f = fn() {}\nf == f"), Value::Bool(true));
    assert_eq!(eval("fn() {} == fn() {}"), Value::Bool(false));
    assert_eq!(eval("1 == '1'"), Value::Bool(false));
    assert_eq!(eval("undefined == undefined"), Value::Bool(true));
}

#[test]
fn ordering_comparisons() {
    assert_success("assert(2 < 3)");
    assert_success("assert(3 >= 3)");
    assert_success("assert('abc' < 'abd')");
    assert_success("assert(false < true)");
    assert!(matches!(runtime_error("1 < 'a'"), RuntimeError::TypeError { .. }));
}

#[test]
fn arrays_are_shared_by_reference() {
    assert_eq!(eval("a = [1]\nb = a\nb.push(2)\na.size"), Value::Integer(2));
    assert_eq!(eval("a = []\na.push(1).push(2)\na").to_string(), "[1, 2]");
}

#[test]
fn builtin_properties() {
    assert_eq!(eval("[1, 2, 3].size"), Value::Integer(3));
    assert_eq!(eval("'héllo'.size"), Value::Integer(5));
    assert_eq!(eval("{a: 1, b: 2, a: 3}").to_string(), "{a: 3, b: 2}");
    assert!(matches!(runtime_error("{a: 1}.b"), RuntimeError::UnknownProperty { .. }));
    assert!(matches!(runtime_error("5.size"),
                     RuntimeError::UnknownProperty { receiver: "integer",
                                                     .. }));
}

#[test]
fn property_assignment() {
    assert_eq!(eval("o = {inner: {v: 1}}\no.inner.v = 5\no.inner.v"), Value::Integer(5));
    assert_eq!(eval("o = {}\no.added = 'new'"), Value::from("new"));
    assert!(matches!(runtime_error("a = [1]\na.x = 2"),
                     RuntimeError::TypeError { expected: "object",
                                               .. }));
}

#[test]
fn puts_writes_display_strings() {
    let output = Rc::new(RefCell::new(Vec::<u8>::new()));
    let env = Environment::new();
    prelude::install_with_output(&env, output.clone());

    let result = evaluate_program("<test>",
                                  &env,
                                  "puts([1, 'a', {k: true}])\nputs(undefined)\nputs(42)");
    assert_eq!(result.ok(), Some(Value::Null));

    let written = String::from_utf8(output.borrow().clone()).unwrap();
    assert_eq!(written, "[1, a, {k: true}]\nundefined\n42\n");
}

#[test]
fn assert_reports_its_call_site() {
    assert_success("assert(1 == 1)");
    assert_eq!(runtime_error("x = 1\n  assert(x == 2)"),
               RuntimeError::AssertionFailed { position: Position::new(2, 3) });
}

#[test]
fn call_site_bindings() {
    assert_eq!(eval("f = fn() { __LINE__ }\n\nf()"), Value::Integer(3));
    assert_eq!(eval("f = fn() { __COLUMN__ }\n    f()"), Value::Integer(5));
}

#[test]
fn runtime_errors() {
    assert!(matches!(runtime_error("1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("1 % 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("9223372036854775807 + 1"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("99999999999999999999"),
                     RuntimeError::LiteralTooLarge { .. }));
    assert!(matches!(runtime_error("1 + 'a'"),
                     RuntimeError::TypeError { expected: "integer",
                                               found: "string",
                                               .. }));
    assert!(matches!(runtime_error("5(1)"),
                     RuntimeError::TypeError { expected: "function",
                                               .. }));
    assert!(matches!(runtime_error("x = 5\nx[0]"),
                     RuntimeError::TypeError { expected: "array",
                                               .. }));
    assert!(matches!(runtime_error("[1, 2]['a']"),
                     RuntimeError::TypeError { expected: "integer",
                                               .. }));
    assert_failure("missing + 1");
}

#[test]
fn deep_recursion_hits_the_call_depth_limit() {
    assert!(matches!(runtime_error("f = fn() { self() }\nf()"),
                     RuntimeError::CallDepthExceeded { limit: 512,
                                                       .. }));
}

#[test]
fn syntax_errors_name_the_location() {
    let message = |src: &str| run(src).unwrap_err().to_string();

    assert_eq!(message("x = (1 +"), "<test>:1:9: unexpected end of input");
    assert_eq!(message("x = 1 @ 2"), "<test>:1:7: unrecognized input '@'");
    assert!(message("1 2").starts_with("<test>:1:3: "));
    assert!(message("x = 1\ny = )").starts_with("<test>:2:5: "));
    assert!(matches!(run("f() = 1"), Err(Error::Syntax { .. })));
}

#[test]
fn comments_are_ignored() {
    assert_eq!(eval("x = 1 // note\n/* multi\nline */ x"), Value::Integer(1));
    assert_eq!(eval("x = 1 /* note **/\nx"), Value::Integer(1));
    assert_eq!(eval("/***/ 2"), Value::Integer(2));
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.culebra").unwrap();
    assert_success(&contents);
}
