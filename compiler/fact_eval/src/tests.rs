use crate::{EvalResult, Interpreter, Value};
use fact_diagnostic::RuntimeErrorKind;
use fact_ir::LineMap;
use pretty_assertions::assert_eq;

fn run(source: &str) -> EvalResult {
    run_with_depth(source, 1024)
}

fn run_with_depth(source: &str, max_depth: usize) -> EvalResult {
    let (tokens, lex_diagnostics) = fact_lexer::lex(source);
    assert!(lex_diagnostics.is_empty(), "lexical errors in test source");
    let line_map = LineMap::new(source);
    let outcome = fact_parse::parse(&tokens, &line_map);
    assert!(
        outcome.diagnostics.is_empty(),
        "syntax errors in test source"
    );
    Interpreter::with_max_depth(max_depth).run(&outcome.program)
}

fn run_ok(source: &str) -> Value {
    match run(source) {
        Ok(value) => value,
        Err(err) => panic!("evaluation failed: {err}"),
    }
}

fn run_err(source: &str) -> RuntimeErrorKind {
    match run(source) {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(err) => err.kind,
    }
}

#[test]
fn calls_and_arithmetic() {
    let source = "func Add[a, b] := a + b end\nexec Add[3, 4]";
    assert_eq!(run_ok(source), Value::Int(7));
}

#[test]
fn string_concatenation() {
    assert_eq!(
        run_ok("exec \"hi\" + \" there\""),
        Value::Str("hi there".into())
    );
}

#[test]
fn if_selects_on_truthiness() {
    assert_eq!(run_ok("exec if 1 < 2 then 10 else 20 end"), Value::Int(10));
    assert_eq!(run_ok("exec if nil then 10 else 20 end"), Value::Int(20));
}

#[test]
fn last_definition_wins() {
    let source = "val x := 1 end\nval x := 2 end\nexec x";
    assert_eq!(run_ok(source), Value::Int(2));
}

#[test]
fn let_bindings_do_not_leak() {
    let source = "val x := 1 end\nexec (let val x := 2 end in x end) + x";
    assert_eq!(run_ok(source), Value::Int(3));
}

#[test]
fn let_body_sees_enclosing_scope() {
    let source = "val x := 10 end\nexec let val y := 2 end in x * y end";
    assert_eq!(run_ok(source), Value::Int(20));
}

#[test]
fn reference_outside_let_is_undefined() {
    let source = "exec (let val y := 1 end in y end) + y";
    assert_eq!(run_err(source), RuntimeErrorKind::UndefinedVariable);
}

#[test]
fn forward_references_between_vals() {
    // val bodies are re-evaluated on reference, so textual order within
    // a scope does not constrain what they may mention.
    let source = "val y := x + 1 end\nval x := 1 end\nexec y";
    assert_eq!(run_ok(source), Value::Int(2));
}

#[test]
fn arity_is_checked_before_argument_evaluation() {
    let source = "func Id[a] := a end\nexec Id[1, 2 / 0]";
    assert_eq!(run_err(source), RuntimeErrorKind::ArityMismatch);
}

#[test]
fn division_by_zero_aborts() {
    assert_eq!(run_err("exec 5 / 0"), RuntimeErrorKind::DivisionByZero);
    assert_eq!(run_ok("exec 7 / 2"), Value::Int(3));
}

#[test]
fn logic_does_not_short_circuit() {
    assert_eq!(
        run_err("exec true | (1 / 0)"),
        RuntimeErrorKind::DivisionByZero
    );
    assert_eq!(
        run_err("exec false & (1 / 0)"),
        RuntimeErrorKind::DivisionByZero
    );
}

#[test]
fn undefined_function_call() {
    assert_eq!(run_err("exec Missing[1]"), RuntimeErrorKind::UndefinedFunction);
}

#[test]
fn calling_a_non_function_parameter() {
    let source = "func Apply[F, x] := F[x] end\nexec Apply[1, 2]";
    assert_eq!(run_err(source), RuntimeErrorKind::TypeMismatch);
}

#[test]
fn higher_order_calls() {
    let source = "\
func Inc[n] := n + 1 end
func Apply[F, x] := F[x] end
exec Apply[Inc, 3]";
    assert_eq!(run_ok(source), Value::Int(4));
}

#[test]
fn recursive_factorial() {
    let source = "\
func Fact[n] := if n < 2 then 1 else n * Fact[n - 1] end end
exec Fact[5]";
    assert_eq!(run_ok(source), Value::Int(120));
}

#[test]
fn runaway_recursion_hits_the_depth_limit() {
    let source = "func Loop[n] := Loop[n + 1] end\nexec Loop[0]";
    let Err(err) = run_with_depth(source, 64) else {
        panic!("expected an error");
    };
    assert_eq!(err.kind, RuntimeErrorKind::RecursionLimitExceeded);
}

#[test]
fn dot_is_a_runtime_type_mismatch() {
    assert_eq!(run_err("exec 1 . 2"), RuntimeErrorKind::TypeMismatch);
}

#[test]
fn comparisons_and_equality() {
    assert_eq!(run_ok("exec \"a\" < \"b\""), Value::Bool(true));
    assert_eq!(run_ok("exec \"a\" = 1"), Value::Bool(false));
    assert_eq!(run_ok("exec nil = nil"), Value::Bool(true));
}

#[test]
fn program_without_exec_is_nil() {
    assert_eq!(run_ok("val x := 1 end"), Value::Nil);
}

#[test]
fn functions_defined_in_let_are_callable() {
    let source = "exec let func Double[n] := n * 2 end in Double[21] end";
    assert_eq!(run_ok(source), Value::Int(42));
}

#[test]
fn closures_capture_their_defining_scope() {
    let source = "\
func Call[F] := F[0] end
exec let
  val base := 40 end
  func AddBase[n] := base + n + 2 end
in Call[AddBase] end";
    assert_eq!(run_ok(source), Value::Int(42));
}

#[test]
fn val_referencing_undefined_name_fails_on_use() {
    let source = "val broken := missing + 1 end\nexec 1";
    assert_eq!(run_ok(source), Value::Int(1));
    let source = "val broken := missing + 1 end\nexec broken";
    assert_eq!(run_err(source), RuntimeErrorKind::UndefinedVariable);
}
