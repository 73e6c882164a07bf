//! Binary operator semantics.

use crate::value::Value;
use crate::EvalResult;
use fact_diagnostic::{division_by_zero, type_mismatch, RuntimeError};
use fact_ir::BinOp;

/// Apply `op` to two already-evaluated operands.
///
/// `&` and `|` combine the truthiness of both operands; because both sides
/// are evaluated before this function is reached, neither operator
/// short-circuits. Integer arithmetic wraps on overflow.
pub fn evaluate_binary(op: BinOp, lhs: Value, rhs: Value) -> EvalResult {
    match op {
        BinOp::Or => Ok(Value::Bool(lhs.truthy() || rhs.truthy())),
        BinOp::And => Ok(Value::Bool(lhs.truthy() && rhs.truthy())),
        BinOp::Eq => Ok(Value::Bool(lhs == rhs)),
        BinOp::Lt => match (&lhs, &rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a < b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a < b)),
            _ => Err(mismatch(op, &lhs, &rhs)),
        },
        BinOp::Gt => match (&lhs, &rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a > b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a > b)),
            _ => Err(mismatch(op, &lhs, &rhs)),
        },
        BinOp::Add => match (lhs, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(b))),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
            (lhs, rhs) => Err(mismatch(op, &lhs, &rhs)),
        },
        BinOp::Sub => int_arith(op, lhs, rhs, i64::wrapping_sub),
        BinOp::Mul => int_arith(op, lhs, rhs, i64::wrapping_mul),
        BinOp::Div => match (&lhs, &rhs) {
            (Value::Int(_), Value::Int(0)) => Err(division_by_zero()),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_div(*b))),
            _ => Err(mismatch(op, &lhs, &rhs)),
        },
        // `.` parses but has no runtime meaning.
        BinOp::Dot => Err(mismatch(op, &lhs, &rhs)),
    }
}

fn int_arith(op: BinOp, lhs: Value, rhs: Value, f: fn(i64, i64) -> i64) -> EvalResult {
    match (&lhs, &rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(f(*a, *b))),
        _ => Err(mismatch(op, &lhs, &rhs)),
    }
}

fn mismatch(op: BinOp, lhs: &Value, rhs: &Value) -> RuntimeError {
    type_mismatch(op.symbol(), lhs.type_name(), rhs.type_name())
}
