// ABOUTME: Unary negation and the binary boolean/arithmetic/comparison operators

use super::{check_arity, eval_arg};
use crate::error::EvalError;
use crate::interpreter::Interpreter;
use crate::scope::LocalScope;
use crate::value::Value;

pub fn not_(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    Ok(Value::from_bool(!a0.as_bool()))
}

/// Every binary operator evaluates both operands — there is no
/// short-circuiting, including for `&` and `|`.
macro_rules! binary_op {
    ($name:ident, |$a0:ident, $a1:ident| $body:expr) => {
        pub fn $name(
            tree: &Value,
            local: &LocalScope,
            interp: &Interpreter,
        ) -> Result<Value, EvalError> {
            check_arity(tree, 3)?;
            let $a0 = eval_arg(tree, 1, local, interp)?;
            let $a1 = eval_arg(tree, 2, local, interp)?;
            Ok($body)
        }
    };
}

binary_op!(and, |a, b| Value::from_bool(a.as_bool() && b.as_bool()));
binary_op!(or, |a, b| Value::from_bool(a.as_bool() || b.as_bool()));
binary_op!(xor, |a, b| Value::from_bool(a.as_bool() ^ b.as_bool()));
binary_op!(add, |a, b| Value::from_f64(a.as_f64() + b.as_f64()));
binary_op!(sub, |a, b| Value::from_f64(a.as_f64() - b.as_f64()));
binary_op!(mul, |a, b| Value::from_f64(a.as_f64() * b.as_f64()));
binary_op!(div, |a, b| Value::from_f64(a.as_f64() / b.as_f64()));
binary_op!(rem, |a, b| Value::from_f64(a.as_f64() % b.as_f64()));
binary_op!(lt, |a, b| Value::from_bool(a.as_f64() < b.as_f64()));
binary_op!(gt, |a, b| Value::from_bool(a.as_f64() > b.as_f64()));
binary_op!(le, |a, b| Value::from_bool(a.as_f64() <= b.as_f64()));
binary_op!(ge, |a, b| Value::from_bool(a.as_f64() >= b.as_f64()));
binary_op!(eq, |a, b| Value::from_bool(a.structural_eq(&b)));
binary_op!(ne, |a, b| Value::from_bool(!a.structural_eq(&b)));
