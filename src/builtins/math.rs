// ABOUTME: The cmath-proxy builtins: unary functions of a double, plus atan2/pow/log

use super::{check_arity, ensure_atom, eval_arg};
use crate::error::EvalError;
use crate::interpreter::Interpreter;
use crate::scope::LocalScope;
use crate::value::Value;

/// Generates a CHECK-2 builtin that evaluates its argument, requires it to
/// be an Atom, and applies an `f64 -> f64` function to its numeric
/// coercion.
macro_rules! math_unary {
    ($name:ident, $op:expr) => {
        paste::paste! {
            pub fn $name(
                tree: &Value,
                local: &LocalScope,
                interp: &Interpreter,
            ) -> Result<Value, EvalError> {
                check_arity(tree, 2)?;
                let a0 = eval_arg(tree, 1, local, interp)?;
                ensure_atom(&a0)?;
                let op: fn(f64) -> f64 = $op;
                Ok(Value::from_f64(op(a0.as_f64())))
            }
        }
    };
}

math_unary!(sqrt, f64::sqrt);
math_unary!(abs, f64::abs);
math_unary!(sin, f64::sin);
math_unary!(cos, f64::cos);
math_unary!(tan, f64::tan);
math_unary!(asin, f64::asin);
math_unary!(acos, f64::acos);
math_unary!(atan, f64::atan);
math_unary!(floor, f64::floor);
math_unary!(ceil, f64::ceil);

pub fn sin_cos(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    ensure_atom(&a0)?;
    let v = a0.as_f64();
    Ok(Value::list(vec![
        Value::from_f64(v.sin()),
        Value::from_f64(v.cos()),
    ]))
}

pub fn atan2(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    let a1 = eval_arg(tree, 2, local, interp)?;
    Ok(Value::from_f64(a0.as_f64().atan2(a1.as_f64())))
}

/// `pow a b` computes `b^a` — the argument order is reversed from the usual
/// convention; callers and tests depend on this.
pub fn pow(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    let a1 = eval_arg(tree, 2, local, interp)?;
    Ok(Value::from_f64(a1.as_f64().powf(a0.as_f64())))
}

/// `log base x = ln(x) / ln(base)`.
pub fn log(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    let a1 = eval_arg(tree, 2, local, interp)?;
    Ok(Value::from_f64(a1.as_f64().ln() / a0.as_f64().ln()))
}
