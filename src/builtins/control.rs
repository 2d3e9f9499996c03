// ABOUTME: Core control builtins: seq, val, id, if, and the type predicates

use super::{check_arity, eval_arg, items};
use crate::error::EvalError;
use crate::interpreter::Interpreter;
use crate::scope::LocalScope;
use crate::value::Value;

/// Evaluates all arguments, returns the last. Zero arguments (a bare `seq`
/// call) evaluates to the empty Atom.
pub fn seq(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    let n = items(tree).len();
    if n <= 1 {
        return Ok(Value::empty_atom());
    }
    for i in 1..n - 1 {
        eval_arg(tree, i, local, interp)?;
    }
    eval_arg(tree, n - 1, local, interp)
}

/// Returns a fresh List of the unevaluated argument sub-trees.
pub fn val(tree: &Value, _local: &LocalScope, _interp: &Interpreter) -> Result<Value, EvalError> {
    Ok(Value::list(items(tree)[1..].to_vec()))
}

pub fn id(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    eval_arg(tree, 1, local, interp)
}

/// Scans `p1 v1 p2 v2 ... pk vk else` left to right, returning the first
/// `vi` whose `pi` is truthy, or `else` if none match.
pub fn if_(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 4)?;
    let last = items(tree).len() - 1;
    let mut i = 1;
    while i < last {
        if eval_arg(tree, i, local, interp)?.as_bool() {
            return eval_arg(tree, i + 1, local, interp);
        }
        i += 2;
    }
    eval_arg(tree, last, local, interp)
}

pub fn empty(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    Ok(Value::from_bool(eval_arg(tree, 1, local, interp)?.is_empty()))
}

pub fn atom(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    Ok(Value::from_bool(eval_arg(tree, 1, local, interp)?.is_atom()))
}

pub fn list(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    Ok(Value::from_bool(eval_arg(tree, 1, local, interp)?.is_list()))
}

pub fn func(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    Ok(Value::from_bool(eval_arg(tree, 1, local, interp)?.is_func()))
}
