// ABOUTME: The tree-walking evaluator: atom resolution order and call dispatch

use crate::error::EvalError;
use crate::interpreter::Interpreter;
use crate::scope::LocalScope;
use crate::value::Value;
use std::sync::Arc;

/// A builtin receives the call list unevaluated (it decides what to evaluate
/// and in which scope), the caller's local scope, and the owning interpreter
/// so it can recurse into `eval` or reach the host bridge / global table.
pub type BuiltinFn = fn(&Value, &LocalScope, &Interpreter) -> Result<Value, EvalError>;

/// `eval(tree, local, interp)`: a pure function from (Value, local scope) to
/// Value, except for the `def` builtin's effect on the interpreter's global
/// table.
///
/// Resolution order for a bare Atom is local scope, then global scope, then
/// the builtin table; an atom bound to nothing evaluates to itself. A List
/// evaluates its head, rewrites element 0 with the evaluated head in place,
/// and — if that head turned out to be callable — invokes it with the
/// rewritten list as `tree`; otherwise the (head-evaluated) list is returned
/// unchanged.
pub fn eval(tree: Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    if tree.is_func() || tree.is_empty() {
        return Ok(tree);
    }

    match tree {
        Value::Atom(ref s) => {
            if let Some(v) = local.get(s) {
                return Ok(v.clone());
            }
            if let Some(v) = interp.get_global(s) {
                return Ok(v);
            }
            if let Some(v) = interp.get_builtin(s) {
                return Ok(v);
            }
            Ok(tree)
        }
        Value::List(items) => {
            let mut items = items;
            let head = eval(items[0].clone(), local, interp)?;
            let callable = head.is_func();
            {
                let items_mut = Arc::make_mut(&mut items);
                items_mut[0] = head.clone();
            }
            let rewritten = Value::List(items);

            if !callable {
                return Ok(rewritten);
            }

            match head {
                Value::UserFunc { params, body } => {
                    call_user_func(&params, &body, &rewritten, local, interp)
                }
                Value::BuiltinFunc { func, .. } => func(&rewritten, local, interp),
                _ => unreachable!("callable heads are UserFunc or BuiltinFunc"),
            }
        }
        _ => unreachable!("Func and empty values returned above"),
    }
}

fn call_user_func(
    params: &[String],
    body: &Value,
    tree: &Value,
    local: &LocalScope,
    interp: &Interpreter,
) -> Result<Value, EvalError> {
    let items = tree.as_list().expect("call tree is always a List");
    if items.len() < params.len() + 1 {
        return Err(EvalError::InsufficientArguments(tree.clone()));
    }

    let mut call_scope = local.clone();
    for (i, name) in params.iter().enumerate() {
        let arg = eval(items[1 + i].clone(), local, interp)?;
        call_scope.set(name.clone(), arg);
    }

    eval(body.clone(), &call_scope, interp)
}
