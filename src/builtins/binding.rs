// ABOUTME: Binding and abstraction builtins: fn, let, def

use std::sync::Arc;

use super::{check_arity, items};
use crate::error::EvalError;
use crate::eval::eval;
use crate::interpreter::Interpreter;
use crate::scope::LocalScope;
use crate::value::Value;

/// Constructs a UserFunc. Non-Atom sub-trees in parameter position are
/// skipped silently; the final sub-tree is always the body.
pub fn make_fn(tree: &Value, _local: &LocalScope, _interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    let list = items(tree);
    let n = list.len();

    let mut params = Vec::new();
    for slot in &list[1..n - 1] {
        if let Some(name) = slot.as_atom_str() {
            params.push(name.to_string());
        }
    }

    Ok(Value::UserFunc {
        params: Arc::new(params),
        body: Arc::new(list[n - 1].clone()),
    })
}

/// Evaluates each `vi` in the evolving local scope and binds it to `ki`,
/// then evaluates the body in that scope. Non-Atom `ki` is skipped.
pub fn let_(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 4)?;
    let list = items(tree);
    let n = list.len();

    let mut scope = local.clone();
    let mut i = 1;
    while i < n - 2 {
        if let Some(name) = list[i].as_atom_str() {
            let name = name.to_string();
            let value = eval(list[i + 1].clone(), &scope, interp)?;
            scope.set(name, value);
        }
        i += 2;
    }

    eval(list[n - 1].clone(), &scope, interp)
}

/// Installs bindings into the interpreter's global scope. Each `vi` is
/// evaluated in the caller's local scope.
pub fn def(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let list = items(tree);
    let n = list.len();

    let mut i = 1;
    while i < n - 1 {
        if let Some(name) = list[i].as_atom_str() {
            let name = name.to_string();
            let value = eval(list[i + 1].clone(), local, interp)?;
            interp.set_global(name, value);
        }
        i += 2;
    }

    Ok(Value::empty_atom())
}
