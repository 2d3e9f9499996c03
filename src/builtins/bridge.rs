// ABOUTME: The host-bridge builtins: get, set, call

use super::{check_arity, ensure_atom, ensure_list, eval_arg, items};
use crate::error::EvalError;
use crate::interpreter::Interpreter;
use crate::scope::LocalScope;
use crate::value::Value;

pub fn get(tree: &Value, _local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    let name = &items(tree)[1];
    ensure_atom(name)?;
    interp.host.get(name.as_atom_str().unwrap())
}

pub fn set(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let name = &items(tree)[1];
    ensure_atom(name)?;
    let value = eval_arg(tree, 2, local, interp)?;
    interp.host.set(name.as_atom_str().unwrap(), value)
}

pub fn call(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let name = &items(tree)[1];
    ensure_atom(name)?;

    let args = eval_arg(tree, 2, local, interp)?;
    ensure_list(&args)?;

    let printed: Vec<String> = args
        .as_list()
        .unwrap()
        .iter()
        .map(|v| v.to_string())
        .collect();

    let results = interp.host.call(name.as_atom_str().unwrap(), printed)?;
    Ok(Value::list(results.into_iter().map(Value::atom).collect()))
}
