// ABOUTME: The fixed builtin operator library, organized by category and installed once at startup

mod binding;
mod boolean;
mod bridge;
mod control;
mod higher_order;
mod lists;
mod math;

use std::collections::HashMap;

use crate::error::EvalError;
use crate::eval::{eval, BuiltinFn};
use crate::interpreter::Interpreter;
use crate::scope::LocalScope;
use crate::value::Value;

/// Index `tree` as the call list a builtin was invoked with.
pub(crate) fn items(tree: &Value) -> &[Value] {
    tree.as_list()
        .expect("a builtin is always invoked with a List tree")
}

/// `CHECK n`: fail with insufficient arguments if the call list (including
/// its own head) has fewer than `n` elements.
pub(crate) fn check_arity(tree: &Value, n: usize) -> Result<(), EvalError> {
    if items(tree).len() < n {
        Err(EvalError::InsufficientArguments(tree.clone()))
    } else {
        Ok(())
    }
}

/// `EVAL i`: evaluate the element at index `i` in the caller's local scope.
pub(crate) fn eval_arg(
    tree: &Value,
    idx: usize,
    local: &LocalScope,
    interp: &Interpreter,
) -> Result<Value, EvalError> {
    eval(items(tree)[idx].clone(), local, interp)
}

pub(crate) fn ensure_atom(v: &Value) -> Result<(), EvalError> {
    if v.is_atom() {
        Ok(())
    } else {
        Err(EvalError::InvalidArgument(v.clone()))
    }
}

pub(crate) fn ensure_list(v: &Value) -> Result<(), EvalError> {
    if v.is_list() {
        Ok(())
    } else {
        Err(EvalError::InvalidArgument(v.clone()))
    }
}

pub(crate) fn ensure_func(v: &Value) -> Result<(), EvalError> {
    if v.is_func() {
        Ok(())
    } else {
        Err(EvalError::InvalidArgument(v.clone()))
    }
}

pub(crate) fn ensure_not_empty(v: &Value) -> Result<(), EvalError> {
    if v.is_empty() {
        Err(EvalError::InvalidArgument(v.clone()))
    } else {
        Ok(())
    }
}

/// Build a fresh call list `(f, args...)` and evaluate it in `local` — the
/// mechanism every higher-order builtin uses to invoke its function argument
/// once per element.
pub(crate) fn invoke(
    f: &Value,
    args: &[Value],
    local: &LocalScope,
    interp: &Interpreter,
) -> Result<Value, EvalError> {
    let mut call = Vec::with_capacity(args.len() + 1);
    call.push(f.clone());
    call.extend_from_slice(args);
    eval(Value::list(call), local, interp)
}

/// Populate the name -> native callable table installed once at
/// `Interpreter::new()` and never mutated afterward.
pub(crate) fn registry() -> HashMap<&'static str, BuiltinFn> {
    let mut map: HashMap<&'static str, BuiltinFn> = HashMap::new();

    map.insert("seq", control::seq);
    map.insert("val", control::val);
    map.insert("id", control::id);
    map.insert("if", control::if_);
    map.insert("empty", control::empty);
    map.insert("atom", control::atom);
    map.insert("list", control::list);
    map.insert("func", control::func);

    map.insert("head", lists::head);
    map.insert("tail", lists::tail);
    map.insert("cons", lists::cons);

    map.insert("fn", binding::make_fn);
    map.insert("let", binding::let_);
    map.insert("def", binding::def);

    map.insert("!", boolean::not_);
    map.insert("&", boolean::and);
    map.insert("|", boolean::or);
    map.insert("^", boolean::xor);
    map.insert("+", boolean::add);
    map.insert("*", boolean::mul);
    map.insert("-", boolean::sub);
    map.insert("/", boolean::div);
    map.insert("%", boolean::rem);
    map.insert("<", boolean::lt);
    map.insert(">", boolean::gt);
    map.insert("<=", boolean::le);
    map.insert(">=", boolean::ge);
    map.insert("=", boolean::eq);
    map.insert("!=", boolean::ne);

    map.insert("sqrt", math::sqrt);
    map.insert("abs", math::abs);
    map.insert("sin", math::sin);
    map.insert("cos", math::cos);
    map.insert("tan", math::tan);
    map.insert("asin", math::asin);
    map.insert("acos", math::acos);
    map.insert("atan", math::atan);
    map.insert("floor", math::floor);
    map.insert("ceil", math::ceil);
    map.insert("sinCos", math::sin_cos);
    map.insert("atan2", math::atan2);
    map.insert("pow", math::pow);
    map.insert("log", math::log);

    map.insert("get", bridge::get);
    map.insert("set", bridge::set);
    map.insert("call", bridge::call);

    map.insert("length", higher_order::length);
    map.insert("reverse", higher_order::reverse);
    map.insert("concat", higher_order::concat);
    map.insert("iota", higher_order::iota);
    map.insert("take", higher_order::take);
    map.insert("drop", higher_order::drop);
    map.insert("map", higher_order::map);
    map.insert("filter", higher_order::filter);
    map.insert("zipWith", higher_order::zip_with);
    map.insert("takeWhile", higher_order::take_while);
    map.insert("dropWhile", higher_order::drop_while);
    map.insert("repeat", higher_order::repeat);
    map.insert("foldl", higher_order::foldl);
    map.insert("foldl1", higher_order::foldl1);
    map.insert("foldr", higher_order::foldr);
    map.insert("foldr1", higher_order::foldr1);

    map
}
