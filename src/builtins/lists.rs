// ABOUTME: List construction builtins: head, tail, cons

use super::{check_arity, ensure_list, ensure_not_empty, eval_arg, items};
use crate::error::EvalError;
use crate::interpreter::Interpreter;
use crate::scope::LocalScope;
use crate::value::Value;

pub fn head(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    let src = eval_arg(tree, 1, local, interp)?;
    ensure_list(&src)?;
    ensure_not_empty(&src)?;
    Ok(src.as_list().unwrap()[0].clone())
}

pub fn tail(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    let src = eval_arg(tree, 1, local, interp)?;
    ensure_list(&src)?;
    let items = src.as_list().unwrap();
    if items.is_empty() {
        return Ok(Value::empty_list());
    }
    Ok(Value::list(items[1..].to_vec()))
}

pub fn cons(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let head = eval_arg(tree, 1, local, interp)?;
    let src = eval_arg(tree, 2, local, interp)?;
    ensure_list(&src)?;

    let mut out = Vec::with_capacity(src.as_list().unwrap().len() + 1);
    out.push(head);
    out.extend_from_slice(src.as_list().unwrap());
    Ok(Value::list(out))
}

#[cfg(test)]
mod tests {
    use crate::interpreter::Interpreter;

    #[test]
    fn head_and_tail_of_cons() {
        assert_eq!(
            Interpreter::new().run("(head (cons 1 (2 3)))"),
            ("1".into(), "".into())
        );
        assert_eq!(
            Interpreter::new().run("(tail (cons 1 (2 3)))"),
            ("(2 3)".into(), "".into())
        );
    }

    #[test]
    fn tail_of_empty_list_is_empty_list() {
        assert_eq!(
            Interpreter::new().run("(tail ())"),
            ("()".into(), "".into())
        );
    }

    #[test]
    fn head_of_empty_list_is_invalid_argument() {
        let (_, err) = Interpreter::new().run("(head ())");
        assert_eq!(err, "Invalid argument ()");
    }

    #[test]
    fn cons_requires_a_list_tail() {
        let (_, err) = Interpreter::new().run("(cons 1 2)");
        assert_eq!(err, "Invalid argument 2");
    }
}
