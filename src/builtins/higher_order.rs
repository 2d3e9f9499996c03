// ABOUTME: List-processing builtins built on top of invoke(): map/filter/fold family and friends

use super::{check_arity, ensure_atom, ensure_func, ensure_list, ensure_not_empty, eval_arg, invoke};
use crate::error::EvalError;
use crate::interpreter::Interpreter;
use crate::scope::LocalScope;
use crate::value::Value;

pub fn length(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    ensure_list(&a0)?;
    Ok(Value::from_u64(a0.as_list().unwrap().len() as u64))
}

pub fn reverse(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    ensure_list(&a0)?;
    let mut items: Vec<Value> = a0.as_list().unwrap().as_ref().clone();
    items.reverse();
    Ok(Value::list(items))
}

pub fn concat(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    let a1 = eval_arg(tree, 2, local, interp)?;
    ensure_list(&a0)?;
    ensure_list(&a1)?;
    let mut out = a0.as_list().unwrap().as_ref().clone();
    out.extend(a1.as_list().unwrap().iter().cloned());
    Ok(Value::list(out))
}

pub fn iota(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 2)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    ensure_atom(&a0)?;
    let n = a0.as_f64() as u64;
    Ok(Value::list((0..n).map(Value::from_u64).collect()))
}

pub fn take(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    let a1 = eval_arg(tree, 2, local, interp)?;
    ensure_atom(&a0)?;
    ensure_list(&a1)?;

    if a1.is_empty() {
        return Ok(a1);
    }
    let n = a0.as_f64() as usize;
    let items = a1.as_list().unwrap();
    Ok(Value::list(items.iter().take(n).cloned().collect()))
}

pub fn drop(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let a0 = eval_arg(tree, 1, local, interp)?;
    let a1 = eval_arg(tree, 2, local, interp)?;
    ensure_atom(&a0)?;
    ensure_list(&a1)?;

    if a1.is_empty() {
        return Ok(a1);
    }
    let n = a0.as_f64() as usize;
    let items = a1.as_list().unwrap();
    Ok(Value::list(items.iter().skip(n).cloned().collect()))
}

pub fn map(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let f = eval_arg(tree, 1, local, interp)?;
    let xs = eval_arg(tree, 2, local, interp)?;
    ensure_func(&f)?;
    ensure_list(&xs)?;

    if xs.is_empty() {
        return Ok(xs);
    }
    let mut out = Vec::with_capacity(xs.as_list().unwrap().len());
    for v in xs.as_list().unwrap().iter() {
        out.push(invoke(&f, std::slice::from_ref(v), local, interp)?);
    }
    Ok(Value::list(out))
}

pub fn filter(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let f = eval_arg(tree, 1, local, interp)?;
    let xs = eval_arg(tree, 2, local, interp)?;
    ensure_func(&f)?;
    ensure_list(&xs)?;

    if xs.is_empty() {
        return Ok(xs);
    }
    let mut out = Vec::new();
    for v in xs.as_list().unwrap().iter() {
        if invoke(&f, std::slice::from_ref(v), local, interp)?.as_bool() {
            out.push(v.clone());
        }
    }
    Ok(Value::list(out))
}

pub fn zip_with(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 4)?;
    let f = eval_arg(tree, 1, local, interp)?;
    let xs = eval_arg(tree, 2, local, interp)?;
    let ys = eval_arg(tree, 3, local, interp)?;
    ensure_func(&f)?;
    ensure_list(&xs)?;
    ensure_list(&ys)?;

    if xs.is_empty() || ys.is_empty() {
        return Ok(Value::empty_list());
    }
    let xs = xs.as_list().unwrap();
    let ys = ys.as_list().unwrap();
    let mut out = Vec::with_capacity(xs.len().min(ys.len()));
    for (x, y) in xs.iter().zip(ys.iter()) {
        out.push(invoke(&f, &[x.clone(), y.clone()], local, interp)?);
    }
    Ok(Value::list(out))
}

pub fn take_while(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let f = eval_arg(tree, 1, local, interp)?;
    let xs = eval_arg(tree, 2, local, interp)?;
    ensure_func(&f)?;
    ensure_list(&xs)?;

    if xs.is_empty() {
        return Ok(xs);
    }
    let mut out = Vec::new();
    for v in xs.as_list().unwrap().iter() {
        if !invoke(&f, std::slice::from_ref(v), local, interp)?.as_bool() {
            break;
        }
        out.push(v.clone());
    }
    Ok(Value::list(out))
}

pub fn drop_while(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let f = eval_arg(tree, 1, local, interp)?;
    let xs = eval_arg(tree, 2, local, interp)?;
    ensure_func(&f)?;
    ensure_list(&xs)?;

    if xs.is_empty() {
        return Ok(xs);
    }
    let mut out = Vec::new();
    let mut dropping = true;
    for v in xs.as_list().unwrap().iter() {
        if dropping {
            if invoke(&f, std::slice::from_ref(v), local, interp)?.as_bool() {
                continue;
            }
            dropping = false;
        }
        out.push(v.clone());
    }
    Ok(Value::list(out))
}

pub fn repeat(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let n = eval_arg(tree, 1, local, interp)?;
    let x = eval_arg(tree, 2, local, interp)?;
    ensure_atom(&n)?;

    let count = n.as_f64() as usize;
    Ok(Value::list(vec![x; count]))
}

pub fn foldl(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 4)?;
    let f = eval_arg(tree, 1, local, interp)?;
    let z = eval_arg(tree, 2, local, interp)?;
    let xs = eval_arg(tree, 3, local, interp)?;
    ensure_func(&f)?;
    ensure_list(&xs)?;

    if xs.is_empty() {
        return Ok(z);
    }
    let mut accum = z;
    for v in xs.as_list().unwrap().iter() {
        accum = invoke(&f, &[accum, v.clone()], local, interp)?;
    }
    Ok(accum)
}

pub fn foldl1(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let f = eval_arg(tree, 1, local, interp)?;
    let xs = eval_arg(tree, 2, local, interp)?;
    ensure_func(&f)?;
    ensure_not_empty(&xs)?;
    ensure_list(&xs)?;

    let items = xs.as_list().unwrap();
    let mut accum = items[0].clone();
    for v in items[1..].iter() {
        accum = invoke(&f, &[accum, v.clone()], local, interp)?;
    }
    Ok(accum)
}

pub fn foldr(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 4)?;
    let f = eval_arg(tree, 1, local, interp)?;
    let z = eval_arg(tree, 2, local, interp)?;
    let xs = eval_arg(tree, 3, local, interp)?;
    ensure_func(&f)?;
    ensure_list(&xs)?;

    if xs.is_empty() {
        return Ok(z);
    }
    let mut accum = z;
    for v in xs.as_list().unwrap().iter().rev() {
        accum = invoke(&f, &[v.clone(), accum], local, interp)?;
    }
    Ok(accum)
}

pub fn foldr1(tree: &Value, local: &LocalScope, interp: &Interpreter) -> Result<Value, EvalError> {
    check_arity(tree, 3)?;
    let f = eval_arg(tree, 1, local, interp)?;
    let xs = eval_arg(tree, 2, local, interp)?;
    ensure_func(&f)?;
    ensure_not_empty(&xs)?;
    ensure_list(&xs)?;

    let items = xs.as_list().unwrap();
    let mut iter = items.iter().rev();
    let mut accum = iter.next().unwrap().clone();
    for v in iter {
        accum = invoke(&f, &[v.clone(), accum], local, interp)?;
    }
    Ok(accum)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::Interpreter;

    #[test]
    fn map_over_iota() {
        assert_eq!(
            Interpreter::new().run("(map (fn x (+ x 1)) (iota 3))"),
            ("(1 2 3)".into(), "".into())
        );
    }

    #[test]
    fn map_over_empty_is_empty() {
        assert_eq!(
            Interpreter::new().run("(map (fn x x) ())"),
            ("()".into(), "".into())
        );
    }

    #[test]
    fn zip_with_truncates_to_shorter_input() {
        assert_eq!(
            Interpreter::new().run("(zipWith + (1 2 3) (10 20))"),
            ("(11 22)".into(), "".into())
        );
    }

    #[test]
    fn foldl1_on_empty_list_is_invalid_argument() {
        let (_, err) = Interpreter::new().run("(foldl1 + ())");
        assert_eq!(err, "Invalid argument ()");
    }

    #[test]
    fn foldl_and_foldr_agree_for_commutative_sum() {
        assert_eq!(
            Interpreter::new().run("(foldl + 0 (1 2 3 4))"),
            Interpreter::new().run("(foldr + 0 (1 2 3 4))"),
        );
    }

    #[test]
    fn take_and_drop_saturate_at_list_length() {
        assert_eq!(
            Interpreter::new().run("(take 10 (1 2 3))"),
            ("(1 2 3)".into(), "".into())
        );
        assert_eq!(
            Interpreter::new().run("(drop 10 (1 2 3))"),
            ("()".into(), "".into())
        );
    }
}
