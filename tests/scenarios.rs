// ABOUTME: End-to-end scenarios run through Interpreter::run, covering the full operator grid

use eli::Interpreter;

#[test]
fn arithmetic_and_comparison_grid() {
    let interp = Interpreter::new();
    assert_eq!(interp.run("(+ 1 2)"), ("3".into(), "".into()));
    assert_eq!(interp.run("(- 5 3)"), ("2".into(), "".into()));
    assert_eq!(interp.run("(* 4 2.5)"), ("10".into(), "".into()));
    assert_eq!(interp.run("(/ 7 2)"), ("3.5".into(), "".into()));
    assert_eq!(interp.run("(% 7 2)"), ("1".into(), "".into()));
    assert_eq!(interp.run("(< 1 2)"), ("1".into(), "".into()));
    assert_eq!(interp.run("(> 1 2)"), ("".into(), "".into()));
    assert_eq!(interp.run("(<= 2 2)"), ("1".into(), "".into()));
    assert_eq!(interp.run("(>= 1 2)"), ("".into(), "".into()));
    assert_eq!(interp.run("(= 2 2)"), ("1".into(), "".into()));
    assert_eq!(interp.run("(!= 2 2)"), ("".into(), "".into()));
}

#[test]
fn boolean_grid_does_not_short_circuit() {
    let interp = Interpreter::new();
    assert_eq!(interp.run("(& 1 0)"), ("".into(), "".into()));
    assert_eq!(interp.run("(| 0 1)"), ("1".into(), "".into()));
    assert_eq!(interp.run("(^ 1 0)"), ("1".into(), "".into()));
    assert_eq!(interp.run("(! 0)"), ("1".into(), "".into()));
}

#[test]
fn type_predicates_cover_every_shape() {
    let interp = Interpreter::new();
    assert_eq!(interp.run("(empty ())"), ("1".into(), "".into()));
    assert_eq!(interp.run("(empty (1))"), ("".into(), "".into()));
    assert_eq!(interp.run("(atom x)"), ("1".into(), "".into()));
    assert_eq!(interp.run("(atom (1 2))"), ("".into(), "".into()));
    assert_eq!(interp.run("(list (1 2))"), ("1".into(), "".into()));
    assert_eq!(interp.run("(func +)"), ("1".into(), "".into()));
    assert_eq!(interp.run("(func (fn x x))"), ("1".into(), "".into()));
}

#[test]
fn math_proxy_grid() {
    let interp = Interpreter::new();
    assert_eq!(interp.run("(sqrt 9)"), ("3".into(), "".into()));
    assert_eq!(interp.run("(abs (- 0 5))"), ("5".into(), "".into()));
    assert_eq!(interp.run("(floor 1.9)"), ("1".into(), "".into()));
    assert_eq!(interp.run("(ceil 1.1)"), ("2".into(), "".into()));
    assert_eq!(interp.run("(atan2 0 1)"), ("0".into(), "".into()));
    assert_eq!(interp.run("(log 10 100)"), ("2".into(), "".into()));
}

#[test]
fn list_grid() {
    let interp = Interpreter::new();
    assert_eq!(interp.run("(length (1 2 3))"), ("3".into(), "".into()));
    assert_eq!(interp.run("(reverse (1 2 3))"), ("(3 2 1)".into(), "".into()));
    assert_eq!(
        interp.run("(concat (1 2) (3 4))"),
        ("(1 2 3 4)".into(), "".into())
    );
    assert_eq!(interp.run("(iota 4)"), ("(0 1 2 3)".into(), "".into()));
    assert_eq!(interp.run("(repeat 3 x)"), ("(x x x)".into(), "".into()));
}

#[test]
fn recursive_user_function_via_def_and_if() {
    let interp = Interpreter::new();
    interp.run(
        "(def fact (fn n (if (<= n 1) 1 (* n (fact (- n 1))))))",
    );
    assert_eq!(interp.run("(fact 5)"), ("120".into(), "".into()));
}

#[test]
fn closures_capture_the_defining_scope() {
    let interp = Interpreter::new();
    assert_eq!(
        interp.run("(let add5 (fn x (+ x 5)) (add5 10))"),
        ("15".into(), "".into())
    );
}

#[test]
fn host_variable_read_write_readonly_and_insufficient_components() {
    let mut pos = [0.0_f64; 3];
    let mut interp = Interpreter::new();
    interp.register_var_f64("pos", pos.as_mut_ptr(), 3, false);

    assert_eq!(interp.run("(set pos (1 2 3))"), ("".into(), "".into()));
    assert_eq!(pos, [1.0, 2.0, 3.0]);
    assert_eq!(interp.run("(get pos)"), ("(1 2 3)".into(), "".into()));

    let (_, err) = interp.run("(set pos (1 2))");
    assert_eq!(err, "Insufficient arguments (1 2)");
}

#[test]
fn host_callback_dispatch_round_trips_string_arguments() {
    fn join(args: Vec<String>) -> Vec<String> {
        vec![args.join(",")]
    }

    let mut interp = Interpreter::new();
    interp.register_func("join", join);
    assert_eq!(
        interp.run("(call join (a b c))"),
        ("(a,b,c)".into(), "".into())
    );
}

#[test]
fn unbalanced_parens_are_tolerated_at_the_top_level() {
    let interp = Interpreter::new();
    assert_eq!(interp.run("(+ 1 2"), ("3".into(), "".into()));
}

#[test]
fn block_comments_are_skipped_before_evaluation() {
    let interp = Interpreter::new();
    assert_eq!(
        interp.run("{ a block comment } (+ 1 1)"),
        ("2".into(), "".into())
    );
}
