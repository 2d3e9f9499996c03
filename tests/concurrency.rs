// ABOUTME: Verifies Interpreter::run is safe to call concurrently from multiple host threads

use eli::Interpreter;
use std::sync::Arc;
use std::thread;

#[test]
fn concurrent_runs_each_see_their_own_def_and_do_not_corrupt_each_other() {
    let interp = Arc::new(Interpreter::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let interp = Arc::clone(&interp);
            thread::spawn(move || {
                let name = format!("t{i}");
                let script = format!("(seq (def {name} {i}) (* {name} {name}))");
                interp.run(&script)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (result, error) = handle.join().expect("worker thread panicked");
        assert_eq!(error, "");
        assert_eq!(result, (i * i).to_string());
    }
}

#[test]
fn concurrent_writes_to_distinct_host_variables_are_isolated() {
    let mut a: f64 = 0.0;
    let mut b: f64 = 0.0;
    let mut interp = Interpreter::new();
    interp.register_var_f64("a", &mut a as *mut f64, 1, false);
    interp.register_var_f64("b", &mut b as *mut f64, 1, false);
    let interp = Arc::new(interp);

    let i1 = Arc::clone(&interp);
    let h1 = thread::spawn(move || i1.run("(set a (1))"));
    let i2 = Arc::clone(&interp);
    let h2 = thread::spawn(move || i2.run("(set b (2))"));

    h1.join().expect("thread a panicked");
    h2.join().expect("thread b panicked");

    assert_eq!(a, 1.0);
    assert_eq!(b, 2.0);
}
