use std::cell::Cell;

use crate::{finally, guard};

#[test]
fn finally_runs_on_scope_exit() {
    let ran = Cell::new(false);
    {
        let _g = finally(|| ran.set(true));
        assert!(!ran.get());
    }
    assert!(ran.get());
}

#[test]
fn finally_dismissed_does_not_run() {
    let ran = Cell::new(false);
    {
        let mut g = finally(|| ran.set(true));
        assert!(g.is_armed());
        g.dismiss();
        assert!(!g.is_armed());
    }
    assert!(!ran.get());
}

#[test]
fn finally_runs_during_unwind() {
    let ran = Cell::new(false);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _g = finally(|| ran.set(true));
        panic!("boom");
    }));
    assert!(result.is_err());
    assert!(ran.get());
}

#[test]
fn guard_derefs_and_sees_value_last() {
    let mut log = Vec::new();
    {
        let mut g = guard(&mut log, |log| log.push("exit"));
        g.push("body");
        assert_eq!(g.len(), 1);
    }
    assert_eq!(log, vec!["body", "exit"]);
}

#[test]
fn guard_dismissed_skips_exit() {
    let mut log: Vec<&str> = Vec::new();
    {
        let mut g = guard(&mut log, |log| log.push("exit"));
        g.dismiss();
    }
    assert!(log.is_empty());
}
