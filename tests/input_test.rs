mod common;
use basic::mach::{Key, Runtime};
use common::*;

#[test]
fn test_input_number() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 INPUT A", "20 PRINT A*2"]);
    r.host_mut().type_line("21");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "42\n0/20\n");
}

#[test]
fn test_input_takes_an_expression() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 A=5", "20 INPUT B", "30 PRINT B"]);
    r.host_mut().type_line("A*2+(1)");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "11\n0/30\n");
}

#[test]
fn test_input_retries_after_a_mistake() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 INPUT A", "20 PRINT A"]);
    r.host_mut().type_line("3+");
    r.host_mut().push_key(Key::Delete);
    r.host_mut().push_key(Key::Delete);
    r.host_mut().type_line("5");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "5\n0/20\n");
}

#[test]
fn test_input_string() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 INPUT N$", "20 PRINT N$;N$"]);
    r.host_mut().type_line("AB");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "ABAB\n0/20\n");
}

#[test]
fn test_input_string_takes_text_as_typed() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 INPUT N$", "20 PRINT LEN(N$)"]);
    r.host_mut().type_line("1+1");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "3\n0/20\n");
}

#[test]
fn test_break_during_input() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 INPUT A", "20 PRINT A"]);
    r.host_mut().push_key(Key::Break);
    r.enter("RUN");
    assert_eq!(exec(&mut r), "9/20\n");
    assert!(r.edit().text().is_empty());
}

#[test]
fn test_input_runs_out_of_keys() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 INPUT A"]);
    r.enter("RUN");
    assert_eq!(exec(&mut r), "9/0\n");
}

#[test]
fn test_direct_input_is_refused() {
    let mut r = Runtime::default();
    r.enter("INPUT A");
    assert_eq!(exec(&mut r), "8/0\n");
}
