mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_precedence() {
    let mut r = Runtime::default();
    r.enter("PRINT 1+2*3");
    assert_eq!(exec(&mut r), "7\n0/0\n");
    r.enter("PRINT (1+2)*3");
    assert_eq!(exec(&mut r), "9\n0/0\n");
    r.enter("PRINT 10-4-3");
    assert_eq!(exec(&mut r), "3\n0/0\n");
}

#[test]
fn test_division_truncates() {
    let mut r = Runtime::default();
    r.enter("PRINT 7/2");
    assert_eq!(exec(&mut r), "3\n0/0\n");
    r.enter("PRINT -7/2");
    assert_eq!(exec(&mut r), "-3\n0/0\n");
}

#[test]
fn test_power() {
    let mut r = Runtime::default();
    r.enter("PRINT 2**3**2");
    assert_eq!(exec(&mut r), "64\n0/0\n");
    r.enter("PRINT -2**2");
    assert_eq!(exec(&mut r), "-4\n0/0\n");
    r.enter("PRINT 0**0");
    assert_eq!(exec(&mut r), "1\n0/0\n");
    r.enter("PRINT 2**-1");
    assert_eq!(exec(&mut r), "6/0\n");
}

#[test]
fn test_comparisons_and_logic() {
    let mut r = Runtime::default();
    r.enter("PRINT 1<2;1=2;2>=2;1<>1");
    assert_eq!(exec(&mut r), "-10-10\n0/0\n");
    r.enter("PRINT NOT 0");
    assert_eq!(exec(&mut r), "-1\n0/0\n");
    r.enter("PRINT 5 AND 3;5 OR 3");
    assert_eq!(exec(&mut r), "17\n0/0\n");
    r.enter("PRINT NOT 1=2");
    assert_eq!(exec(&mut r), "-1\n0/0\n");
}

#[test]
fn test_string_comparison() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT "A"<"B";"B"="B""#);
    assert_eq!(exec(&mut r), "-1-1\n0/0\n");
    assert!(!r.enter(r#"PRINT "A"<>"B""#));
    assert!(!r.enter(r#"PRINT "A"+"B""#));
    assert!(!r.enter(r#"PRINT "A"=1"#));
}

#[test]
fn test_overflow() {
    let mut r = Runtime::default();
    r.enter("PRINT 2000*2000*2000");
    assert_eq!(exec(&mut r), "6/0\n");
    r.enter("PRINT 1/0");
    assert_eq!(exec(&mut r), "6/0\n");
}

#[test]
fn test_nesting_limit() {
    let mut r = Runtime::default();
    let nested = |n: usize| format!("PRINT {}1{}", "(".repeat(n), ")".repeat(n));
    assert!(r.enter(&nested(15)));
    assert_eq!(exec(&mut r), "1\n0/0\n");
    assert!(!r.enter(&nested(16)));
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_variables() {
    let mut r = Runtime::default();
    r.enter("A=5");
    r.enter("LET B=A*2");
    assert_eq!(exec(&mut r), "0/0\n0/0\n");
    r.enter("PRINT A;B");
    assert_eq!(exec(&mut r), "510\n0/0\n");
    r.enter("PRINT C");
    assert_eq!(exec(&mut r), "2/0\n");
    r.enter(r#"N$="HI""#);
    r.enter("PRINT N$;N$");
    assert_eq!(exec(&mut r), "0/0\nHIHI\n0/0\n");
}

#[test]
fn test_assignment_types_must_match() {
    let mut r = Runtime::default();
    assert!(!r.enter(r#"A="X""#));
    assert!(!r.enter("A$=1"));
    assert!(!r.enter("ABS=1"));
    assert!(!r.enter("TIME=1"));
}

#[test]
fn test_functions() {
    let mut r = Runtime::default();
    r.enter("PRINT ABS(-5);SGN(-3);SGN(0)");
    assert_eq!(exec(&mut r), "5-10\n0/0\n");
    r.enter(r#"PRINT LEN("ABC");CODE("A");CODE("")"#);
    assert_eq!(exec(&mut r), "3330\n0/0\n");
    r.enter(r#"PRINT CHR$(38);STR$(42);VAL("-12")+1"#);
    assert_eq!(exec(&mut r), "F42-11\n0/0\n");
    r.enter(r#"PRINT VAL("X")"#);
    assert_eq!(exec(&mut r), "C/0\n");
    r.enter("PRINT CHR$(64)");
    assert_eq!(exec(&mut r), "6/0\n");
}

#[test]
fn test_function_argument_types() {
    let mut r = Runtime::default();
    assert!(!r.enter("PRINT LEN(1)"));
    assert!(!r.enter(r#"PRINT ABS("A")"#));
    assert!(!r.enter("PRINT CHR$(1)+1"));
}

#[test]
fn test_rnd() {
    let mut r = Runtime::default();
    r.enter("PRINT RND(1)");
    assert_eq!(exec(&mut r), "1\n0/0\n");
    r.enter("PRINT RND(0)");
    assert_eq!(exec(&mut r), "6/0\n");
    r.enter("A=RND(6)");
    r.enter("PRINT A>=1 AND A<=6");
    assert_eq!(exec(&mut r), "0/0\n-1\n0/0\n");
}

#[test]
fn test_time() {
    let mut r = Runtime::default();
    r.enter("PRINT TIME");
    assert_eq!(exec(&mut r), "0\n0/0\n");
    r.enter("WAIT 3000");
    r.enter("PRINT TIME");
    assert_eq!(exec(&mut r), "0/0\n3\n0/0\n");
}
