mod common;
use basic::lang::charset;
use basic::mach::{Key, Runtime};
use common::*;

fn type_keys(r: &mut Runtime<basic::mach::Capture>, s: &str) {
    for code in charset::encode(s) {
        r.key(Key::Char(code));
    }
}

fn edit_text(r: &Runtime<basic::mach::Capture>) -> String {
    charset::decode(r.edit().text())
}

#[test]
fn test_cursor_starts_as_keyword() {
    let r = Runtime::default();
    assert_eq!(r.host().edit_line(), "[K]");
}

#[test]
fn test_cursor_follows_the_line() {
    let mut r = Runtime::default();
    type_keys(&mut r, "10 ");
    assert_eq!(r.host().edit_line(), "10 [K]");
    type_keys(&mut r, "PRINT ");
    assert_eq!(r.host().edit_line(), "10 PRINT [L]");
}

#[test]
fn test_error_marker() {
    let mut r = Runtime::default();
    type_keys(&mut r, "PRINT 1+");
    assert!(r.host().edit_line().contains("[S]"));
    assert!(r.edit().marker().is_some());
    assert!(!r.key(Key::Enter));
    assert_eq!(edit_text(&r), "PRINT 1+");
    type_keys(&mut r, "1");
    assert!(!r.host().edit_line().contains("[S]"));
    assert!(r.key(Key::Enter));
    assert_eq!(exec(&mut r), "2\n0/0\n");
}

#[test]
fn test_editing_keys() {
    let mut r = Runtime::default();
    type_keys(&mut r, "PRIMT");
    r.key(Key::Left);
    r.key(Key::Delete);
    type_keys(&mut r, "N");
    assert_eq!(edit_text(&r), "PRINT");
    r.key(Key::Right);
    type_keys(&mut r, " 5");
    assert!(r.key(Key::Enter));
    assert_eq!(exec(&mut r), "5\n0/0\n");
    assert!(r.edit().text().is_empty());
}

#[test]
fn test_lines_are_stored_in_order() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["30 PRINT 3", "10 PRINT 1", "20 PRINT 2"]);
    assert_eq!(r.listing(), "10 PRINT 1\n20 PRINT 2\n30 PRINT 3\n");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_replace_and_delete_lines() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1", "20 PRINT 2"]);
    enter_all(&mut r, &["10 PRINT 9", "20"]);
    assert_eq!(r.listing(), "10 PRINT 9\n");
}

#[test]
fn test_bad_line_numbers() {
    let mut r = Runtime::default();
    assert!(!r.enter("10000 PRINT"));
    assert!(!r.enter("0 PRINT"));
    assert!(r.enter("9999 PRINT"));
    assert_eq!(r.listing(), "9999 PRINT\n");
}

#[test]
fn test_unknown_statement_is_refused() {
    let mut r = Runtime::default();
    assert!(!r.enter("10 PAINT"));
    assert!(!r.enter("10 +1"));
    assert!(r.program().is_empty());
}

#[test]
fn test_question_mark_is_print() {
    let mut r = Runtime::default();
    assert!(r.enter("10 ?1"));
    assert_eq!(r.listing(), "10 PRINT 1\n");
}

#[test]
fn test_recall() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1", "20 PRINT 2", "30 PRINT 3"]);
    assert_eq!(r.edit().current(), 30);
    r.key(Key::Up);
    assert_eq!(edit_text(&r), "20 PRINT 2");
    r.key(Key::Up);
    assert_eq!(edit_text(&r), "10 PRINT 1");
    r.key(Key::Up);
    assert_eq!(edit_text(&r), "10 PRINT 1");
    r.key(Key::Down);
    assert_eq!(edit_text(&r), "20 PRINT 2");
    r.key(Key::Delete);
    type_keys(&mut r, "7");
    assert!(r.key(Key::Enter));
    assert_eq!(r.listing(), "10 PRINT 1\n20 PRINT 7\n30 PRINT 3\n");
}

#[test]
fn test_enter_on_empty_line_lists() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1", "20 GOTO 10"]);
    assert!(r.enter(""));
    assert_eq!(exec(&mut r), "10 PRINT 1\n20 GOTO 10\n");
}

#[test]
fn test_program_full() {
    let mut config = basic::mach::Config::default();
    config.program_size = 16;
    let host = basic::mach::Capture::new(&config);
    let mut r = Runtime::new(config, host);
    assert!(r.enter("10 PRINT 1"));
    assert!(!r.enter("20 PRINT 222222"));
    assert_eq!(exec(&mut r), "4/0\n");
    assert_eq!(r.listing(), "10 PRINT 1\n");
}

#[test]
fn test_run_via_key_queue() {
    let mut r = Runtime::default();
    r.host_mut().type_line("10 PRINT \"HI\"");
    r.host_mut().type_line("RUN");
    r.run();
    assert_eq!(exec(&mut r), "HI\n0/10\n");
}
