mod common;
use basic::mach::{Capture, Config, Runtime};
use basic::slot::{serve, FileSlots, LinkSlots, MemorySlots};
use common::*;
use std::net::TcpListener;
use std::thread;

fn with_memory_slots() -> Runtime<Capture> {
    Runtime::default().with_slots(Box::new(MemorySlots::new(4)))
}

#[test]
fn test_load_builtin_program() {
    let mut r = Runtime::default();
    r.enter("LOAD 0");
    assert_eq!(exec(&mut r), "0/0\n");
    assert_eq!(r.listing().lines().count(), 5);
    assert!(r.listing().starts_with("10 REM SQUARES\n"));
    r.enter("RUN");
    let out = exec(&mut r);
    assert!(out.starts_with(&format!("N{}N**2\n", " ".repeat(15))));
    assert!(out.ends_with("0/50\n"));
}

#[test]
fn test_save_and_load_keep_variables() {
    let mut r = with_memory_slots();
    enter_all(&mut r, &["10 PRINT A"]);
    r.enter("A=7");
    r.enter("SAVE 1");
    r.enter("NEW");
    assert!(r.program().is_empty());
    r.enter("LOAD 1");
    assert_eq!(exec(&mut r), "0/0\n0/0\n0/0\n0/0\n");
    assert_eq!(r.listing(), "10 PRINT A\n");
    r.enter("PRINT A");
    assert_eq!(exec(&mut r), "7\n0/0\n");
}

#[test]
fn test_save_in_a_program() {
    let mut r = with_memory_slots();
    enter_all(&mut r, &["10 SAVE 2", "20 PRINT \"DONE\""]);
    r.enter("RUN");
    assert_eq!(exec(&mut r), "DONE\n0/20\n");
    r.enter("NEW");
    r.enter("LOAD 2");
    assert_eq!(r.listing(), "10 SAVE 2\n20 PRINT \"DONE\"\n");
}

#[test]
fn test_slot_zero_is_read_only() {
    let mut r = with_memory_slots();
    r.enter("SAVE 0");
    assert_eq!(exec(&mut r), "3/0\n");
    assert_eq!(r.host().notices(), &["slot 0 is read only".to_string()]);
}

#[test]
fn test_load_empty_slot() {
    let mut r = with_memory_slots();
    enter_all(&mut r, &["10 PRINT 1"]);
    r.enter("LOAD 3");
    assert_eq!(exec(&mut r), "9/0\n");
    assert_eq!(r.listing(), "10 PRINT 1\n");
    assert_eq!(r.host().notices(), &["slot 3 is empty".to_string()]);
}

#[test]
fn test_slot_out_of_range() {
    let mut r = with_memory_slots();
    r.enter("SAVE 4");
    assert_eq!(exec(&mut r), "3/0\n");
    r.enter("LOAD -1");
    assert_eq!(exec(&mut r), "3/0\n");
}

#[test]
fn test_file_slots() {
    let dir = std::env::temp_dir().join(format!("basic-slot-test-{}", std::process::id()));
    let config = Config::default();
    let mut r = Runtime::default().with_slots(Box::new(FileSlots::new(&dir, config.slot_count).unwrap()));
    enter_all(&mut r, &["10 PRINT 42"]);
    r.enter("SAVE 5");
    assert_eq!(exec(&mut r), "0/0\n");
    assert!(dir.join("slot5.bin").exists());

    let mut other = Runtime::default().with_slots(Box::new(FileSlots::new(&dir, config.slot_count).unwrap()));
    other.enter("LOAD 5");
    other.enter("RUN");
    assert_eq!(exec(&mut other), "0/0\n42\n0/10\n");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_link_slots() {
    let config = Config::default();
    let block_size = config.block_size();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut slots = MemorySlots::new(4);
        serve(&mut stream, &mut slots, block_size)
    });

    let link = LinkSlots::connect(addr, 4, block_size).unwrap();
    let mut r = Runtime::default().with_slots(Box::new(link));
    enter_all(&mut r, &["10 PRINT \"LINK\""]);
    r.enter("LOAD 1");
    assert_eq!(exec(&mut r), "9/0\n");
    r.enter("SAVE 1");
    r.enter("NEW");
    r.enter("LOAD 1");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "0/0\n0/0\n0/0\nLINK\n0/10\n");
    drop(r);
    server.join().unwrap().unwrap();
}
