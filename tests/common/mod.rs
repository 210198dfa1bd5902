use basic::mach::{Capture, Runtime};

/// Everything printed and reported since the last call.
pub fn exec(runtime: &mut Runtime<Capture>) -> String {
    runtime.host_mut().take_transcript()
}

/// Enters program lines, each of which must pass the syntax check.
#[allow(dead_code)]
pub fn enter_all(runtime: &mut Runtime<Capture>, lines: &[&str]) {
    for line in lines {
        assert!(runtime.enter(line), "refused {:?}", line);
    }
}
