//! Front ends: a full screen terminal and a batch runner for files.

extern crate ansi_term;
extern crate ctrlc;

mod batch;
mod screen;

pub use batch::Batch;
pub use screen::Terminal;

use ansi_term::Style;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set from the Ctrl-C handler, taken by whichever host polls for break.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn install() -> Interrupt {
        let interrupt = Interrupt::default();
        let flag = interrupt.0.clone();
        if let Err(error) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
            eprintln!("{}", bold(&format!("Ctrl-C unavailable: {}", error)));
        }
        interrupt
    }

    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Milliseconds on the wall clock.
fn now() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
