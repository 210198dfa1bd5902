//! # Pocket BASIC
//!
//! Without a file the machine takes over the terminal. With one, each
//! line of the file is typed in, the program is run and the output goes
//! to stdout.

use basic::mach::{Config, Runtime};
use basic::slot::{self, FileSlots, HttpSlots, LinkSlots, MemorySlots, Slots};
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::TcpListener;
use std::path::PathBuf;

mod term;

use term::{bold, Batch, Interrupt, Terminal};

#[derive(Parser)]
#[command(name = "basic", about = "A tiny BASIC for small machines")]
struct Cli {
    /// Program to type in and run.
    file: Option<PathBuf>,

    /// Directory holding one file per save slot.
    #[arg(long)]
    slots: Option<PathBuf>,

    /// Storage controller reached over TCP.
    #[arg(long, value_name = "HOST:PORT", conflicts_with_all = ["slots", "http"])]
    link: Option<String>,

    /// Storage controller reached over HTTP.
    #[arg(long, value_name = "URL", conflicts_with = "slots")]
    http: Option<String>,

    /// Be the storage controller, answering link requests from the
    /// slots directory.
    #[arg(long, value_name = "ADDR", conflicts_with_all = ["link", "http"])]
    serve: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let config = Config::default();
    if let Err(error) = run(cli, config) {
        eprintln!("{}", bold(&error.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(addr) = &cli.serve {
        let dir = cli.slots.clone().unwrap_or_else(|| PathBuf::from("slots"));
        let mut slots = FileSlots::new(dir, config.slot_count)?;
        return serve(addr, &mut slots, &config);
    }
    let slots = open_slots(&cli, &config)?;
    let interrupt = Interrupt::install();
    match &cli.file {
        Some(path) => {
            let lines = read_program(path)?;
            let stdin = std::io::stdin();
            let host = Batch::new(&config, stdin.lock(), std::io::stdout(), interrupt);
            let mut runtime = Runtime::new(config, host).with_slots(slots);
            for line in lines.iter().map(String::as_str).chain(std::iter::once("RUN")) {
                if !runtime.enter(line) {
                    eprintln!("{}", bold(&format!("C/0 {}", line)));
                }
            }
        }
        None => {
            let host = Terminal::new(&config, interrupt)?;
            Runtime::new(config, host).with_slots(slots).run();
        }
    }
    Ok(())
}

fn open_slots(cli: &Cli, config: &Config) -> Result<Box<dyn Slots>, slot::SlotError> {
    let count = config.slot_count;
    let block_size = config.block_size();
    let slots: Box<dyn Slots> = match (&cli.slots, &cli.link, &cli.http) {
        (_, Some(addr), _) => Box::new(LinkSlots::connect(addr.as_str(), count, block_size)?),
        (_, _, Some(url)) => Box::new(HttpSlots::new(url, count, block_size)?),
        (Some(dir), _, _) => Box::new(FileSlots::new(dir, count)?),
        _ => Box::new(MemorySlots::new(count)),
    };
    Ok(slots)
}

/// Lines of a program file, blank ones dropped.
fn read_program(path: &PathBuf) -> std::io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = vec![];
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn serve(addr: &str, slots: &mut FileSlots, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr)?;
    println!("Serving {} slots on {}", config.slot_count, listener.local_addr()?);
    for stream in listener.incoming() {
        let mut stream = stream?;
        if let Err(error) = slot::serve(&mut stream, slots, config.block_size()) {
            eprintln!("{}", bold(&error.to_string()));
        }
    }
    Ok(())
}
