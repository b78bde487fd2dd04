extern crate ansi_term;
extern crate linefeed;

use crate::lang::Error;
use crate::mach::{Runtime, Signal, Sink};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal as TermSignal};
use std::fs;

pub fn main() {
    env_logger::init();
    if let Err(error) = run() {
        eprintln!("{}", error);
    }
}

fn run() -> std::io::Result<()> {
    let mut runtime = Runtime::new();
    let mut console = Console;
    match std::env::args().nth(1) {
        Some(filename) => {
            let source = fs::read_to_string(&filename)?;
            runtime.interpret(&source, &mut console);
            Ok(())
        }
        None => main_loop(&mut runtime, &mut console),
    }
}

fn main_loop(runtime: &mut Runtime, console: &mut Console) -> std::io::Result<()> {
    let interface = Interface::new("nv")?;
    interface.set_prompt("nv> ")?;
    interface.set_report_signal(TermSignal::Interrupt, true);
    loop {
        match interface.read_line()? {
            ReadResult::Input(string) => {
                if let Signal::Exit = runtime.interpret(&string, console) {
                    break;
                }
                interface.add_history_unique(string);
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(())
}

/// Renders interpreter output on the terminal, diagnostics in bold.
struct Console;

impl Sink for Console {
    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error(&mut self, error: &Error) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
    }
}
