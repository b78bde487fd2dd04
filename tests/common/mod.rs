use nv::lang::Error;
use nv::mach::{Runtime, Signal, Sink};

/// Collects everything the interpreter reports, as rendered strings.
#[derive(Default)]
pub struct Capture {
    pub prints: Vec<String>,
    pub errors: Vec<String>,
}

impl Sink for Capture {
    fn print(&mut self, text: &str) {
        self.prints.push(text.to_string());
    }

    fn error(&mut self, error: &Error) {
        self.errors.push(error.to_string());
    }
}

pub fn run(source: &str) -> (Signal, Capture) {
    let mut runtime = Runtime::new();
    run_in(&mut runtime, source)
}

pub fn run_in(runtime: &mut Runtime, source: &str) -> (Signal, Capture) {
    let mut capture = Capture::default();
    let signal = runtime.interpret(source, &mut capture);
    (signal, capture)
}
