//! # NV
//!
//! A tiny line-oriented command language: `SET`, `GET`, `ADD`, `SUB`, and
//! `EXIT` over a table of named integers. One command per line; `##` and
//! `//` start comments; malformed lines are reported and skipped.
//!
//! ```
//! use nv::lang::Error;
//! use nv::mach::{Runtime, Signal, Sink};
//!
//! struct Out(Vec<String>);
//!
//! impl Sink for Out {
//!     fn print(&mut self, text: &str) {
//!         self.0.push(text.to_string());
//!     }
//!     fn error(&mut self, error: &Error) {
//!         panic!("{}", error);
//!     }
//! }
//!
//! let mut runtime = Runtime::new();
//! let mut out = Out(Vec::new());
//! let signal = runtime.interpret("SET x = 2\nADD x, 40\nGET x\n", &mut out);
//! assert_eq!(signal, Signal::EndOfInput);
//! assert_eq!(out.0, vec!["x = 2".to_string(), "x = 42".to_string()]);
//! ```

pub mod lang;
pub mod mach;
pub mod term;
