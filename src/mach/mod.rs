/*!
## Machine Module

The command interpreter and its name bindings.

*/

mod runtime;
mod var;

pub use runtime::Runtime;
pub use runtime::Signal;
pub use runtime::Sink;
pub use var::Var;
