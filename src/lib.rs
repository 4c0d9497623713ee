#![allow(nonstandard_style)]

//! An interpreter for C@, a line-oriented integer calculator language.
//!
//! ```text
//! config dec
//! x = 2 - -2
//! print x * ( 3 + 1 )
//! config bin
//! print x
//! ```

pub mod error_handling;
pub mod evaluating;
pub mod formatting;
pub mod parsing;
pub mod scanning;

pub use error_handling::{CatError, Result};
pub use evaluating::Interpreter;
pub use formatting::OutputMode;
