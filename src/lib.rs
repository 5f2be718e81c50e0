//! Mighty is a lightweight extension to Rust tests.
//!
//! It keeps test files short without hiding anything: wrap a [`Reporter`] in
//! a [`Myt`] and use its one-line checks. A failed check reports the calling
//! function, file and line together with both values, and the test keeps
//! running; the reporter decides what a failure means for the run.
//!
//! ```
//! use mighty::{Myt, Recorder};
//!
//! let rec = Recorder::test("example");
//! let m = Myt::new(&rec);
//!
//! // Expect "mighty".len() to be 6.
//! m.eq(6usize, "mighty".len(), None);
//!
//! // Expect the parsed value to be 42 AND no error.
//! m.exp_eq(42u8).result("42".parse::<u8>());
//!
//! // Tolerate rounding error.
//! m.near(0.3, 0.1 + 0.2, 1e-9, None);
//!
//! assert_eq!(rec.count(), 0);
//! ```
//!
//! # Testing `f64::abs`
//!
//! Without mighty:
//!
//! ```
//! for (input, exp) in [(1.0f64, 1.0f64), (-1.0, 1.0)] {
//!     let got = input.abs();
//!     if got != exp {
//!         panic!("Expected: {exp}, got: {got}");
//!     }
//! }
//! ```
//!
//! With mighty:
//!
//! ```
//! # let rec = mighty::Recorder::new();
//! let m = mighty::Myt::new(&rec);
//! for (input, exp) in [(1.0f64, 1.0f64), (-1.0, 1.0)] {
//!     m.eq(exp, input.abs(), None);
//! }
//! # assert_eq!(rec.count(), 0);
//! ```
//!
//! # Types matter
//!
//! Values are compared by dynamic type first: `m.eq(6, "mighty".len(), None)`
//! fails because `6` is an `i32`, and the failure comes with a second note
//! naming both types.

pub mod console;
pub mod failure;
pub mod frame;
pub mod funcs;
pub mod myt;
pub mod near;
pub mod operand;
pub mod reporter;

pub use crate::console::{ConsoleReporter, Failed};
pub use crate::failure::Failure;
pub use crate::frame::Caller;
pub use crate::myt::{Expect, ExpectNear, Myt};
pub use crate::near::{near, NearFn};
pub use crate::operand::Operand;
pub use crate::reporter::{Recorder, Reporter, RunKind};
