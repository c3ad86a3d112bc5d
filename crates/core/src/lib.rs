//! Railway-Oriented Programming primitives.
//!
//! This crate provides [`Outcome`], a value that is either a success holding a
//! payload or a failure holding an error, plus combinators for composing
//! fallible steps without branching at every stage:
//!
//! - **Constructors**: [`Outcome::success`], [`Outcome::failure`], [`Outcome::wrap`]
//! - **Inspection**: [`Outcome::is_ok`], [`Outcome::val`], [`Outcome::err`], [`Outcome::to_pair`]
//! - **Combinators**: `fallback`, `ensure`, `tap`, `pipe`, `map`, `fold` and friends
//! - **Extensions**: logged helpers and bridges from `Result`, `Option` and pairs
//!
//! # Example
//!
//! ```
//! use railway_core::{Error, Outcome};
//!
//! let piped = Outcome::<i32>::success(42).pipe(|v| (format!("Value: {v}"), None));
//! assert_eq!(piped.val(), "Value: 42");
//!
//! let failed = Outcome::<i32>::failure(Error::msg("x"));
//! assert_eq!(failed.fold(|v| v.to_string(), |e| format!("Error: {e}")), "Error: x");
//! ```

pub mod error;
pub mod ext;
pub mod functional;
pub mod outcome;

pub use error::Error;
pub use ext::{OptionExt, OutcomeExt, PairExt, ResultExt};
pub use outcome::Outcome;
