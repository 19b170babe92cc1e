//! Bounded brute-force search for small nonlinear integer constraint systems.
//!
//! Solves a fixed puzzle in three escalating variants:
//!
//! - **Variant A**: six variables (A-F) under constraints C1-C5.
//! - **Variant B**: ten variables (A-J), adding C6-C12.
//! - **Variant C**: thirteen variables (A-M), adding C13-C17.
//!
//! Every variable ranges over a small inclusive domain (`[1, 120]` by
//! default). The search derives variables in closed form wherever an
//! equation pins them down, prunes as soon as a constraint over bound
//! variables fails, and returns the first consistent assignment together
//! with the number of binding attempts.
//!
//! # Modules
//!
//! - [`search`]: the engine, the constraint table and the verifier.
//! - [`export`]: `Variable,Value` CSV output.
//! - [`report`]: console report of an outcome.
//!
//! # Example
//!
//! ```
//! use u_dioph::search::{solve, verify, Var, Variant};
//!
//! let outcome = solve(Variant::A);
//! let assignment = outcome.assignment.as_ref().unwrap();
//! assert_eq!(assignment.get(Var::A), Some(60));
//! assert!(verify(assignment, Variant::A).all_satisfied);
//! ```

mod error;
pub mod export;
pub mod report;
pub mod search;

pub use error::{Error, Result};
