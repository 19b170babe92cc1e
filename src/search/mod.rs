//! Bounded search engine.
//!
//! Finds the first assignment of small integer variables satisfying one of
//! three nested constraint systems (variants A, B and C), together with the
//! number of binding attempts made along the way.
//!
//! # Key Components
//!
//! - **Types**: [`Var`], [`Variant`], [`Assignment`]
//! - **Constraints**: [`Constraint`], [`verify`] — independent post-hoc check
//! - **Configuration**: [`Domain`], [`SearchConfig`]
//! - **Runner**: [`SearchRunner`], [`solve`], [`solve_named`]
//!
//! # Search order
//!
//! The root B runs over the domain, C over `[min, B]`. Variables fixed by an
//! equation are derived in closed form (A, D, F, H, L, M) and range-checked;
//! everything else is enumerated over bounds tightened by the inequalities.
//! A branch is pruned as soon as a constraint over bound variables fails.
//!
//! The order is fixed, so the first solution and the attempt count are
//! reproducible:
//!
//! ```
//! use u_dioph::search::{solve, Variant};
//!
//! let (assignment, attempts) = solve(Variant::C).into_parts();
//! assert!(assignment.is_some());
//! assert_eq!(attempts, 941);
//! ```

mod arith;
mod config;
mod constraints;
mod runner;
mod stages;
mod types;

pub use arith::{exact_div, exact_sqrt, isqrt};
pub use config::{Domain, SearchConfig, MAX_DOMAIN_BOUND};
pub use constraints::{verify, verify_named, Constraint, Verification};
pub use runner::{solve, solve_named, SearchOutcome, SearchRunner, SearchStatus};
pub use types::{Assignment, Var, Variant};
