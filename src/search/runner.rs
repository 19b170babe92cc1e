//! Search entry points.

use super::config::{Domain, SearchConfig};
use super::constraints::{verify, Verification};
use super::stages::{base_candidates, extended_candidates, full_candidates, SearchContext};
use super::types::{Assignment, Variant};
use log::{debug, trace};
use std::ops::ControlFlow;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// A satisfying assignment was found.
    Solved,
    /// The whole domain was enumerated without a solution.
    Exhausted,
    /// The variant selector was not recognised; nothing was searched.
    Unsupported,
}

/// Result of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// The variant searched, `None` for an unsupported selector.
    pub variant: Option<Variant>,

    pub status: SearchStatus,

    /// The first assignment found, in search order.
    pub assignment: Option<Assignment>,

    /// Number of variable-binding trials, successful or not.
    pub attempts: u64,
}

impl SearchOutcome {
    /// The outcome for a selector outside `{A, B, C}`.
    pub fn unsupported() -> Self {
        Self {
            variant: None,
            status: SearchStatus::Unsupported,
            assignment: None,
            attempts: 0,
        }
    }

    pub fn is_solution_found(&self) -> bool {
        self.status == SearchStatus::Solved
    }

    /// Independent recheck of the found assignment, if any.
    pub fn verification(&self) -> Option<Verification> {
        let variant = self.variant?;
        self.assignment
            .as_ref()
            .map(|assignment| verify(assignment, variant))
    }

    /// The `(assignment, attempts)` pair.
    pub fn into_parts(self) -> (Option<Assignment>, u64) {
        (self.assignment, self.attempts)
    }
}

/// One root value's share of the search.
#[derive(Debug)]
struct RootBranch {
    root: i64,
    assignment: Option<Assignment>,
    attempts: u64,
}

/// Executes the bounded search.
///
/// # Usage
///
/// ```
/// use u_dioph::search::{SearchConfig, SearchRunner, Variant, Var};
///
/// let outcome = SearchRunner::run(Variant::A, &SearchConfig::default());
/// let assignment = outcome.assignment.unwrap();
/// assert_eq!(assignment.get(Var::B), Some(16));
/// assert_eq!(outcome.attempts, 154);
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Searches `variant` and returns the first solution in search order.
    ///
    /// Roots (values of B) are tried in ascending order, each with its own
    /// attempt counter. The reported count covers every root up to and
    /// including the one that produced the solution.
    pub fn run(variant: Variant, config: &SearchConfig) -> SearchOutcome {
        let domain = config.domain;

        let outcome = search_roots(variant, domain, config.parallel, |root| {
            search_root(variant, domain, root)
        });

        match &outcome.assignment {
            Some(assignment) => debug!(
                "variant {variant}: solved after {} attempts: {assignment}",
                outcome.attempts
            ),
            None => debug!(
                "variant {variant}: exhausted [{}, {}] after {} attempts",
                domain.min(),
                domain.max(),
                outcome.attempts
            ),
        }
        outcome
    }
}

/// Searches `variant` over the default domain.
pub fn solve(variant: Variant) -> SearchOutcome {
    SearchRunner::run(variant, &SearchConfig::default())
}

/// Like [`solve`], selecting the variant by name.
///
/// An unsupported selector yields [`SearchOutcome::unsupported`]: no
/// assignment and zero attempts.
pub fn solve_named(selector: &str) -> SearchOutcome {
    match selector.parse::<Variant>() {
        Ok(variant) => solve(variant),
        Err(err) => {
            debug!("{err}");
            SearchOutcome::unsupported()
        }
    }
}

fn search_root(variant: Variant, domain: Domain, root: i64) -> RootBranch {
    let mut ctx = SearchContext::new(domain);

    let flow = match variant {
        Variant::A => base_candidates(&mut ctx, root, |_, base| {
            ControlFlow::Break(Assignment::from(*base))
        }),
        Variant::B => base_candidates(&mut ctx, root, |ctx, base| {
            extended_candidates(ctx, base, |_, extended| {
                ControlFlow::Break(Assignment::from(*extended))
            })
        }),
        Variant::C => base_candidates(&mut ctx, root, |ctx, base| {
            extended_candidates(ctx, base, |ctx, extended| {
                full_candidates(ctx, extended, |_, full| {
                    ControlFlow::Break(Assignment::from(*full))
                })
            })
        }),
    };

    let assignment = match flow {
        ControlFlow::Break(assignment) => Some(assignment),
        ControlFlow::Continue(()) => None,
    };
    trace!(
        "variant {variant}: root {root} done, {} attempts, solved: {}",
        ctx.attempts(),
        assignment.is_some()
    );

    RootBranch {
        root,
        assignment,
        attempts: ctx.attempts(),
    }
}

/// Drives `search` over every root of `domain` and merges the branches.
///
/// Sequentially, roots are searched lazily and nothing past the first
/// solved root runs.
fn search_roots<F>(variant: Variant, domain: Domain, parallel: bool, search: F) -> SearchOutcome
where
    F: Fn(i64) -> RootBranch + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return merge(variant, search_parallel(domain, &search));
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        if parallel {
            debug!("built without the `parallel` feature, searching roots sequentially");
        }
    }

    merge(variant, (domain.min()..=domain.max()).map(search))
}

/// Searches roots on the rayon pool, skipping any root above the smallest
/// one already solved. Every root below the winner is still searched, so
/// the merged outcome equals the sequential one.
#[cfg(feature = "parallel")]
fn search_parallel<F>(domain: Domain, search: &F) -> Vec<RootBranch>
where
    F: Fn(i64) -> RootBranch + Sync,
{
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    let solved_root = AtomicI64::new(i64::MAX);
    let mut branches: Vec<RootBranch> = (domain.min()..=domain.max())
        .into_par_iter()
        .filter(|&root| root < solved_root.load(Ordering::Relaxed))
        .map(|root| {
            let branch = search(root);
            if branch.assignment.is_some() {
                solved_root.fetch_min(root, Ordering::Relaxed);
            }
            branch
        })
        .collect();
    branches.sort_by_key(|branch| branch.root);
    branches
}

/// Folds root branches in ascending root order; the smallest root with a
/// solution wins.
fn merge(variant: Variant, branches: impl IntoIterator<Item = RootBranch>) -> SearchOutcome {
    let mut attempts = 0u64;
    for branch in branches {
        attempts += branch.attempts;
        if let Some(assignment) = branch.assignment {
            trace!("variant {variant}: first solution at root {}", branch.root);
            return SearchOutcome {
                variant: Some(variant),
                status: SearchStatus::Solved,
                assignment: Some(assignment),
                attempts,
            };
        }
    }
    SearchOutcome {
        variant: Some(variant),
        status: SearchStatus::Exhausted,
        assignment: None,
        attempts,
    }
}
