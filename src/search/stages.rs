//! Search stages shared by the variants.
//!
//! Each stage is an internal iterator: it enumerates its variables for a
//! fixed prefix, calls `visit` once per candidate that satisfies every
//! constraint bound so far, and stops as soon as `visit` breaks. Variant B
//! is the base stage feeding the extended stage; variant C adds the full
//! stage on top.
//!
//! Attempts are counted only here: once per root, second variable, E, F, G,
//! I, each H candidate, J, K, L and M that reaches its binding point.

use super::arith::{exact_div, exact_sqrt};
use super::config::Domain;
use super::types::{Assignment, Var};
use std::ops::ControlFlow;

/// Counter and domain owned by one search branch.
#[derive(Debug, Clone)]
pub(crate) struct SearchContext {
    domain: Domain,
    attempts: u64,
}

impl SearchContext {
    pub(crate) fn new(domain: Domain) -> Self {
        Self {
            domain,
            attempts: 0,
        }
    }

    pub(crate) fn attempts(&self) -> u64 {
        self.attempts
    }

    fn attempt(&mut self) {
        self.attempts += 1;
    }
}

/// A-F, consistent with C1-C5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Base {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
    pub e: i64,
    pub f: i64,
}

/// A-J, consistent with C1-C12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Extended {
    pub base: Base,
    pub g: i64,
    pub h: i64,
    pub i: i64,
    pub j: i64,
}

/// A-M, consistent with C1-C17.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Full {
    pub extended: Extended,
    pub k: i64,
    pub l: i64,
    pub m: i64,
}

impl From<Base> for Assignment {
    fn from(s: Base) -> Self {
        Assignment::new()
            .with(Var::A, s.a)
            .with(Var::B, s.b)
            .with(Var::C, s.c)
            .with(Var::D, s.d)
            .with(Var::E, s.e)
            .with(Var::F, s.f)
    }
}

impl From<Extended> for Assignment {
    fn from(s: Extended) -> Self {
        Assignment::from(s.base)
            .with(Var::G, s.g)
            .with(Var::H, s.h)
            .with(Var::I, s.i)
            .with(Var::J, s.j)
    }
}

impl From<Full> for Assignment {
    fn from(s: Full) -> Self {
        Assignment::from(s.extended)
            .with(Var::K, s.k)
            .with(Var::L, s.l)
            .with(Var::M, s.m)
    }
}

/// Enumerates A-F for the root `b`.
///
/// C is searched over `[min, b]`; A (C1) and D (C3) are derived and
/// range-checked. E is bounded below by C2 and above by C5, and only
/// divisors of the C4 product `E·F` are accepted, F being the cofactor.
pub(crate) fn base_candidates<T>(
    ctx: &mut SearchContext,
    b: i64,
    mut visit: impl FnMut(&mut SearchContext, &Base) -> ControlFlow<T>,
) -> ControlFlow<T> {
    let domain = ctx.domain;
    ctx.attempt();

    for c in domain.min()..=b {
        ctx.attempt();

        let a = b * b - c * c;
        if !domain.contains(a) {
            continue;
        }
        let d = b * b - 4 * a;
        if !domain.contains(d) {
            continue;
        }

        // C2: E > B - C.
        let e_min = domain.min().max(b - c + 1);
        // C5: E + F <= 124 - C - D, and F is at least the domain minimum.
        let e_max_by_sum = 124 - c - d - domain.min();
        if e_max_by_sum < e_min {
            continue;
        }

        // C4: E·F·B = (B - C)² + 396.
        let Some(product) = exact_div((b - c) * (b - c) + 396, b) else {
            continue;
        };
        let e_max = product.min(e_max_by_sum).min(domain.max());

        for e in e_min..=e_max {
            ctx.attempt();
            let Some(f) = exact_div(product, e) else {
                continue;
            };
            ctx.attempt();
            if !domain.contains(f) {
                continue;
            }
            if c + e <= b || c + d + e + f >= 125 {
                continue;
            }

            visit(ctx, &Base { a, b, c, d, e, f })?;
        }
    }

    ControlFlow::Continue(())
}

/// Enumerates G-J on top of an A-F candidate.
///
/// G and I are searched under C9 and filtered by C8. H is resolved from C6
/// by exact square root, trying both signs, then checked against C10 and
/// C7. J is enumerated over the open window left by C11 and C12.
pub(crate) fn extended_candidates<T>(
    ctx: &mut SearchContext,
    base: &Base,
    mut visit: impl FnMut(&mut SearchContext, &Extended) -> ControlFlow<T>,
) -> ControlFlow<T> {
    let domain = ctx.domain;
    let Base { a, b, c, d, e, f } = *base;

    // C9: G + I <= E + 2.
    let gi_max = e + 2;
    let g_max = domain.max().min(gi_max - domain.min());

    for g in domain.min()..=g_max {
        ctx.attempt();
        let i_max = domain.max().min(gi_max - g);

        for i in domain.min()..=i_max {
            ctx.attempt();
            if g + i >= e + 3 {
                continue;
            }
            if (c + i) * (c + i) != b * e * (i + 3) {
                continue;
            }

            let s = g + i;
            let Some(root) = exact_sqrt(s * s * s - 4) else {
                continue;
            };

            for h in [a + root, a - root] {
                ctx.attempt();
                if !domain.contains(h) {
                    continue;
                }
                if d + h <= 180 {
                    continue;
                }
                if c * e * f + 40 != (h - f - i) * (i + g) {
                    continue;
                }

                // C11: J < D + E + F. C12: J > H + E + F + G + I.
                let j_max = d + e + f - 1;
                let j_min = h + e + f + g + i + 1;
                if j_min > j_max {
                    continue;
                }

                let lo = j_min.max(domain.min());
                let hi = j_max.min(domain.max());
                for j in lo..=hi {
                    ctx.attempt();
                    let extended = Extended {
                        base: *base,
                        g,
                        h,
                        i,
                        j,
                    };
                    visit(ctx, &extended)?;
                }
            }
        }
    }

    ControlFlow::Continue(())
}

/// Enumerates K-M on top of an A-J candidate.
///
/// K is searched; L follows from C17 and M from C13, both only when the
/// division is exact and the denominator nonzero.
pub(crate) fn full_candidates<T>(
    ctx: &mut SearchContext,
    extended: &Extended,
    mut visit: impl FnMut(&mut SearchContext, &Full) -> ControlFlow<T>,
) -> ControlFlow<T> {
    let domain = ctx.domain;
    let Extended { base, g, h, j, .. } = *extended;
    let Base { b, e, f, .. } = base;

    for k in domain.min()..=domain.max() {
        ctx.attempt();

        // C17: L = K³ / (J - 4) + 20.
        let Some(quotient) = exact_div(k * k * k, j - 4) else {
            continue;
        };
        let l = quotient + 20;
        ctx.attempt();
        if !domain.contains(l) {
            continue;
        }
        if f * f * f != k * k * (l - 29) + 25 {
            continue;
        }

        // C13: M = B·(K + 5) / (K·L).
        let Some(m) = exact_div(b * (k + 5), k * l) else {
            continue;
        };
        ctx.attempt();
        if !domain.contains(m) {
            continue;
        }
        if h * m * m != l * g - 3 {
            continue;
        }
        if j + m != (l - 15) * (e + g) {
            continue;
        }

        visit(
            ctx,
            &Full {
                extended: *extended,
                k,
                l,
                m,
            },
        )?;
    }

    ControlFlow::Continue(())
}
