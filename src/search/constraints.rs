//! The constraint table and the independent verifier.
//!
//! [`verify`] evaluates each constraint directly from its formula. It does
//! not share any code with the search stages, so it can audit their output.

use super::types::{Assignment, Var, Variant};

/// Values beyond this magnitude are not evaluated: the constraint is
/// reported as unsatisfied instead of risking overflow.
const OPERAND_LIMIT: u64 = 1 << 40;

/// A named polynomial equality or inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Constraint {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C8,
    C9,
    C10,
    C11,
    C12,
    C13,
    C14,
    C15,
    C16,
    C17,
}

impl Constraint {
    /// Every constraint in definition order.
    pub const ALL: [Constraint; 17] = [
        Constraint::C1,
        Constraint::C2,
        Constraint::C3,
        Constraint::C4,
        Constraint::C5,
        Constraint::C6,
        Constraint::C7,
        Constraint::C8,
        Constraint::C9,
        Constraint::C10,
        Constraint::C11,
        Constraint::C12,
        Constraint::C13,
        Constraint::C14,
        Constraint::C15,
        Constraint::C16,
        Constraint::C17,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Constraint::C1 => "C1",
            Constraint::C2 => "C2",
            Constraint::C3 => "C3",
            Constraint::C4 => "C4",
            Constraint::C5 => "C5",
            Constraint::C6 => "C6",
            Constraint::C7 => "C7",
            Constraint::C8 => "C8",
            Constraint::C9 => "C9",
            Constraint::C10 => "C10",
            Constraint::C11 => "C11",
            Constraint::C12 => "C12",
            Constraint::C13 => "C13",
            Constraint::C14 => "C14",
            Constraint::C15 => "C15",
            Constraint::C16 => "C16",
            Constraint::C17 => "C17",
        }
    }

    /// The formula, for display.
    pub fn expression(self) -> &'static str {
        match self {
            Constraint::C1 => "A = B² - C²",
            Constraint::C2 => "C + E > B",
            Constraint::C3 => "D = B² - 4A",
            Constraint::C4 => "(B - C)² = E·F·B - 396",
            Constraint::C5 => "C + D + E + F < 125",
            Constraint::C6 => "(G + I)³ - 4 = (H - A)²",
            Constraint::C7 => "C·E·F + 40 = (H - F - I)·(I + G)",
            Constraint::C8 => "(C + I)² = B·E·(I + 3)",
            Constraint::C9 => "G + I < E + 3",
            Constraint::C10 => "D + H > 180",
            Constraint::C11 => "J < D + E + F",
            Constraint::C12 => "J > H + E + F + G + I",
            Constraint::C13 => "K·L·M = B·(K + 5)",
            Constraint::C14 => "F³ = K²·(L - 29) + 25",
            Constraint::C15 => "H·M² = L·G - 3",
            Constraint::C16 => "J + M = (L - 15)·(E + G)",
            Constraint::C17 => "K³ = (J - 4)·(L - 20)",
        }
    }

    /// The variables the formula mentions.
    pub fn variables(self) -> &'static [Var] {
        use Var::*;
        match self {
            Constraint::C1 => &[A, B, C],
            Constraint::C2 => &[B, C, E],
            Constraint::C3 => &[A, B, D],
            Constraint::C4 => &[B, C, E, F],
            Constraint::C5 => &[C, D, E, F],
            Constraint::C6 => &[A, G, H, I],
            Constraint::C7 => &[C, E, F, G, H, I],
            Constraint::C8 => &[B, C, E, I],
            Constraint::C9 => &[E, G, I],
            Constraint::C10 => &[D, H],
            Constraint::C11 => &[D, E, F, J],
            Constraint::C12 => &[E, F, G, H, I, J],
            Constraint::C13 => &[B, K, L, M],
            Constraint::C14 => &[F, K, L],
            Constraint::C15 => &[G, H, L, M],
            Constraint::C16 => &[E, G, J, L, M],
            Constraint::C17 => &[J, K, L],
        }
    }

    /// Evaluates the formula against `assignment`.
    ///
    /// Returns `None` when a mentioned variable is unbound or too large to
    /// evaluate exactly.
    pub fn evaluate(self, assignment: &Assignment) -> Option<bool> {
        let get = |var: Var| {
            assignment
                .get(var)
                .filter(|value| value.unsigned_abs() <= OPERAND_LIMIT)
                .map(i128::from)
        };

        let holds = match self {
            Constraint::C1 => {
                let (a, b, c) = (get(Var::A)?, get(Var::B)?, get(Var::C)?);
                a == b * b - c * c
            }
            Constraint::C2 => {
                let (b, c, e) = (get(Var::B)?, get(Var::C)?, get(Var::E)?);
                c + e > b
            }
            Constraint::C3 => {
                let (a, b, d) = (get(Var::A)?, get(Var::B)?, get(Var::D)?);
                d == b * b - 4 * a
            }
            Constraint::C4 => {
                let (b, c) = (get(Var::B)?, get(Var::C)?);
                let (e, f) = (get(Var::E)?, get(Var::F)?);
                (b - c) * (b - c) == e * f * b - 396
            }
            Constraint::C5 => {
                let (c, d) = (get(Var::C)?, get(Var::D)?);
                let (e, f) = (get(Var::E)?, get(Var::F)?);
                c + d + e + f < 125
            }
            Constraint::C6 => {
                let (a, g) = (get(Var::A)?, get(Var::G)?);
                let (h, i) = (get(Var::H)?, get(Var::I)?);
                let s = g + i;
                s * s * s - 4 == (h - a) * (h - a)
            }
            Constraint::C7 => {
                let (c, e, f) = (get(Var::C)?, get(Var::E)?, get(Var::F)?);
                let (g, h, i) = (get(Var::G)?, get(Var::H)?, get(Var::I)?);
                c * e * f + 40 == (h - f - i) * (i + g)
            }
            Constraint::C8 => {
                let (b, c) = (get(Var::B)?, get(Var::C)?);
                let (e, i) = (get(Var::E)?, get(Var::I)?);
                (c + i) * (c + i) == b * e * (i + 3)
            }
            Constraint::C9 => {
                let (e, g, i) = (get(Var::E)?, get(Var::G)?, get(Var::I)?);
                g + i < e + 3
            }
            Constraint::C10 => get(Var::D)? + get(Var::H)? > 180,
            Constraint::C11 => {
                let (d, e) = (get(Var::D)?, get(Var::E)?);
                let (f, j) = (get(Var::F)?, get(Var::J)?);
                j < d + e + f
            }
            Constraint::C12 => {
                let (e, f, g) = (get(Var::E)?, get(Var::F)?, get(Var::G)?);
                let (h, i, j) = (get(Var::H)?, get(Var::I)?, get(Var::J)?);
                j > h + e + f + g + i
            }
            Constraint::C13 => {
                let (b, k) = (get(Var::B)?, get(Var::K)?);
                let (l, m) = (get(Var::L)?, get(Var::M)?);
                k * l * m == b * (k + 5)
            }
            Constraint::C14 => {
                let (f, k, l) = (get(Var::F)?, get(Var::K)?, get(Var::L)?);
                f * f * f == k * k * (l - 29) + 25
            }
            Constraint::C15 => {
                let (g, h) = (get(Var::G)?, get(Var::H)?);
                let (l, m) = (get(Var::L)?, get(Var::M)?);
                h * m * m == l * g - 3
            }
            Constraint::C16 => {
                let (e, g, j) = (get(Var::E)?, get(Var::G)?, get(Var::J)?);
                let (l, m) = (get(Var::L)?, get(Var::M)?);
                j + m == (l - 15) * (e + g)
            }
            Constraint::C17 => {
                let (j, k, l) = (get(Var::J)?, get(Var::K)?, get(Var::L)?);
                k * k * k == (j - 4) * (l - 20)
            }
        };
        Some(holds)
    }
}

/// Per-constraint outcome of [`verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Whether every checked constraint holds. False when nothing was checked.
    pub all_satisfied: bool,

    /// Results in constraint order.
    pub results: Vec<(Constraint, bool)>,
}

impl Verification {
    /// The verdict for `constraint`, if it was checked.
    pub fn get(&self, constraint: Constraint) -> Option<bool> {
        self.results
            .iter()
            .find(|(c, _)| *c == constraint)
            .map(|&(_, ok)| ok)
    }

    /// Constraints that did not hold.
    pub fn failed(&self) -> impl Iterator<Item = Constraint> + '_ {
        self.results
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|&(c, _)| c)
    }

    fn empty() -> Self {
        Self {
            all_satisfied: false,
            results: Vec::new(),
        }
    }
}

/// Rechecks every constraint of `variant` against `assignment`.
///
/// An unbound variable makes the constraints that mention it fail.
pub fn verify(assignment: &Assignment, variant: Variant) -> Verification {
    let results: Vec<(Constraint, bool)> = variant
        .constraints()
        .iter()
        .map(|&c| (c, c.evaluate(assignment).unwrap_or(false)))
        .collect();
    let all_satisfied = !results.is_empty() && results.iter().all(|&(_, ok)| ok);
    Verification {
        all_satisfied,
        results,
    }
}

/// Like [`verify`], selecting the variant by name.
///
/// An unsupported selector checks nothing and reports `all_satisfied == false`.
pub fn verify_named(assignment: &Assignment, selector: &str) -> Verification {
    match selector.parse::<Variant>() {
        Ok(variant) => verify(assignment, variant),
        Err(_) => Verification::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(values: &[i64]) -> Assignment {
        Var::ALL.iter().copied().zip(values.iter().copied()).collect()
    }

    fn solution_a() -> Assignment {
        assignment(&[60, 16, 14, 16, 5, 5])
    }

    fn solution_c() -> Assignment {
        assignment(&[76, 20, 18, 96, 4, 5, 3, 87, 2, 104, 10, 30, 1])
    }

    #[test]
    fn test_known_solutions_verify() {
        let a = verify(&solution_a(), Variant::A);
        assert!(a.all_satisfied);
        assert_eq!(a.results.len(), 5);

        let b = verify(&assignment(&[76, 20, 18, 96, 4, 5, 3, 87, 2, 102]), Variant::B);
        assert!(b.all_satisfied, "failed: {:?}", b.failed().collect::<Vec<_>>());

        let c = verify(&solution_c(), Variant::C);
        assert!(c.all_satisfied, "failed: {:?}", c.failed().collect::<Vec<_>>());
        assert_eq!(c.results.len(), 17);
    }

    #[test]
    fn test_perturbed_value_fails_exact_constraints() {
        let broken = solution_a().with(Var::E, 6);
        let result = verify(&broken, Variant::A);
        assert!(!result.all_satisfied);
        assert_eq!(result.failed().collect::<Vec<_>>(), vec![Constraint::C4]);

        let broken = solution_c().with(Var::J, 103);
        let result = verify(&broken, Variant::C);
        assert_eq!(
            result.failed().collect::<Vec<_>>(),
            vec![Constraint::C16, Constraint::C17]
        );
    }

    #[test]
    fn test_missing_variable_fails() {
        let partial = solution_a().restrict(&[Var::A, Var::B, Var::C]);
        let result = verify(&partial, Variant::A);
        assert!(!result.all_satisfied);
        assert_eq!(result.get(Constraint::C1), Some(true));
        assert_eq!(result.get(Constraint::C3), Some(false));
        assert_eq!(Constraint::C3.evaluate(&partial), None);
    }

    #[test]
    fn test_only_variant_constraints_checked() {
        // A solution for A says nothing about B's constraints.
        let result = verify(&solution_a(), Variant::A);
        assert_eq!(result.get(Constraint::C6), None);

        let result = verify(&solution_a(), Variant::B);
        assert!(!result.all_satisfied);
        assert_eq!(result.results.len(), 12);
    }

    #[test]
    fn test_verify_named() {
        assert!(verify_named(&solution_a(), "A").all_satisfied);

        let unknown = verify_named(&solution_a(), "Z");
        assert!(!unknown.all_satisfied);
        assert!(unknown.results.is_empty());
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let huge = assignment(&[i64::MAX, i64::MIN, 3, 4, 5, 6]);
        let result = verify(&huge, Variant::A);
        assert!(!result.all_satisfied);
        assert_eq!(result.get(Constraint::C1), Some(false));
    }

    #[test]
    fn test_constraint_metadata() {
        for c in Constraint::ALL {
            assert!(c.name().starts_with('C'));
            assert!(!c.expression().is_empty());
            let vars = c.variables();
            assert!(vars.windows(2).all(|w| w[0] < w[1]), "{} vars unsorted", c.name());
        }
        assert_eq!(Constraint::C17.name(), "C17");
    }
}
