//! Variables, variants and assignments.

use super::config::Domain;
use super::constraints::Constraint;
use crate::error::Error;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A puzzle variable, one letter of the alphabet `A..=M`.
///
/// Variables order alphabetically, which is also the order used by every
/// report and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Var {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
}

impl Var {
    /// Every variable in alphabetical order.
    pub const ALL: [Var; 13] = [
        Var::A,
        Var::B,
        Var::C,
        Var::D,
        Var::E,
        Var::F,
        Var::G,
        Var::H,
        Var::I,
        Var::J,
        Var::K,
        Var::L,
        Var::M,
    ];

    /// The variable's letter.
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Var {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let upper = c.to_ascii_uppercase();
                Var::ALL
                    .iter()
                    .copied()
                    .find(|v| v.letter() == upper)
                    .ok_or_else(|| Error::UnknownVariable(s.to_owned()))
            }
            _ => Err(Error::UnknownVariable(s.to_owned())),
        }
    }
}

/// One of the three nested constraint systems.
///
/// Each variant's constraint set and variable set is a strict superset of
/// the previous variant's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Six variables (A-F), constraints C1-C5.
    A,
    /// Ten variables (A-J), constraints C1-C12.
    B,
    /// Thirteen variables (A-M), constraints C1-C17.
    C,
}

impl Variant {
    /// All supported variants, smallest first.
    pub const ALL: [Variant; 3] = [Variant::A, Variant::B, Variant::C];

    /// The constraints of this variant in definition order.
    pub fn constraints(self) -> &'static [Constraint] {
        let count = match self {
            Variant::A => 5,
            Variant::B => 12,
            Variant::C => 17,
        };
        static CONSTRAINTS: [Constraint; 17] = Constraint::ALL;
        &CONSTRAINTS[..count]
    }

    /// The variables this variant binds.
    pub fn variables(self) -> &'static [Var] {
        let count = match self {
            Variant::A => 6,
            Variant::B => 10,
            Variant::C => 13,
        };
        static VARIABLES: [Var; 13] = Var::ALL;
        &VARIABLES[..count]
    }

    /// The variant this one extends, if any.
    pub fn previous(self) -> Option<Variant> {
        match self {
            Variant::A => None,
            Variant::B => Some(Variant::A),
            Variant::C => Some(Variant::B),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::A => "A",
            Variant::B => "B",
            Variant::C => "C",
        };
        f.write_str(name)
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Variant::A),
            "B" | "b" => Ok(Variant::B),
            "C" | "c" => Ok(Variant::C),
            _ => Err(Error::UnknownVariant(s.to_owned())),
        }
    }
}

/// A mapping from variable to value, kept sorted by variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    values: BTreeMap<Var, i64>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `var`, if any.
    pub fn get(&self, var: Var) -> Option<i64> {
        self.values.get(&var).copied()
    }

    /// Binds `var` to `value`, returning the previous value.
    pub fn set(&mut self, var: Var, value: i64) -> Option<i64> {
        self.values.insert(var, value)
    }

    /// Builder form of [`Assignment::set`].
    pub fn with(mut self, var: Var, value: i64) -> Self {
        self.values.insert(var, value);
        self
    }

    /// Iterates over bindings in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, i64)> + '_ {
        self.values.iter().map(|(&var, &value)| (var, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the sub-assignment over `vars`, skipping unbound ones.
    pub fn restrict(&self, vars: &[Var]) -> Assignment {
        vars.iter()
            .filter_map(|&var| self.get(var).map(|value| (var, value)))
            .collect()
    }

    /// Whether every variable of `variant` is bound.
    pub fn covers(&self, variant: Variant) -> bool {
        variant
            .variables()
            .iter()
            .all(|var| self.values.contains_key(var))
    }

    /// Whether every bound value lies in `domain`.
    pub fn within(&self, domain: &Domain) -> bool {
        self.values.values().all(|&value| domain.contains(value))
    }
}

impl FromIterator<(Var, i64)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Var, i64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (var, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var}: {value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_letters() {
        assert_eq!(Var::A.letter(), 'A');
        assert_eq!(Var::M.letter(), 'M');
        assert_eq!(Var::ALL.len(), 13);
        assert_eq!("h".parse::<Var>().unwrap(), Var::H);
        assert!("N".parse::<Var>().is_err());
        assert!("AB".parse::<Var>().is_err());
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("A".parse::<Variant>().unwrap(), Variant::A);
        assert_eq!(" b ".parse::<Variant>().unwrap(), Variant::B);
        assert_eq!("c".parse::<Variant>().unwrap(), Variant::C);
        assert!("Z".parse::<Variant>().is_err());
        assert!("".parse::<Variant>().is_err());
        assert!("AB".parse::<Variant>().is_err());
    }

    #[test]
    fn test_variant_sets_nest() {
        for variant in Variant::ALL {
            if let Some(prev) = variant.previous() {
                assert!(variant.constraints().starts_with(prev.constraints()));
                assert!(variant.variables().starts_with(prev.variables()));
                assert!(variant.constraints().len() > prev.constraints().len());
            }
        }
        assert_eq!(Variant::A.variables().last(), Some(&Var::F));
        assert_eq!(Variant::B.variables().last(), Some(&Var::J));
        assert_eq!(Variant::C.constraints().len(), 17);
    }

    #[test]
    fn test_assignment_sorted_iteration() {
        let assignment = Assignment::new()
            .with(Var::E, 5)
            .with(Var::A, 60)
            .with(Var::C, 14);
        let vars: Vec<Var> = assignment.iter().map(|(v, _)| v).collect();
        assert_eq!(vars, vec![Var::A, Var::C, Var::E]);
        assert_eq!(assignment.to_string(), "{A: 60, C: 14, E: 5}");
    }

    #[test]
    fn test_assignment_restrict_and_cover() {
        let full: Assignment = Var::ALL.iter().map(|&v| (v, 1)).collect();
        assert!(full.covers(Variant::C));

        let prefix = full.restrict(Variant::A.variables());
        assert_eq!(prefix.len(), 6);
        assert!(prefix.covers(Variant::A));
        assert!(!prefix.covers(Variant::B));
    }

    #[test]
    fn test_assignment_within_domain() {
        let domain = Domain::default();
        let ok = Assignment::new().with(Var::A, 1).with(Var::B, 120);
        let low = Assignment::new().with(Var::A, 0);
        let high = Assignment::new().with(Var::A, 121);
        assert!(ok.within(&domain));
        assert!(!low.within(&domain));
        assert!(!high.within(&domain));
    }
}
