//! Search domain and configuration.

use crate::error::{Error, Result};

/// Largest admissible upper bound. Cubes of sums of two values must fit
/// comfortably in `i64`.
pub const MAX_DOMAIN_BOUND: i64 = 100_000;

/// Inclusive integer domain shared by every variable.
///
/// # Examples
///
/// ```
/// use u_dioph::search::Domain;
///
/// let domain = Domain::default();
/// assert_eq!((domain.min(), domain.max()), (1, 120));
/// assert!(domain.contains(120));
/// assert!(!domain.contains(0));
///
/// assert!(Domain::new(5, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    min: i64,
    max: i64,
}

impl Domain {
    /// Creates a domain `[min, max]`.
    ///
    /// Fails unless `1 <= min <= max <= MAX_DOMAIN_BOUND`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min < 1 || min > max || max > MAX_DOMAIN_BOUND {
            return Err(Error::InvalidDomain {
                min,
                max,
                limit: MAX_DOMAIN_BOUND,
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self { min: 1, max: 120 }
    }
}

/// Configuration for [`SearchRunner`](super::SearchRunner).
///
/// # Examples
///
/// ```
/// use u_dioph::search::{Domain, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_domain(Domain::new(1, 60).unwrap())
///     .with_parallel(true);
/// assert_eq!(config.domain.max(), 60);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Domain of every variable, searched or derived.
    pub domain: Domain,

    /// Whether to search root values on the rayon pool.
    ///
    /// Requires the `parallel` feature; ignored otherwise. Results and
    /// attempt counts are the same either way.
    pub parallel: bool,
}

impl SearchConfig {
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domain() {
        let domain = Domain::default();
        assert_eq!(domain.min(), 1);
        assert_eq!(domain.max(), 120);
        assert!(domain.contains(1));
        assert!(domain.contains(120));
        assert!(!domain.contains(121));
    }

    #[test]
    fn test_domain_validation() {
        assert!(Domain::new(1, 1).is_ok());
        assert!(Domain::new(0, 10).is_err());
        assert!(Domain::new(11, 10).is_err());
        assert!(Domain::new(1, MAX_DOMAIN_BOUND).is_ok());
        assert!(Domain::new(1, MAX_DOMAIN_BOUND + 1).is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.domain, Domain::default());
        assert!(!config.parallel);
    }

    #[test]
    fn test_config_builder() {
        let domain = Domain::new(2, 50).unwrap();
        let config = SearchConfig::default()
            .with_domain(domain)
            .with_parallel(true);
        assert_eq!(config.domain, domain);
        assert!(config.parallel);
    }
}
