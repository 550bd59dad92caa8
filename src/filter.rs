use std::fmt;

/// A closed interval of neutral masses, inclusive on both ends.
///
/// The default window of 0 to 4000 Daltons covers the plausible peptide
/// mass range for downstream composition estimation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MassRange {
    pub lower: f64,
    pub upper: f64,
}

impl MassRange {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Whether `mass` falls within the window. Masses exactly equal to
    /// either bound are included.
    #[inline]
    pub fn contains(&self, mass: f64) -> bool {
        self.lower <= mass && mass <= self.upper
    }

    /// Filter a single mass, producing a one-element list when it falls
    /// within the window and an empty list otherwise.
    pub fn filter_single(&self, mass: f64) -> Vec<f64> {
        if self.contains(mass) {
            vec![mass]
        } else {
            Vec::new()
        }
    }

    /// Keep the masses within the window, preserving input order.
    pub fn filter_masses(&self, masses: &[f64]) -> Vec<f64> {
        masses.iter().copied().filter(|m| self.contains(*m)).collect()
    }
}

impl Default for MassRange {
    fn default() -> Self {
        Self::new(0.0, 4000.0)
    }
}

impl fmt::Display for MassRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lower, self.upper)
    }
}
