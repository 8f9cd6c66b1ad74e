//! Candidate solutions, optimization direction and scored candidates.

use std::cmp::Ordering;
use std::fmt;

/// One point in the search space: an ordered, fixed-length vector.
///
/// Discrete problems store integral values (`0.0`, `1.0`, ...) and read
/// them back with [`discrete`](Candidate::discrete). A candidate is never
/// edited in place; [`with_value`](Candidate::with_value) and
/// [`swapped`](Candidate::swapped) return new candidates so earlier
/// best-so-far records stay valid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    values: Vec<f64>,
}

impl Candidate {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Builds a candidate from discrete values.
    pub fn from_discrete<I: IntoIterator<Item = usize>>(values: I) -> Self {
        Self {
            values: values.into_iter().map(|v| v as f64).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Continuous value at position `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn get(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// Discrete value at position `i` (rounded to the nearest integer,
    /// negative values saturate to 0).
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn discrete(&self, i: usize) -> usize {
        self.values[i].round() as usize
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates the values as discrete indices.
    pub fn discrete_iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.values.iter().map(|v| v.round() as usize)
    }

    /// Returns a copy with position `i` set to `value`.
    pub fn with_value(&self, i: usize, value: f64) -> Self {
        let mut values = self.values.clone();
        values[i] = value;
        Self { values }
    }

    /// Returns a copy with positions `i` and `j` exchanged.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut values = self.values.clone();
        values.swap(i, j);
        Self { values }
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for Candidate {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Direction in which fitness improves.
///
/// Fixed per evaluation function. All trainers compare fitness through
/// these methods, so the same algorithm code serves both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Higher fitness is better.
    #[default]
    Maximize,
    /// Lower fitness is better.
    Minimize,
}

impl Objective {
    /// `true` if `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Objective::Maximize => a > b,
            Objective::Minimize => a < b,
        }
    }

    /// `true` if `a` is at least as good as `b` (ties count).
    pub fn is_not_worse(self, a: f64, b: f64) -> bool {
        match self {
            Objective::Maximize => a >= b,
            Objective::Minimize => a <= b,
        }
    }

    /// Signed improvement of `new` over `old`: positive when `new` is
    /// better, negative when worse.
    pub fn improvement(self, new: f64, old: f64) -> f64 {
        match self {
            Objective::Maximize => new - old,
            Objective::Minimize => old - new,
        }
    }

    /// Maps fitness onto a scale where larger is always better.
    pub fn orient(self, fitness: f64) -> f64 {
        match self {
            Objective::Maximize => fitness,
            Objective::Minimize => -fitness,
        }
    }

    /// Orders two fitness values best-first.
    pub fn cmp_best_first(self, a: f64, b: f64) -> Ordering {
        self.orient(b)
            .partial_cmp(&self.orient(a))
            .unwrap_or(Ordering::Equal)
    }
}

/// A candidate together with its fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scored {
    pub candidate: Candidate,
    pub fitness: f64,
}

impl Scored {
    pub(crate) fn new(candidate: Candidate, fitness: f64) -> Self {
        Self { candidate, fitness }
    }
}

/// Index of the best member of a non-empty population.
pub(crate) fn best_index(population: &[Scored], objective: Objective) -> usize {
    let mut best = 0;
    for (i, s) in population.iter().enumerate().skip(1) {
        if objective.is_better(s.fitness, population[best].fitness) {
            best = i;
        }
    }
    best
}
