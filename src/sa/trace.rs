//! Sampled search history for replay and visualization.

/// The search state at one sampled iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<S> {
    /// Iterations completed when the snapshot was taken.
    pub iteration: usize,

    /// Copy of the current (not best) solution.
    pub solution: S,

    /// Cost of `solution`.
    pub cost: f64,

    /// Temperature after the iteration's cooling step.
    pub temperature: f64,
}

/// Append-only log of snapshots in iteration order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace<S> {
    snapshots: Vec<Snapshot<S>>,
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }
}

impl<S> Trace<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, iteration: usize, solution: S, cost: f64, temperature: f64) {
        debug_assert!(
            self.snapshots
                .last()
                .is_none_or(|last| last.iteration < iteration),
            "snapshots must be recorded in iteration order"
        );
        self.snapshots.push(Snapshot {
            iteration,
            solution,
            cost,
            temperature,
        });
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> Option<&Snapshot<S>> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot<S>> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot<S>> {
        self.snapshots.iter()
    }

    pub fn as_slice(&self) -> &[Snapshot<S>] {
        &self.snapshots
    }

    /// Sampled costs, one per snapshot.
    pub fn costs(&self) -> impl Iterator<Item = f64> + '_ {
        self.snapshots.iter().map(|s| s.cost)
    }

    /// Sampled temperatures, one per snapshot.
    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.snapshots.iter().map(|s| s.temperature)
    }

    pub fn into_snapshots(self) -> Vec<Snapshot<S>> {
        self.snapshots
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a Snapshot<S>;
    type IntoIter = std::slice::Iter<'a, Snapshot<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
