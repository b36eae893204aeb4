//! Knapsack problem instance.

/// An immutable 0/1 knapsack instance: per-item values and weights plus a
/// single capacity.
///
/// Built once from external input and read-only for its lifetime. Solutions
/// borrow the instance they were built against, so an instance outlives every
/// solution derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    values: Vec<u64>,
    weights: Vec<u64>,
    capacity: u64,
}

impl Instance {
    /// Creates an instance from parallel value/weight arrays and a capacity.
    ///
    /// # Panics
    ///
    /// Panics if the arrays differ in length.
    pub fn new(values: Vec<u64>, weights: Vec<u64>, capacity: u64) -> Self {
        assert_eq!(
            values.len(),
            weights.len(),
            "value and weight arrays must have equal length"
        );
        Self {
            values,
            weights,
            capacity,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of item `item`.
    pub fn value(&self, item: usize) -> u64 {
        self.values[item]
    }

    /// Weight of item `item`.
    pub fn weight(&self, item: usize) -> u64 {
        self.weights[item]
    }

    /// All item values.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// All item weights.
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Knapsack capacity (weight limit).
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Value-to-weight ratio of item `item`, as real division.
    ///
    /// A zero-weight item with positive value yields `+inf`, which sorts
    /// ahead of every finite ratio under [`f64::total_cmp`].
    pub fn ratio(&self, item: usize) -> f64 {
        self.values[item] as f64 / self.weights[item] as f64
    }

    /// Item indices sorted by descending value-to-weight ratio.
    ///
    /// Ties keep ascending index order (stable sort), giving every solver
    /// that ranks items the same deterministic total order.
    pub fn indices_by_ratio(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| self.ratio(b).total_cmp(&self.ratio(a)));
        order
    }
}
