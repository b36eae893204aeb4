//! Fractional knapsack solution.

use crate::instance::Instance;

/// Numerical tolerance for feasibility and binariness checks.
pub const EPSILON: f64 = 1e-6;

/// A fractional assignment over an [`Instance`]: each item carries a quantity
/// in `[0, 1]`.
///
/// Mirrors [`Solution`](crate::solution::Solution) with real-valued
/// quantities and ε-tolerant predicates. Cached totals are adjusted by the
/// quantity delta on every [`set`](FractionalSolution::set).
#[derive(Debug, Clone, PartialEq)]
pub struct FractionalSolution<'a> {
    instance: &'a Instance,
    assignment: Vec<f64>,
    value: f64,
    weight: f64,
}

impl<'a> FractionalSolution<'a> {
    /// Creates the empty assignment (all quantities 0) for `instance`.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            assignment: vec![0.0; instance.len()],
            value: 0.0,
            weight: 0.0,
        }
    }

    /// Sets the quantity of `item`, adjusting both cached totals in O(1).
    ///
    /// # Panics
    ///
    /// Panics if `item` is out of range.
    pub fn set(&mut self, item: usize, quantity: f64) {
        let delta = quantity - self.assignment[item];
        self.value += delta * self.instance.value(item) as f64;
        self.weight += delta * self.instance.weight(item) as f64;
        self.assignment[item] = quantity;
    }

    /// Current quantity of `item`.
    pub fn get(&self, item: usize) -> f64 {
        self.assignment[item]
    }

    /// Cached total value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Cached total weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether the total weight respects the capacity, within [`EPSILON`].
    pub fn is_feasible(&self) -> bool {
        self.weight <= self.instance.capacity() as f64 + EPSILON
    }

    /// Whether every quantity is within [`EPSILON`] of 0 or 1.
    pub fn is_binary(&self) -> bool {
        self.assignment
            .iter()
            .all(|&q| q <= EPSILON || q >= 1.0 - EPSILON)
    }

    /// The assignment as a read-only slice.
    pub fn assignment(&self) -> &[f64] {
        &self.assignment
    }

    /// The instance this solution was built against.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Instance {
        Instance::new(vec![6, 10, 12], vec![1, 2, 3], 5)
    }

    #[test]
    fn test_set_fractional_totals() {
        let instance = tiny();
        let mut solution = FractionalSolution::new(&instance);
        solution.set(0, 1.0);
        solution.set(2, 0.5);
        assert!((solution.value() - 12.0).abs() < 1e-9);
        assert!((solution.weight() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_overwrite_quantity() {
        let instance = tiny();
        let mut solution = FractionalSolution::new(&instance);
        solution.set(1, 1.0);
        solution.set(1, 0.25);
        assert!((solution.value() - 2.5).abs() < 1e-9);
        assert!((solution.weight() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_feasibility_tolerance() {
        let instance = tiny();
        let mut solution = FractionalSolution::new(&instance);
        solution.set(2, 1.0);
        solution.set(1, 1.0);
        assert!((solution.weight() - 5.0).abs() < 1e-9);
        assert!(solution.is_feasible());
        solution.set(0, 0.5);
        assert!(!solution.is_feasible());
    }

    #[test]
    fn test_is_binary() {
        let instance = tiny();
        let mut solution = FractionalSolution::new(&instance);
        solution.set(0, 1.0);
        assert!(solution.is_binary());
        solution.set(1, 1.0 - 1e-9);
        assert!(solution.is_binary());
        solution.set(2, 0.5);
        assert!(!solution.is_binary());
    }
}
