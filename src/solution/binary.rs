//! Binary (0/1) knapsack solution.

use crate::instance::Instance;

/// A 0/1 assignment over an [`Instance`], with incrementally cached totals.
///
/// The assignment array and the cached total value/weight are only ever
/// updated together inside [`set`](Solution::set), so
/// [`value`](Solution::value) and [`weight`](Solution::weight) always equal
/// the sums implied by the assignment without any recomputation.
///
/// Equality compares the assignment only; tabu search relies on this to match
/// solution snapshots across clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<'a> {
    instance: &'a Instance,
    assignment: Vec<bool>,
    value: u64,
    weight: u64,
}

impl<'a> Solution<'a> {
    /// Creates the empty assignment (no item selected) for `instance`.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            assignment: vec![false; instance.len()],
            value: 0,
            weight: 0,
        }
    }

    /// Includes or excludes `item`, adjusting both cached totals in O(1).
    ///
    /// Setting an item to its current state is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `item` is out of range.
    pub fn set(&mut self, item: usize, included: bool) {
        let previous = self.assignment[item];
        if previous == included {
            return;
        }
        if included {
            self.value += self.instance.value(item);
            self.weight += self.instance.weight(item);
        } else {
            self.value -= self.instance.value(item);
            self.weight -= self.instance.weight(item);
        }
        self.assignment[item] = included;
    }

    /// Inverts the assignment of `item`.
    pub fn flip(&mut self, item: usize) {
        self.set(item, !self.assignment[item]);
    }

    /// Whether `item` is currently included.
    pub fn get(&self, item: usize) -> bool {
        self.assignment[item]
    }

    /// Cached total value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Cached total weight. May exceed the capacity for solvers that
    /// explore infeasible states.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Whether the total weight respects the capacity.
    pub fn is_feasible(&self) -> bool {
        self.weight <= self.instance.capacity()
    }

    /// The assignment as a read-only slice.
    pub fn assignment(&self) -> &[bool] {
        &self.assignment
    }

    /// The instance this solution was built against.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Whether `other` references the very same instance (pointer identity).
    pub fn same_instance(&self, other: &Solution<'_>) -> bool {
        std::ptr::eq(self.instance, other.instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Instance {
        Instance::new(vec![6, 10, 12], vec![1, 2, 3], 5)
    }

    #[test]
    fn test_empty_solution() {
        let instance = tiny();
        let solution = Solution::new(&instance);
        assert_eq!(solution.value(), 0);
        assert_eq!(solution.weight(), 0);
        assert!(solution.is_feasible());
    }

    #[test]
    fn test_set_updates_totals() {
        let instance = tiny();
        let mut solution = Solution::new(&instance);
        solution.set(0, true);
        solution.set(2, true);
        assert_eq!(solution.value(), 18);
        assert_eq!(solution.weight(), 4);
        solution.set(2, false);
        assert_eq!(solution.value(), 6);
        assert_eq!(solution.weight(), 1);
    }

    #[test]
    fn test_set_is_idempotent_per_state() {
        let instance = tiny();
        let mut solution = Solution::new(&instance);
        solution.set(1, true);
        solution.set(1, true);
        assert_eq!(solution.value(), 10);
        assert_eq!(solution.weight(), 2);
    }

    #[test]
    fn test_flip() {
        let instance = tiny();
        let mut solution = Solution::new(&instance);
        solution.flip(1);
        assert!(solution.get(1));
        solution.flip(1);
        assert!(!solution.get(1));
        assert_eq!(solution.weight(), 0);
    }

    #[test]
    fn test_infeasible_overweight() {
        let instance = tiny();
        let mut solution = Solution::new(&instance);
        for item in 0..instance.len() {
            solution.set(item, true);
        }
        assert_eq!(solution.weight(), 6);
        assert!(!solution.is_feasible());
    }

    #[test]
    fn test_clone_is_independent() {
        let instance = tiny();
        let mut solution = Solution::new(&instance);
        solution.set(0, true);
        let mut copy = solution.clone();
        copy.set(1, true);
        assert_eq!(solution.value(), 6);
        assert_eq!(copy.value(), 16);
        assert!(solution.same_instance(&copy));
    }

    #[test]
    fn test_equality_ignores_instance_identity() {
        let instance = tiny();
        let mut a = Solution::new(&instance);
        let mut b = Solution::new(&instance);
        a.set(2, true);
        assert_ne!(a, b);
        b.set(2, true);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_set_panics() {
        let instance = tiny();
        let mut solution = Solution::new(&instance);
        solution.set(3, true);
    }
}
