//! Weighted random selection with reinforcement
//!
//! A [`Selector`] holds a list of (value, weight) categories and draws a value
//! with probability proportional to its weight. Reward and punish move single
//! weight units between categories, so the total weight of a selector never
//! changes and no weight ever drops below zero.

use std::fmt;

use rand::Rng;

use crate::{PickerError, Result};

/// A value a selector can return, with its relative weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category<T> {
    value: T,
    weight: u32,
}

impl<T> Category<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// Draws weighted random values from a fixed set of categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<T> {
    categories: Vec<Category<T>>,
    total_weight: u32,
}

impl<T: Clone + PartialEq + fmt::Debug> Selector<T> {
    /// Creates a selector with no categories
    pub fn new() -> Self {
        Selector {
            categories: Vec::new(),
            total_weight: 0,
        }
    }

    /// Adds `value` with the given starting weight
    ///
    /// Returns `Ok(false)` without changing anything if `value` is already
    /// present. A zero weight is rejected.
    pub fn add_category(&mut self, weight: u32, value: T) -> Result<bool> {
        if weight == 0 {
            return Err(PickerError::InvalidWeight);
        }
        if self.position(&value).is_some() {
            return Ok(false);
        }
        let total_weight = self
            .total_weight
            .checked_add(weight)
            .ok_or(PickerError::InvalidWeight)?;

        self.categories.push(Category { value, weight });
        self.total_weight = total_weight;
        Ok(true)
    }

    /// Draws a value
    ///
    /// A uniform integer in `0..total_weight` is walked down the categories
    /// in insertion order; the category that takes the remainder below zero
    /// is returned.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T> {
        if self.categories.is_empty() {
            return Err(PickerError::EmptySelector);
        }
        if self.total_weight == 0 {
            return Err(PickerError::ZeroTotalWeight);
        }

        let mut remaining = i64::from(rng.gen_range(0..self.total_weight));
        for category in &self.categories {
            remaining -= i64::from(category.weight);
            if remaining < 0 {
                return Ok(category.value.clone());
            }
        }

        // total_weight always equals the sum of category weights
        Err(PickerError::ZeroTotalWeight)
    }

    /// Makes `value` more likely
    ///
    /// Every other category with positive weight hands one unit to `value`.
    /// Returns false if `value` is not present.
    pub fn reward(&mut self, value: &T) -> bool {
        let Some(target) = self.position(value) else {
            return false;
        };

        let mut gained = 0;
        for (i, category) in self.categories.iter_mut().enumerate() {
            if i != target && category.weight > 0 {
                category.weight -= 1;
                gained += 1;
            }
        }
        self.categories[target].weight += gained;

        log::trace!(
            "rewarded {:?}: +{} (now {})",
            value,
            gained,
            self.categories[target].weight
        );
        true
    }

    /// Makes `value` less likely
    ///
    /// `value` hands one unit to every other category in turn, stopping as
    /// soon as it runs out of weight. Returns false if `value` is not present.
    pub fn punish(&mut self, value: &T) -> bool {
        let Some(target) = self.position(value) else {
            return false;
        };

        let mut available = self.categories[target].weight;
        for (i, category) in self.categories.iter_mut().enumerate() {
            if i != target && available > 0 {
                category.weight += 1;
                available -= 1;
            }
        }
        let lost = self.categories[target].weight - available;
        self.categories[target].weight = available;

        log::trace!("punished {:?}: -{} (now {})", value, lost, available);
        true
    }

    /// Current weight of `value`, if present
    pub fn weight_of(&self, value: &T) -> Option<u32> {
        self.position(value).map(|i| self.categories[i].weight)
    }

    /// Sum of all category weights
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Probability that the next pick returns `value`
    pub fn probability_of(&self, value: &T) -> f64 {
        match self.weight_of(value) {
            Some(w) if self.total_weight > 0 => f64::from(w) / f64::from(self.total_weight),
            _ => 0.0,
        }
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category<T>] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.categories.iter().position(|c| c.value == *value)
    }
}

impl<T: Clone + PartialEq + fmt::Debug> Default for Selector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, category) in self.categories.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", category.value, category.weight)?;
        }
        write!(f, "]")
    }
}
