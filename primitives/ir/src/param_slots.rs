//! Deterministic parameter ordering.
//!
//! Every parameter occupies an integer slot key. Explicit keys are used
//! literally; parameters added without a key take the next value of an
//! automatic counter that starts at 0 and advances once per unordered
//! insertion, regardless of which keys explicit insertions have taken.
//! Writing to an occupied key replaces the previous occupant entirely.
//! Reading walks the keys in ascending numeric order.

use std::collections::BTreeMap;

use crate::Param;

/// Ordered parameter storage keyed by slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSlots {
    slots: BTreeMap<i64, Param>,
    next_auto: i64,
}

impl ParamSlots {
    /// Create an empty registry.
    pub fn new() -> Self { Self::default() }

    /// Place `param` at `order`, or at the next automatic slot when `order`
    /// is `None`. Returns the slot key used.
    pub fn insert(&mut self, param: Param, order: Option<i64>) -> i64 {
        let key = match order {
            Some(key) => key,
            None => {
                let key = self.next_auto;
                self.next_auto += 1;
                key
            }
        };
        self.slots.insert(key, param);
        key
    }

    /// Remove every parameter and reset the automatic counter.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.next_auto = 0;
    }

    /// Parameters in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Param> { self.slots.values() }

    /// Owned copy of the parameters in ascending slot order.
    pub fn to_vec(&self) -> Vec<Param> { self.slots.values().cloned().collect() }

    /// Occupied slot keys in ascending order.
    pub fn keys(&self) -> Vec<i64> { self.slots.keys().copied().collect() }

    /// The parameter stored at `key`, if any.
    pub fn get(&self, key: i64) -> Option<&Param> { self.slots.get(&key) }

    /// The key the next unordered insertion will take.
    pub fn next_auto_key(&self) -> i64 { self.next_auto }

    /// Number of occupied slots.
    pub fn len(&self) -> usize { self.slots.len() }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }
}
