//! Record collections: the host-collaborator seam.
//!
//! The coordinator never learns the host's schema. It sees records as
//! positionally ordered bags of string-keyed numeric fields behind the
//! [`TweenTarget`] trait, with the animatable field names supplied by the
//! caller.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// One record's numeric fields, keyed by field name.
pub type ValueBag = HashMap<String, f64>;

/// A mutable, positionally ordered record collection that can be tweened
/// and revalidated.
///
/// `revalidate` is the host's reconcile pass after batched mutation; it must
/// be safe to call redundantly. `get` on a missing or non-numeric field
/// should yield `NaN` rather than fail — the coordinator does not validate
/// field values (see the crate docs on preconditions).
pub trait TweenTarget {
    /// Number of records in the collection.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current value of `field` on the record at `index`.
    fn get(&self, index: usize, field: &str) -> f64;

    /// Overwrite `field` on the record at `index`.
    fn set(&mut self, index: usize, field: &str, value: f64);

    /// Reconcile derived/visual state after the records were mutated.
    fn revalidate(&mut self);
}

/// Plain in-memory [`TweenTarget`] over value bags. Usable as a default
/// host collection, and by tests that need to observe revalidation counts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryDataSet {
    records: Vec<ValueBag>,
    #[serde(skip)]
    revalidations: usize,
}

impl MemoryDataSet {
    pub fn new(records: Vec<ValueBag>) -> Self {
        Self {
            records,
            revalidations: 0,
        }
    }

    pub fn records(&self) -> &[ValueBag] {
        &self.records
    }

    /// How many times `revalidate` has been invoked.
    pub fn revalidations(&self) -> usize {
        self.revalidations
    }
}

impl TweenTarget for MemoryDataSet {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize, field: &str) -> f64 {
        self.records[index].get(field).copied().unwrap_or(f64::NAN)
    }

    fn set(&mut self, index: usize, field: &str, value: f64) {
        self.records[index].insert(field.to_string(), value);
    }

    fn revalidate(&mut self) {
        self.revalidations += 1;
    }
}
