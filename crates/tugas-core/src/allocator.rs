//! Row id allocation.
//!
//! A plain high-water-mark counter: ids are strictly increasing and never
//! reused within a session. The counter itself is not persisted; it is
//! reseeded from the observed rows on every load.

/// Issues row ids strictly greater than any id ever issued or observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    high_water: u64,
}

impl IdAllocator {
    /// New allocator with the minimum seed of 1 (the template row's id).
    pub fn new() -> Self {
        Self { high_water: 1 }
    }

    /// Raise the high-water mark to cover an id seen in mounted or restored
    /// rows. Ids at or below the current mark are ignored.
    pub fn observe(&mut self, id: u64) {
        if id > self.high_water {
            self.high_water = id;
        }
    }

    /// Issue the next id. Strictly greater than every id issued or observed.
    pub fn next(&mut self) -> u64 {
        self.high_water += 1;
        self.high_water
    }

    /// The largest id issued or observed so far.
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
