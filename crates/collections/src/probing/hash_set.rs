use std::fmt;

use log::{debug, trace};

use super::{ProbeSetError, Slot, prime::next_prime};

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.8;
/// Largest capacity accepted at construction, itself a prime
pub const MAX_CAPACITY: usize = i32::MAX as usize;

/// `next_prime(DEFAULT_CAPACITY)`
const DEFAULT_TABLE_SIZE: usize = 11;

/// Set of `i32` keys stored in an open-addressed table
/// with quadratic probing and tombstone deletion
///
/// The number of slots is always a prime. Before a new key is placed the
/// table grows to `next_prime(2 * capacity)` if storing it would push the
/// load factor strictly above `max_load_factor`.
///
/// # Note
///
/// Slot indices returned by [`insert`](Self::insert) and
/// [`search`](Self::search) are only meaningful until the next mutating call,
/// a rehash moves every key.
#[derive(Debug, Clone)]
pub struct ProbingHashSet {
    slots: Vec<Slot>,
    items: usize,
    max_load_factor: f64,
}

#[derive(Debug, Clone)]
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Slot>,
}

/// Quadratic probe sequence `(home + i²) mod size` for `i` in `0..size`
#[derive(Debug)]
struct Probe {
    pos: u64,
    i: u64,
    size: u64,
}

impl Default for ProbingHashSet {
    fn default() -> Self {
        Self::with_table_size(DEFAULT_TABLE_SIZE, DEFAULT_LOAD_FACTOR)
    }
}

impl ProbingHashSet {
    /// Creates an empty set with at least `capacity` slots,
    /// rounded up to the next prime
    pub fn new(capacity: usize) -> Result<Self, ProbeSetError> {
        Self::with_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Same as [`new`](Self::new) but grows once the load factor
    /// would exceed `load_factor` instead of [`DEFAULT_LOAD_FACTOR`]
    pub fn with_load_factor(capacity: usize, load_factor: f64) -> Result<Self, ProbeSetError> {
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(ProbeSetError::InvalidCapacity { capacity });
        }
        // written this way so NaN is rejected too
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(ProbeSetError::InvalidLoadFactor { load_factor });
        }
        let Some(size) = next_prime(capacity) else {
            return Err(ProbeSetError::InvalidCapacity { capacity });
        };

        Ok(Self::with_table_size(size, load_factor))
    }

    fn with_table_size(size: usize, max_load_factor: f64) -> Self {
        Self {
            slots: vec![Slot::Empty; size],
            items: 0,
            max_load_factor,
        }
    }

    /// Returns the number of keys in the set
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots, always a prime
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.items as f64 / self.capacity() as f64
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Number of slots holding a tombstone
    pub fn tombstones(&self) -> usize {
        self.slots.iter().filter(|s| s.is_tombstone()).count()
    }

    /// Read only view of the slot array
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the slot index holding `key`
    ///
    /// Tombstones are stepped over, the first empty slot ends the search.
    pub fn search(&self, key: i32) -> Option<usize> {
        for idx in Probe::new(key, self.capacity()) {
            match self.slots[idx] {
                Slot::Empty => return None,
                s if s.holds(key) => return Some(idx),
                _ => {}
            }
        }

        None
    }

    /// Shorthand for `self.search(key).is_some()`
    pub fn contains(&self, key: i32) -> bool {
        self.search(key).is_some()
    }

    /// Inserts `key`, returning the slot it was placed in
    ///
    /// Fails without touching the set if the key is already present.
    /// May rehash before placing the key, so a [`ProbeSetError::ProbeLimitReached`]
    /// can come back from a table that grew but still holds the same keys.
    pub fn insert(&mut self, key: i32) -> Result<usize, ProbeSetError> {
        if let Some(slot) = self.search(key) {
            trace!(target: "insert", "rejecting duplicate key {key} at slot {slot}");
            return Err(ProbeSetError::DuplicateKey { key, slot });
        }

        // one round is enough unless the load factor is tiny
        while self.would_exceed_load_factor() {
            self.rehash()?;
        }

        self.place(key)
    }

    /// Marks the slot holding `key` as a tombstone
    pub fn remove(&mut self, key: i32) -> Result<(), ProbeSetError> {
        let Some(idx) = self.search(key) else {
            trace!(target: "remove", "key {key} not found");
            return Err(ProbeSetError::KeyNotFound { key });
        };

        self.slots[idx] = Slot::Tombstone;
        self.items -= 1;
        Ok(())
    }

    /// One token per slot, the key for occupied slots and `-` otherwise
    pub fn dump(&self) -> Vec<String> {
        self.slots.iter().map(Slot::token).collect()
    }

    /// Iterates over the keys in slot order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    // [private]

    fn would_exceed_load_factor(&self) -> bool {
        (self.items + 1) as f64 / self.capacity() as f64 > self.max_load_factor
    }

    /// Puts `key` into the first empty or tombstone slot on its probe chain
    ///
    /// Does not check for duplicates or the load factor.
    fn place(&mut self, key: i32) -> Result<usize, ProbeSetError> {
        let Some(idx) = Probe::new(key, self.capacity()).find(|&idx| self.slots[idx].is_free())
        else {
            trace!(target: "insert", "no free slot on the probe chain of {key}");
            return Err(ProbeSetError::ProbeLimitReached {
                key,
                probes: self.capacity(),
            });
        };

        self.slots[idx] = Slot::Occupied(key);
        self.items += 1;
        Ok(idx)
    }

    /// Moves every key into a table of `next_prime(2 * capacity)` slots,
    /// dropping all tombstones
    ///
    /// The new table is only swapped in once every key found a slot.
    ///
    /// # Panics
    ///
    /// Like any `Vec`, the new slot array will panic
    /// if it would need more than `isize::MAX` bytes
    fn rehash(&mut self) -> Result<(), ProbeSetError> {
        let old_size = self.capacity();
        let Some(new_size) = old_size.checked_mul(2).and_then(next_prime) else {
            return Err(ProbeSetError::CapacityOverflow { capacity: old_size });
        };
        let mut grown = Self::with_table_size(new_size, self.max_load_factor);

        for key in self.iter() {
            debug_assert!(
                !grown.would_exceed_load_factor(),
                "rehash into {} slots would have to grow again",
                grown.capacity()
            );
            grown.place(key)?;
        }

        debug!(
            target: "rehash",
            "grew table from {} to {} slots, moved {} keys",
            old_size,
            grown.capacity(),
            grown.len()
        );
        *self = grown;
        Ok(())
    }
}

impl Probe {
    fn new(key: i32, size: usize) -> Self {
        let size = size as u64;
        // negative keys wrap around to a non-negative residue
        let home = i64::from(key).rem_euclid(size as i64) as u64;
        Self { pos: home, i: 0, size }
    }
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.size {
            return None;
        }

        let pos = self.pos;
        // (i + 1)² - i² = 2i + 1
        self.pos = (pos + (2 * self.i + 1) % self.size) % self.size;
        self.i += 1;
        Some(pos as usize)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(Slot::key)
    }
}

impl<'a> IntoIterator for &'a ProbingHashSet {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ProbingHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump().join(" "))
    }
}
