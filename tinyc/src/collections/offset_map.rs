//! Open addressing hash map from names to integer values.
use smol_str::SmolStr;
use std::fmt;

/// String keyed hash map storing 32-bit integers, used for
/// mapping variable names to stack frame offsets.
///
/// Collisions are resolved with linear probing inside a single
/// backing array. Lookups stop at the first vacant slot, so the
/// map always keeps at least one slot empty.
#[derive(Clone)]
pub struct OffsetMap {
    slots: Box<[Option<Entry>]>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Entry {
    key: SmolStr,
    value: i32,
}

impl OffsetMap {
    pub const INITIAL_CAPACITY: usize = 32;
    /// Load factor above which the table is grown before the next insert.
    pub const MAX_LOAD: f64 = 0.7;
    pub const GROWTH_FACTOR: f64 = 1.4;

    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vacant_slots(usize::max(capacity, 1)),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Ratio of occupied slots to total capacity.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Inserts a value under the given key.
    ///
    /// Returns the previous value when the key was already present.
    pub fn insert(&mut self, key: &str, value: i32) -> Option<i32> {
        if self.load_factor() > Self::MAX_LOAD || self.len + 1 >= self.capacity() {
            let scaled = (self.capacity() as f64 * Self::GROWTH_FACTOR).round() as usize;
            self.rehash(usize::max(scaled, self.capacity() + 1));
        }

        let index = self.probe(key);
        if let Some(entry) = self.slots[index].as_mut() {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        self.slots[index] = Some(Entry {
            key: SmolStr::from(key),
            value,
        });
        self.len += 1;
        None
    }

    /// Looks up the value stored under the given key.
    pub fn get(&self, key: &str) -> Option<i32> {
        self.slots[self.probe(key)].as_ref().map(|entry| entry.value)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over the entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.slots
            .iter()
            .flatten()
            .map(|entry| (entry.key.as_str(), entry.value))
    }

    /// Walk the probe chain of the key, stopping at either the
    /// slot holding the key, or the first vacant slot.
    fn probe(&self, key: &str) -> usize {
        let capacity = self.capacity();
        let mut index = hash(key) as usize % capacity;

        while let Some(ref entry) = self.slots[index] {
            if entry.key.as_str() == key {
                break;
            }
            index = (index + 1) % capacity;
        }

        index
    }

    fn rehash(&mut self, new_capacity: usize) {
        let old = std::mem::replace(&mut self.slots, vacant_slots(new_capacity));

        for entry in old.into_vec().into_iter().flatten() {
            let mut index = hash(&entry.key) as usize % new_capacity;
            while self.slots[index].is_some() {
                index = (index + 1) % new_capacity;
            }
            self.slots[index] = Some(entry);
        }
    }
}

impl Default for OffsetMap {
    #[inline]
    fn default() -> Self {
        OffsetMap::new()
    }
}

impl fmt::Debug for OffsetMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn vacant_slots(capacity: usize) -> Box<[Option<Entry>]> {
    (0..capacity).map(|_| None).collect::<Vec<_>>().into_boxed_slice()
}

/// Murmur inspired one-at-a-time string hash.
///
/// Not cryptographic. Stable across runs, so frame layouts are reproducible.
pub fn hash(key: &str) -> u32 {
    let mut h: u32 = 3_323_198_485;
    for byte in key.bytes() {
        h ^= u32::from(byte);
        h = h.wrapping_mul(0x5bd1_e995);
        h ^= h >> 15;
    }
    h
}
