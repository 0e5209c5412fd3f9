//! Growable append-only array.
use std::{fmt, ops};

/// Append-only sequence with a fixed growth policy.
///
/// Storage is backed by a `Vec`, but the capacity is managed explicitly
/// so that growth follows the same steps regardless of the allocator's
/// own strategy. The array starts with room for [`DynArray::INITIAL_CAPACITY`]
/// elements and grows by [`DynArray::GROWTH_FACTOR`] whenever an append
/// would fill the last slot.
#[derive(Clone, PartialEq, Eq)]
pub struct DynArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    pub const INITIAL_CAPACITY: usize = 8;
    pub const GROWTH_FACTOR: f64 = 1.4;

    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(Self::INITIAL_CAPACITY),
            capacity: Self::INITIAL_CAPACITY,
        }
    }

    /// Appends an element to the back of the array.
    pub fn push(&mut self, value: T) {
        if self.data.len() + 1 >= self.capacity {
            self.grow();
        }
        self.data.push(value);
    }

    /// Number of slots reserved by the growth policy.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    fn grow(&mut self) {
        let scaled = (self.capacity as f64 * Self::GROWTH_FACTOR) as usize;
        let new_capacity = usize::max(scaled, self.capacity + 1);

        // Existing elements are moved over in order by the reservation.
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }
}

impl<T> Default for DynArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ops::Deref for DynArray<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.data.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynArray::new();
        array.extend(iter);
        array
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_initial_capacity() {
        let array = DynArray::<i32>::new();
        assert_eq!(array.capacity(), 8);
        assert!(array.is_empty());
    }

    #[test]
    fn test_growth_preserves_elements() {
        let mut array = DynArray::new();
        for i in 0..100 {
            array.push(i * 3);
        }

        assert_eq!(array.len(), 100);
        assert!(array.capacity() > 100);
        for (i, value) in array.iter().enumerate() {
            assert_eq!(*value, i * 3);
        }
    }

    #[test]
    fn test_growth_steps() {
        let mut array = DynArray::new();
        let mut capacities = vec![array.capacity()];
        for i in 0..20 {
            array.push(i);
            if capacities.last() != Some(&array.capacity()) {
                capacities.push(array.capacity());
            }
        }

        // 8 * 1.4 = 11.2, 11 * 1.4 = 15.4, 15 * 1.4 = 21
        assert_eq!(capacities, vec![8, 11, 15, 21]);
    }

    #[test]
    fn test_owned_values() {
        let array: DynArray<String> = ["int", "main", "return"].iter().map(|s| s.to_string()).collect();
        assert_eq!(array.last().map(String::as_str), Some("return"));

        let owned: Vec<String> = array.into_iter().collect();
        assert_eq!(owned, vec!["int", "main", "return"]);
    }
}
