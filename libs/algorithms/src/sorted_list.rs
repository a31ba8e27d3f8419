//! A list kept in order by binary-search insertion

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

/// Ordered list; `add` places each element with a binary search
///
/// Elements comparing equal keep no particular relative order.
///
/// # Examples
///
/// ```
/// use algorithms::SortedList;
///
/// let mut list = SortedList::new();
/// list.add(3);
/// list.add(1);
/// list.add(2);
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert!(list.try_remove(&2));
/// assert!(!list.contains(&2));
/// ```
pub struct SortedList<T, F = fn(&T, &T) -> Ordering> {
    comparer: F,
    memory: Vec<T>,
}

impl<T: Ord> SortedList<T> {
    /// Empty list ordered by `T`'s natural order
    pub fn new() -> Self {
        Self {
            comparer: T::cmp,
            memory: Vec::new(),
        }
    }
}

impl<T: Ord> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> SortedList<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Empty list ordered by `comparer`
    pub fn with_comparator(comparer: F) -> Self {
        Self {
            comparer,
            memory: Vec::new(),
        }
    }

    pub fn add(&mut self, item: T) {
        let index = match self.index_for(&item) {
            Ok(index) | Err(index) => index,
        };
        self.memory.insert(index, item);
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_for(item).is_ok()
    }

    /// Remove one element equal to `item`; returns whether one was found
    pub fn try_remove(&mut self, item: &T) -> bool {
        match self.index_for(item) {
            Ok(index) => {
                self.memory.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    // Ok(position of an equal element) or Err(insertion point)
    fn index_for(&self, item: &T) -> Result<usize, usize> {
        self.memory.binary_search_by(|probe| (self.comparer)(probe, item))
    }
}

impl<T, F> SortedList<T, F> {
    pub fn get(&self, index: usize) -> Option<&T> {
        self.memory.get(index)
    }

    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    pub fn clear(&mut self) {
        self.memory.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.memory.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.memory
    }
}

impl<T, F> Index<usize> for SortedList<T, F> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.memory[index]
    }
}

impl<'a, T, F> IntoIterator for &'a SortedList<T, F> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.memory.iter()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SortedList<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.memory).finish()
    }
}
