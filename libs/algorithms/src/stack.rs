//! LIFO stack on a linked list

use crate::error::{AlgorithmError, Result};
use std::collections::LinkedList;

/// Last-in, first-out stack; pushes and pops happen at the list head
///
/// # Examples
///
/// ```
/// use algorithms::ListBasedStack;
///
/// let mut stack: ListBasedStack<_> = [1, 2, 3].into_iter().collect();
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.peek(), Ok(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBasedStack<T> {
    stack: LinkedList<T>,
}

impl<T> Default for ListBasedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListBasedStack<T> {
    pub fn new() -> Self {
        Self {
            stack: LinkedList::new(),
        }
    }

    /// Stack holding a single item
    pub fn from_item(item: T) -> Self {
        let mut stack = Self::new();
        stack.push(item);
        stack
    }

    pub fn push(&mut self, item: T) {
        self.stack.push_front(item);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.stack.pop_front().ok_or(AlgorithmError::EmptyStack)
    }

    pub fn peek(&self) -> Result<&T> {
        self.stack.front().ok_or(AlgorithmError::EmptyStack)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl<T: PartialEq> ListBasedStack<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.stack.contains(item)
    }
}

/// Items are pushed in iteration order, so the last one ends up on top
impl<T> FromIterator<T> for ListBasedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for ListBasedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = ListBasedStack::new();
        stack.push('a');
        stack.push('b');
        stack.push('c');

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Ok('c'));
        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.pop(), Ok('a'));
        assert_eq!(stack.pop(), Err(AlgorithmError::EmptyStack));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let stack = ListBasedStack::from_item(42);

        assert_eq!(stack.peek(), Ok(&42));
        assert_eq!(stack.peek(), Ok(&42));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut stack: ListBasedStack<i32> = ListBasedStack::default();

        assert!(stack.is_empty());
        assert_eq!(stack.peek(), Err(AlgorithmError::EmptyStack));
        assert_eq!(stack.pop().unwrap_err().to_string(), "Stack is empty");
    }

    #[test]
    fn test_from_iterator_contains_and_clear() {
        let mut stack: ListBasedStack<_> = vec!["x", "y", "z"].into_iter().collect();

        assert_eq!(stack.peek(), Ok(&"z"));
        assert!(stack.contains(&"y"));
        assert!(!stack.contains(&"w"));

        stack.clear();
        assert!(stack.is_empty());
        assert!(!stack.contains(&"y"));
    }
}
