//! Array-backed binary heap
//!
//! One engine serves both orderings. [`MinHeap`] keeps the smallest element at
//! the root and [`MaxHeap`] the largest; the only difference is the
//! [`Direction`] used to decide swaps.
//!
//! Elements live in a single `Vec<T>` in heap order: the children of position
//! `i` are `2i + 1` and `2i + 2`, and its parent is `(i - 1) / 2`.
//!
//! # Time Complexity
//!
//! | Operation | Complexity   |
//! |-----------|--------------|
//! | `push`    | O(log n)     |
//! | `pop`     | O(log n)     |
//! | `peek`    | O(1)         |
//! | `len`     | O(1)         |
//! | `extend`  | O(k log n)   |
//!
//! Bulk construction inserts one element at a time rather than running a
//! bottom-up heapify, so the array layout after construction is exactly the
//! layout produced by pushing the elements in order.
//!
//! # Example
//!
//! ```rust
//! use lesser_heaps::MinHeap;
//!
//! let mut heap = MinHeap::from_vec(vec![10, 12]);
//! assert_eq!(heap.to_string(), "MinHeap(elements=[10 12])");
//!
//! heap.extend([2, 2, 2, 3, 5, 4, 1, 34]);
//! assert_eq!(heap.len(), 10);
//! assert_eq!(heap.to_string(), "MinHeap(elements=[1 2 3 2 2 10 5 12 4 34])");
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::direction::{Direction, MaxFirst, MinFirst};
use crate::traits::{Heap, HeapError, Lesser};

/// A binary heap ordered by `D`
///
/// Use the [`MinHeap`] and [`MaxHeap`] aliases rather than naming `D`
/// directly.
#[derive(Clone, Debug)]
pub struct BinaryHeap<T, D> {
    data: Vec<T>,
    _direction: PhantomData<D>,
}

/// A binary heap that pops the smallest element first
pub type MinHeap<T> = BinaryHeap<T, MinFirst>;

/// A binary heap that pops the largest element first
pub type MaxHeap<T> = BinaryHeap<T, MaxFirst>;

impl<T, D> BinaryHeap<T, D> {
    /// Creates an empty heap
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            _direction: PhantomData,
        }
    }

    /// Creates an empty heap with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _direction: PhantomData,
        }
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the root element without removing it
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The heap array in its internal order
    ///
    /// The order depends on insertion history, not only on which elements
    /// are present.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap and returns the heap array in its internal order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Drops spare capacity where possible
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Drops every element
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Lesser, D: Direction> BinaryHeap<T, D> {
    /// Builds a heap by pushing each element of `items` in order
    pub fn from_vec(items: Vec<T>) -> Self {
        debug!("{}: building from {} elements", D::NAME, items.len());
        let mut heap = Self::with_capacity(items.len());
        heap.extend(items);
        heap
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let index = self.data.len() - 1;
        let settled = self.sift_up(index);
        trace!("{}: pushed to {}, settled at {}", D::NAME, index, settled);
    }

    /// Removes and returns the root element
    ///
    /// The last element takes the root's place and sinks to its level.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        let mut removed = self.data.pop()?;
        if let Some(root) = self.data.first_mut() {
            std::mem::swap(&mut removed, root);
            let settled = self.sift_down(0);
            trace!("{}: popped root, last element settled at {}", D::NAME, settled);
        }
        Some(removed)
    }

    /// Consumes the heap, yielding elements in pop order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, D> {
        IntoIterSorted { inner: self }
    }

    /// Consumes the heap and returns its elements in pop order
    ///
    /// Ascending for [`MinHeap`], descending for [`MaxHeap`].
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Verifies that no element outranks its parent
    ///
    /// This can only fail if the [`Lesser`] implementation is not a strict
    /// ordering.
    pub fn check_invariant(&self) -> Result<(), HeapError> {
        for child in 1..self.data.len() {
            let parent = (child - 1) / 2;
            if D::outranks(&self.data[child], &self.data[parent]) {
                return Err(HeapError::InvariantViolated { parent, child });
            }
        }
        Ok(())
    }

    /// Move element at index up to maintain heap property
    ///
    /// Returns the index the element came to rest at.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !D::outranks(&self.data[index], &self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
        index
    }

    /// Move element at index down to maintain heap property
    ///
    /// When both children outrank the element, the one that outranks its
    /// sibling is promoted; promoting the other would leave it below a child
    /// that belongs above it. Ties go left.
    ///
    /// Returns the index the element came to rest at.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let has_right = right < len;

            let swap_left = D::outranks(&self.data[left], &self.data[index]);
            let swap_right = has_right && D::outranks(&self.data[right], &self.data[index]);
            if !(swap_left || swap_right) {
                break;
            }

            let child = if has_right && D::outranks(&self.data[right], &self.data[left]) {
                right
            } else {
                left
            };
            self.data.swap(index, child);
            index = child;
        }
        index
    }
}

impl<T: Lesser, D: Direction> Heap<T> for BinaryHeap<T, D> {
    fn new() -> Self {
        BinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }
}

impl<T, D> Default for BinaryHeap<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the heap array in internal order, e.g. `MinHeap(elements=[1 3 2])`
impl<T: fmt::Display, D: Direction> fmt::Display for BinaryHeap<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(elements=[", D::NAME)?;
        for (i, element) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("])")
    }
}

impl<T: Lesser, D: Direction> From<Vec<T>> for BinaryHeap<T, D> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Lesser, D: Direction> FromIterator<T> for BinaryHeap<T, D> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<T: Lesser, D: Direction> Extend<T> for BinaryHeap<T, D> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

/// Consuming iterator returned by [`BinaryHeap::into_iter_sorted`]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, D> {
    inner: BinaryHeap<T, D>,
}

impl<T: Lesser, D: Direction> Iterator for IntoIterSorted<T, D> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T: Lesser, D: Direction> ExactSizeIterator for IntoIterSorted<T, D> {}

impl<T: Lesser, D: Direction> FusedIterator for IntoIterSorted<T, D> {}
