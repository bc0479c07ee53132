//! Common traits for the binary heaps
//!
//! This module provides the two seams every heap in this crate is built on:
//!
//! - [`Lesser`]: the ordering capability an element type must provide
//! - [`Heap`]: the operations shared by [`MinHeap`](crate::MinHeap) and
//!   [`MaxHeap`](crate::MaxHeap)
//!
//! Neither heap knows anything about its elements beyond [`Lesser::less`].

use std::fmt;

/// Error type for heap self-checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A child sits below a parent it should sit above.
    ///
    /// Both indices are zero-based positions in the heap array.
    InvariantViolated { parent: usize, child: usize },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvariantViolated { parent, child } => {
                write!(
                    f,
                    "heap invariant violated: element {} outranks its parent {}",
                    child, parent
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A strict "precedes" relation between two values of the same type
///
/// This is the only thing a heap asks of its elements. Implementations must be
/// a strict weak ordering: `a.less(a)` is false, and `a.less(b)` implies
/// `!b.less(a)`. The heaps do not verify this; a broken ordering produces a
/// broken heap, which [`BinaryHeap::check_invariant`](crate::BinaryHeap::check_invariant)
/// can detect after the fact.
///
/// Values where neither precedes the other are treated as equal priority.
///
/// # Example
///
/// ```rust
/// use lesser_heaps::{Lesser, MinHeap};
///
/// struct Job {
///     deadline: u32,
///     name: &'static str,
/// }
///
/// impl Lesser for Job {
///     fn less(&self, other: &Self) -> bool {
///         self.deadline < other.deadline
///     }
/// }
///
/// let mut heap = MinHeap::new();
/// heap.push(Job { deadline: 30, name: "report" });
/// heap.push(Job { deadline: 10, name: "backup" });
/// assert_eq!(heap.pop().map(|job| job.name), Some("backup"));
/// ```
pub trait Lesser {
    /// Returns true if `self` strictly precedes `other`
    fn less(&self, other: &Self) -> bool;
}

/// Base trait for the heaps in this crate
///
/// Elements carry their own priority through [`Lesser`], so there is no
/// separate priority argument.
///
/// # Example
///
/// ```rust
/// use lesser_heaps::{Heap, MaxHeap, MinHeap};
///
/// fn drain<H: Heap<i32>>(mut heap: H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Some(value) = heap.pop() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut min = MinHeap::new();
/// let mut max = MaxHeap::new();
/// for value in [3, 1, 2] {
///     Heap::push(&mut min, value);
///     Heap::push(&mut max, value);
/// }
/// assert_eq!(drain(min), vec![1, 2, 3]);
/// assert_eq!(drain(max), vec![3, 2, 1]);
/// ```
pub trait Heap<T: Lesser> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the root element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the root element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
