//! Binary Heaps for Rust
//!
//! This crate provides array-backed binary heaps in two orderings over any
//! element type that knows how to compare itself with another value of the
//! same type.
//!
//! # Features
//!
//! - **MinHeap**: smallest element at the root; O(log n) push and pop, O(1) peek
//! - **MaxHeap**: largest element at the root; same bounds
//! - **Lesser**: the single ordering capability elements must provide, already
//!   implemented for primitives, strings, tuples and `std::cmp::Reverse`
//!
//! Both heaps render their internal array through `Display`, which is handy
//! when checking exactly how a sequence of pushes laid the heap out.
//!
//! # Example
//!
//! ```rust
//! use lesser_heaps::{MaxHeap, MinHeap};
//!
//! let mut min = MinHeap::from_vec(vec![10, 12]);
//! let mut max = MaxHeap::from_vec(vec![10, 12]);
//! assert_eq!(min.to_string(), "MinHeap(elements=[10 12])");
//! assert_eq!(max.to_string(), "MaxHeap(elements=[12 10])");
//!
//! min.push(1);
//! max.push(1);
//! assert_eq!(min.peek(), Some(&1));
//! assert_eq!(max.peek(), Some(&12));
//!
//! let mut empty: MinHeap<i32> = MinHeap::new();
//! assert_eq!(empty.pop(), None);
//! ```

pub mod binary;
pub mod direction;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, IntoIterSorted, MaxHeap, MinHeap};
pub use direction::{Direction, MaxFirst, MinFirst};
pub use stdlib_compat::ByOrd;
pub use traits::{Heap, HeapError, Lesser};
