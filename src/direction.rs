//! Swap direction for the binary heap engine
//!
//! [`MinFirst`] and [`MaxFirst`] are zero-sized markers; the engine calls
//! [`Direction::outranks`] wherever it has to decide whether two elements are
//! in the wrong order.

use crate::traits::Lesser;

/// Which of two elements belongs closer to the root
pub trait Direction {
    /// Type name used by the `Display` rendering of the heap
    const NAME: &'static str;

    /// Returns true if `a` must sit above `b`
    fn outranks<T: Lesser>(a: &T, b: &T) -> bool;
}

/// Smallest element at the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

/// Largest element at the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl Direction for MinFirst {
    const NAME: &'static str = "MinHeap";

    #[inline]
    fn outranks<T: Lesser>(a: &T, b: &T) -> bool {
        a.less(b)
    }
}

impl Direction for MaxFirst {
    const NAME: &'static str = "MaxHeap";

    #[inline]
    fn outranks<T: Lesser>(a: &T, b: &T) -> bool {
        b.less(a)
    }
}
