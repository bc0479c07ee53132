//! Standard library compatibility layer
//!
//! [`Lesser`] implementations for primitives and common std types, plus the
//! [`ByOrd`] adapter for anything that already implements `Ord`.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Reverse;
//! use lesser_heaps::{ByOrd, MinHeap};
//!
//! // Reverse turns a MinHeap into largest-first.
//! let mut heap = MinHeap::new();
//! heap.extend([Reverse(1), Reverse(5), Reverse(3)]);
//! assert_eq!(heap.pop(), Some(Reverse(5)));
//!
//! // Any Ord type can be wrapped.
//! let mut heap = MinHeap::new();
//! heap.push(ByOrd(vec![2, 1]));
//! heap.push(ByOrd(vec![1, 9]));
//! assert_eq!(heap.pop().map(ByOrd::into_inner), Some(vec![1, 9]));
//! ```

use std::cmp::Reverse;
use std::fmt;

use crate::traits::Lesser;

macro_rules! impl_lesser_by_lt {
    ($($t:ty),* $(,)?) => {
        $(
            impl Lesser for $t {
                #[inline]
                fn less(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

impl_lesser_by_lt!(i8, i16, i32, i64, i128, isize);
impl_lesser_by_lt!(u8, u16, u32, u64, u128, usize);
impl_lesser_by_lt!(char, bool, (), String, str);

// NaN neither precedes nor follows anything, so a heap holding NaN is not
// guaranteed to pop in order.
impl_lesser_by_lt!(f32, f64);

impl<T: Lesser + ?Sized> Lesser for &T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        (**self).less(*other)
    }
}

impl<T: Lesser + ?Sized> Lesser for Box<T> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        (**self).less(other)
    }
}

impl<T: Lesser> Lesser for Reverse<T> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        other.0.less(&self.0)
    }
}

impl<A: Lesser, B: Lesser> Lesser for (A, B) {
    fn less(&self, other: &Self) -> bool {
        if self.0.less(&other.0) {
            return true;
        }
        !other.0.less(&self.0) && self.1.less(&other.1)
    }
}

impl<A: Lesser, B: Lesser, C: Lesser> Lesser for (A, B, C) {
    fn less(&self, other: &Self) -> bool {
        if self.0.less(&other.0) {
            return true;
        }
        if other.0.less(&self.0) {
            return false;
        }
        (&self.1, &self.2).less(&(&other.1, &other.2))
    }
}

/// Adapter that orders any `Ord` type through [`Lesser`]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ByOrd<T>(pub T);

impl<T> ByOrd<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Ord> Lesser for ByOrd<T> {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl<T: fmt::Debug> fmt::Debug for ByOrd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for ByOrd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> From<T> for ByOrd<T> {
    fn from(value: T) -> Self {
        ByOrd(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MaxHeap, MinHeap};

    #[test]
    fn test_primitives() {
        assert!(1i64.less(&2));
        assert!(!2u8.less(&2));
        assert!('a'.less(&'b'));
        assert!(false.less(&true));
        assert!("apple".less(&"banana"));
        assert!(String::from("a").less(&String::from("b")));
        assert!(1.5f64.less(&2.5));
        assert!(!().less(&()));
    }

    #[test]
    fn test_reverse_flips_order() {
        let mut heap = MinHeap::new();
        heap.extend([3, 1, 4, 1, 5].map(Reverse));
        let popped: Vec<i32> = heap.into_iter_sorted().map(|Reverse(v)| v).collect();
        assert_eq!(popped, vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn test_tuples_are_lexicographic() {
        assert!((1, 9).less(&(2, 0)));
        assert!((1, 0).less(&(1, 9)));
        assert!(!(1, 9).less(&(1, 9)));
        assert!((1, 2, 3).less(&(1, 2, 4)));
        assert!(!(1, 3, 0).less(&(1, 2, 9)));

        let mut heap = MaxHeap::new();
        heap.push((2, "two"));
        heap.push((7, "seven"));
        heap.push((5, "five"));
        assert_eq!(heap.pop(), Some((7, "seven")));
    }

    #[test]
    fn test_by_ord() {
        let mut heap = MinHeap::new();
        for word in ["pear", "fig", "apple"] {
            heap.push(ByOrd(word.to_string()));
        }
        assert_eq!(heap.to_string(), "MinHeap(elements=[apple pear fig])");
        assert_eq!(heap.pop().map(ByOrd::into_inner).as_deref(), Some("apple"));
    }
}
