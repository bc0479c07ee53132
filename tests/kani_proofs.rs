//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use lesser_heaps::{MaxHeap, MinHeap};

/// Proof that push always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_increments_len() {
    let mut heap: MinHeap<u32> = MinHeap::new();
    heap.push(kani::any());
    heap.push(kani::any());
    let initial_len = heap.len();

    heap.push(kani::any());

    assert!(heap.len() == initial_len + 1);
}

/// Proof that peek and pop on an empty heap report nothing
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_signals_absence() {
    let mut min: MinHeap<u32> = MinHeap::new();
    let mut max: MaxHeap<u32> = MaxHeap::new();

    assert!(min.peek().is_none());
    assert!(min.pop().is_none());
    assert!(max.peek().is_none());
    assert!(max.pop().is_none());
    assert!(min.is_empty() && max.is_empty());
}

/// Proof that the root of a min-heap is no larger than anything pushed
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_min_heap_root_is_minimum() {
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    let d: u32 = kani::any();

    let heap = MinHeap::from_vec(vec![a, b, c, d]);
    let root = *heap.peek().expect("heap holds four elements");

    assert!(root <= a && root <= b && root <= c && root <= d);
    assert!(heap.check_invariant().is_ok());
}

/// Proof that pop hands back elements in non-increasing order for a max-heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_max_heap_pop_order() {
    let mut heap: MaxHeap<u8> = MaxHeap::new();
    heap.push(kani::any());
    heap.push(kani::any());
    heap.push(kani::any());
    heap.push(kani::any());

    let first = heap.pop().expect("four elements pushed");
    let second = heap.pop().expect("three elements left");
    let third = heap.pop().expect("two elements left");
    let fourth = heap.pop().expect("one element left");

    assert!(first >= second && second >= third && third >= fourth);
    assert!(heap.pop().is_none());
}
