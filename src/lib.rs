// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-place max-heap algorithms over slices.
//!
//! The functions in this crate treat a caller-owned slice as a binary max-heap: no item compares
//! greater than its parent. They never allocate and only ever rearrange the slice by swapping
//! two of its items, so the slice always holds the items it was given.
//!
//! Every operation comes in two flavors: one ordered by the items' natural order (`T: Ord`), and
//! a `_by` variant that accepts any [`Compare`][cmp] comparator, such as a closure or
//! `natural().rev()` for a min-heap.
//!
//! | Operation        | Comparisons   |
//! |------------------|---------------|
//! | `is_heap`        | `O(n)`        |
//! | `heap_insert`    | `O(log n)`    |
//! | `heap_delete`    | `O(log n)`    |
//! | `heap_make`      | `O(n)`        |
//! | `heap_to_sorted` | `O(n log n)`  |
//!
//! A comparator that panics never leaves the slice with an item lost or duplicated, though the
//! slice may no longer be a heap afterwards.
//!
//! [`MaxHeap`](queue/struct.MaxHeap.html) is an owned priority queue built on these functions.
//!
//! [cmp]: https://docs.rs/compare/0.0.6/compare/trait.Compare.html
//!
//! # Examples
//!
//! ```
//! use heap_algs::{heap_make, heap_to_sorted, is_heap};
//!
//! let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
//! heap_make(&mut v);
//! assert!(is_heap(&v));
//!
//! heap_to_sorted(&mut v);
//! assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 9]);
//! ```

extern crate compare;
#[cfg(test)] extern crate rand;

use compare::{Compare, natural};

pub use queue::MaxHeap;

pub mod queue;

// The slice is read as a complete binary tree, level by level:
//
//            0
//        /       \
//       1         2
//     /   \     /   \
//    3     4   5     6
//   / \
//  7   8
//
// Item k has children 2k+1 and 2k+2 and parent (k-1)/2. Any of these
// may fall outside the slice, so callers compare against `len` first.

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

fn left_child(x: usize) -> usize { 2 * x + 1 }

/// Returns `true` if no item in `v` compares greater than its parent.
///
/// Empty and single-item slices are always heaps.
///
/// # Examples
///
/// ```
/// use heap_algs::is_heap;
///
/// assert!(is_heap::<i32>(&[]));
/// assert!(is_heap(&[9, 6, 5, 2, 4, 1, 3, 1]));
/// assert!(!is_heap(&[1, 2]));
/// ```
pub fn is_heap<T: Ord>(v: &[T]) -> bool {
    is_heap_by(v, &natural())
}

/// Returns `true` if no item in `v` compares greater than its parent according to `cmp`.
pub fn is_heap_by<T, C: Compare<T>>(v: &[T], cmp: &C) -> bool {
    (1..v.len()).all(|k| !cmp.compares_lt(&v[parent(k)], &v[k]))
}

/// Sifts the item at `pos` down until it is no less than its children.
///
/// Everything below `pos` must already be a heap. When the two children
/// compare equal the right one is taken.
fn sift_down<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) {
    let len = v.len();
    debug_assert!(pos < len);
    loop {
        let left = left_child(pos);
        if left >= len { return; } // No children. We're done.
        let right = left + 1;
        // Pick the bigger child
        let child = if right < len && !cmp.compares_lt(&v[right], &v[left]) { right }
                    else { left };
        if !cmp.compares_lt(&v[pos], &v[child]) { return; }
        v.swap(pos, child);
        pos = child;
    }
}

/// Moves the last item of `v` up into the heap formed by the items before it.
///
/// `v[..v.len() - 1]` must be a heap. Afterwards all of `v` is one.
///
/// # Examples
///
/// ```
/// use heap_algs::{heap_insert, is_heap};
///
/// let mut v = vec![9, 6, 5, 1, 4];
/// v.push(7);
/// heap_insert(&mut v);
/// assert!(is_heap(&v));
/// assert_eq!(v[0], 9);
/// ```
pub fn heap_insert<T: Ord>(v: &mut [T]) {
    heap_insert_by(v, &natural())
}

/// Moves the last item of `v` up into the heap formed by the items before it, ordered by `cmp`.
pub fn heap_insert_by<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    debug_assert!(!v.is_empty());
    if v.is_empty() { return; }
    debug_assert!(is_heap_by(&v[..v.len() - 1], cmp));
    let mut pos = v.len() - 1;
    while pos > 0 {
        let par = parent(pos);
        if !cmp.compares_lt(&v[par], &v[pos]) { break; }
        v.swap(par, pos);
        pos = par;
    }
}

/// Moves the greatest item of the heap `v` to its last position.
///
/// `v` must be a heap. Afterwards `v[..v.len() - 1]` is a heap of the
/// remaining items, and the removed maximum sits in the last slot.
///
/// # Examples
///
/// ```
/// use heap_algs::{heap_delete, is_heap};
///
/// let mut v = [9, 6, 5, 2, 4, 1, 3, 1];
/// heap_delete(&mut v);
/// assert_eq!(v[7], 9);
/// assert!(is_heap(&v[..7]));
/// ```
pub fn heap_delete<T: Ord>(v: &mut [T]) {
    heap_delete_by(v, &natural())
}

/// Moves the greatest item of the heap `v`, as ordered by `cmp`, to its last position.
pub fn heap_delete_by<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    debug_assert!(!v.is_empty());
    debug_assert!(is_heap_by(v, cmp));
    delete_max(v, cmp);
}

fn delete_max<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    if v.len() < 2 { return; }
    let last = v.len() - 1;
    v.swap(0, last);
    sift_down(&mut v[..last], 0, cmp);
}

/// Rearranges `v` into a heap using a linear number of comparisons.
///
/// # Examples
///
/// ```
/// use heap_algs::{heap_make, is_heap};
///
/// let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
/// heap_make(&mut v);
/// assert!(is_heap(&v));
/// assert_eq!(v[0], 9);
/// ```
pub fn heap_make<T: Ord>(v: &mut [T]) {
    heap_make_by(v, &natural())
}

/// Rearranges `v` into a heap ordered by `cmp` using a linear number of comparisons.
pub fn heap_make_by<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    // Sift down every non-leaf, last one first, so that both subtrees of
    // an item are heaps by the time it is visited.
    for pos in (0..v.len() / 2).rev() {
        sift_down(v, pos, cmp);
    }
    debug_assert!(is_heap_by(v, cmp));
}

/// Sorts the heap `v` in ascending order.
///
/// This sort is not stable. `v` must be a heap to begin with; use
/// [`heap_sort`](fn.heap_sort.html) for arbitrary slices.
///
/// # Examples
///
/// ```
/// use heap_algs::heap_to_sorted;
///
/// let mut v = [9, 6, 5, 2, 4, 1, 3, 1];
/// heap_to_sorted(&mut v);
/// assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn heap_to_sorted<T: Ord>(v: &mut [T]) {
    heap_to_sorted_by(v, &natural())
}

/// Sorts the heap `v` in ascending order according to `cmp`.
pub fn heap_to_sorted_by<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    debug_assert!(is_heap_by(v, cmp));
    for hsize in (2..v.len() + 1).rev() {
        delete_max(&mut v[..hsize], cmp);
    }
}

/// Sorts `v` in ascending order with heapsort.
///
/// Takes `O(n log n)` comparisons in the worst case and no extra memory. Not stable.
///
/// # Examples
///
/// ```
/// use heap_algs::heap_sort;
///
/// let mut v = [5, -3, 8, 0, 2];
/// heap_sort(&mut v);
/// assert_eq!(v, [-3, 0, 2, 5, 8]);
/// ```
pub fn heap_sort<T: Ord>(v: &mut [T]) {
    heap_sort_by(v, &natural())
}

/// Sorts `v` in ascending order according to `cmp` with heapsort.
///
/// # Examples
///
/// ```
/// use heap_algs::heap_sort_by;
/// use compare::{Compare, natural};
///
/// let mut v = [5, -3, 8, 0, 2];
/// heap_sort_by(&mut v, &natural().rev());
/// assert_eq!(v, [8, 5, 2, 0, -3]);
/// ```
pub fn heap_sort_by<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    heap_make_by(v, cmp);
    heap_to_sorted_by(v, cmp);
}
