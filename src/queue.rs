// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A `Vec`-backed priority queue driven by the slice algorithms of this crate.

use compare::{Compare, Natural, natural};

use super::{heap_delete_by, heap_insert_by, heap_make_by, heap_to_sorted_by, is_heap_by};

/// A priority queue that hands out its greatest item first.
///
/// The buffer is a heap at all times. Changing an item's order while it is
/// queued (through `Cell`, say) breaks that and makes later results unspecified.
pub struct MaxHeap<T, C: Compare<T> = Natural<T>> {
    buf: Vec<T>,
    cmp: C,
}

impl<T: Ord> MaxHeap<T> {
    /// Returns an empty queue using the natural order of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_algs::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// heap.push(2);
    /// heap.push(7);
    /// assert_eq!(heap.pop(), Some(7));
    /// ```
    pub fn new() -> MaxHeap<T> { MaxHeap::with_comparator(natural()) }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    /// Heapifies `vec` in place with a linear number of comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_algs::MaxHeap;
    ///
    /// let heap = MaxHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.peek(), Some(&6));
    /// ```
    fn from(vec: Vec<T>) -> MaxHeap<T> {
        MaxHeap::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> MaxHeap<T, C> {
    /// Returns an empty queue that puts the item greatest under `cmp` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use heap_algs::MaxHeap;
    /// use compare::{Compare, natural};
    ///
    /// let mut heap = MaxHeap::with_comparator(natural().rev());
    /// heap.push(3);
    /// heap.push(1);
    /// heap.push(2);
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    pub fn with_comparator(cmp: C) -> MaxHeap<T, C> {
        MaxHeap { buf: Vec::new(), cmp: cmp }
    }

    /// Takes ownership of `vec` and heapifies it under `cmp`.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> MaxHeap<T, C> {
        heap_make_by(&mut vec, &cmp);
        MaxHeap { buf: vec, cmp: cmp }
    }

    /// Returns the greatest item, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Adds `item` to the queue.
    pub fn push(&mut self, item: T) {
        // The new slot goes in first; the sift-up then places it.
        self.buf.push(item);
        heap_insert_by(&mut self.buf, &self.cmp);
        debug_assert!(is_heap_by(&self.buf, &self.cmp));
    }

    /// Removes and returns the greatest item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.buf.is_empty() { return None; }
        heap_delete_by(&mut self.buf, &self.cmp);
        let top = self.buf.pop();
        debug_assert!(is_heap_by(&self.buf, &self.cmp));
        top
    }

    pub fn len(&self) -> usize { self.buf.len() }

    pub fn is_empty(&self) -> bool { self.buf.is_empty() }

    /// Consumes the queue, returning its items in ascending order under the comparator.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut buf = self.buf;
        heap_to_sorted_by(&mut buf, &self.cmp);
        buf
    }
}

#[cfg(test)]
mod test {
    use compare::{Compare, natural};
    use rand::{thread_rng, Rng};

    use super::MaxHeap;

    #[test]
    fn fuzz_pop_order() {
        let mut rng = thread_rng();
        for _ in 0..50 {
            let mut heap = MaxHeap::new();
            let mut model = Vec::new();
            for _ in 0..200 {
                if rng.gen_range(0..3) == 0 {
                    model.sort();
                    assert_eq!(heap.pop(), model.pop());
                } else {
                    let item = rng.gen_range(0..1000u32);
                    heap.push(item);
                    model.push(item);
                }
                assert_eq!(heap.len(), model.len());
            }
        }
    }

    #[test]
    fn test_from_vec() {
        let heap = MaxHeap::<i32>::from(vec![]);
        assert_eq!(heap.peek(), None);
        assert!(heap.is_empty());

        let heap = MaxHeap::from(vec![2, 1, 3]);
        assert_eq!(heap.peek(), Some(&3));
        assert_eq!(heap.len(), 3);

        let heap = MaxHeap::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(heap.into_sorted_vec(), [1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_pop_single_and_empty() {
        let mut heap = MaxHeap::from(vec![7]);
        assert_eq!(heap.pop(), Some(7));
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_with_comparator() {
        let mut heap: MaxHeap<i32, _> = MaxHeap::with_comparator(natural().rev());
        for &x in &[4, 8, 1, 9, 3] {
            heap.push(x);
        }
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.into_sorted_vec(), [9, 8, 4, 3, 1]);

        let by_len = |l: &&str, r: &&str| l.len().cmp(&r.len());
        let mut heap = MaxHeap::from_vec_and_comparator(vec!["a", "abc", "ab"], by_len);
        assert_eq!(heap.pop(), Some("abc"));
        assert_eq!(heap.pop(), Some("ab"));
        assert_eq!(heap.pop(), Some("a"));
        assert_eq!(heap.pop(), None);
    }
}
