// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A binary min-heap over plain integers with an explicit capacity policy.
//!
//! Unlike [`BinaryHeap`][bh], a `MinHeap` reports exactly the capacity it asked for and grows
//! on a fixed three-tier schedule: `+SMALL_THRESHOLD` while small, doubling in the middle and
//! `+BIG_THRESHOLD` once large. Every fallible operation returns a [`Result`] and leaves the heap
//! untouched when it fails.
//!
//! Insertion has amortized `O(log n)` time complexity. Popping the smallest item is `O(log n)`.
//! Retrieving the smallest item is `O(1)`.
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html

use std::fmt::{self, Debug};
use std::iter;
use std::slice;
use std::vec;

use compare::{natural, Compare};

mod error;

pub use crate::error::{Error, Result};

/// Capacities below this grow by exactly this many slots.
pub const SMALL_THRESHOLD: usize = 10;

/// Capacities at or above this grow by exactly this many slots.
pub const BIG_THRESHOLD: usize = 1_000_000;

// The heap is a complete binary tree stored level by level in a Vec:
//
//             0
//          /     \
//        1         2
//       / \       / \
//      3   4     5   6
//
// parent(i) = (i - 1) / 2, left(i) = 2i + 1, right(i) = 2i + 2.
// Every item is greater than or equal to its parent.
//
// The Vec's own capacity is only an upper bound. The heap keeps its own
// `cap` so that capacity() is exactly what the growth policy, reserve or
// shrink asked for, and the Vec never reallocates behind our back: a push
// happens only when len < cap <= data.capacity().

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

/// Moves the item at `pos` towards the root while it is smaller than its parent.
/// Equal items never swap.
fn sift_up<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) {
    while pos > 0 {
        let par = parent(pos);
        if cmp.compares_ge(&v[pos], &v[par]) {
            return;
        }
        v.swap(pos, par);
        pos = par;
    }
}

/// Moves the item at `pos` away from the root while a child is smaller than it.
/// The left child wins a tie with the right one.
fn sift_down<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) {
    loop {
        let left = pos * 2 + 1;
        if v.len() <= left {
            return; // leaf
        }
        let right = left + 1;
        let ch = if right < v.len() && cmp.compares_lt(&v[right], &v[left]) {
            right
        } else {
            left
        };
        if cmp.compares_ge(&v[ch], &v[pos]) {
            return;
        }
        v.swap(ch, pos);
        pos = ch;
    }
}

/// Builds a heap in place by sifting every item up, front to back.
///
/// This is the `O(n log n)` insertion build, not Floyd's `O(n)` sift-down build.
fn heapify<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    for pos in 1..v.len() {
        sift_up(v, pos, cmp);
    }
}

/// The capacity a full heap of capacity `cap` grows to, or `None` on overflow.
fn grown_capacity(cap: usize) -> Option<usize> {
    if cap >= BIG_THRESHOLD {
        cap.checked_add(BIG_THRESHOLD)
    } else if cap < SMALL_THRESHOLD {
        Some(cap + SMALL_THRESHOLD)
    } else {
        Some(cap * 2)
    }
}

/// An array-backed binary min-heap.
///
/// Items must be `Copy`: storage is relocated wholesale when the capacity changes, which is only
/// sound for items that own nothing.
pub struct MinHeap<T = i32> {
    data: Vec<T>,
    cap: usize,
}

impl<T: Ord + Copy> Default for MinHeap<T> {
    #[inline]
    fn default() -> MinHeap<T> {
        Self::new()
    }
}

impl<T: Ord + Copy> Clone for MinHeap<T> {
    fn clone(&self) -> MinHeap<T> {
        let mut data = Vec::with_capacity(self.cap);
        data.extend_from_slice(&self.data);
        MinHeap { data, cap: self.cap }
    }
}

impl<T: Ord + Copy> MinHeap<T> {
    /// Returns an empty heap with no storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let heap = MinHeap::<i32>::new();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), 0);
    /// ```
    pub fn new() -> MinHeap<T> {
        MinHeap { data: Vec::new(), cap: 0 }
    }

    /// Returns an empty heap able to hold exactly `capacity` items before it grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let heap = MinHeap::<i32>::with_capacity(5).unwrap();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<MinHeap<T>> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|e| Error::allocation_failure(capacity, Some(e)))?;
        Ok(MinHeap { data, cap: capacity })
    }

    /// Returns a heap holding a copy of `source[begin..end]`, with a capacity of exactly
    /// `end - begin`. The source is left untouched.
    ///
    /// Fails with [`Error::InvalidArgument`] if `end` precedes `begin` or lies past the end of
    /// `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let nums = [3, 6, -2, 7, 1];
    /// let heap = MinHeap::from_bounds(&nums, 1, 4).unwrap();
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.top(), Ok(-2));
    ///
    /// assert!(MinHeap::from_bounds(&nums, 4, 1).is_err());
    /// ```
    pub fn from_bounds(source: &[T], begin: usize, end: usize) -> Result<MinHeap<T>> {
        if end < begin || source.len() < end {
            return Err(Error::InvalidArgument { begin, end, len: source.len() });
        }
        let items = &source[begin..end];
        let mut data = Vec::new();
        data.try_reserve_exact(items.len())
            .map_err(|e| Error::allocation_failure(items.len(), Some(e)))?;
        data.extend_from_slice(items);
        Ok(Self::from_vec(data))
    }

    /// Returns a heap holding a copy of `source`, with a capacity of exactly `source.len()`.
    pub fn from_slice(source: &[T]) -> MinHeap<T> {
        Self::from_vec(source.to_vec())
    }

    fn from_vec(mut data: Vec<T>) -> MinHeap<T> {
        heapify(&mut data, &natural());
        let cap = data.len();
        let heap = MinHeap { data, cap };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns an iterator visiting all items in storage order, root first.
    pub fn iter(&self) -> Iter<'_, T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns the smallest item in the heap.
    pub fn top(&self) -> Result<T> {
        debug_assert!(self.is_valid());
        self.data.first().copied().ok_or_else(|| Error::empty_heap("take the top of"))
    }

    /// Returns the number of items the heap can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Sets the capacity to exactly `capacity`, growing or shrinking the storage.
    ///
    /// Does nothing if the capacity already matches. Fails with
    /// [`Error::ReserveBelowLength`] if `capacity` is smaller than [`len`](MinHeap::len).
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity == self.cap {
            return Ok(());
        }
        if capacity < self.data.len() {
            return Err(Error::ReserveBelowLength { requested: capacity, len: self.data.len() });
        }
        self.resize_storage(capacity)
    }

    /// Discards all spare capacity. An empty heap releases its storage entirely.
    pub fn shrink(&mut self) -> Result<()> {
        let len = self.data.len();
        if len == self.cap {
            return Ok(());
        }
        if len == 0 {
            self.data = Vec::new();
            self.cap = 0;
            return Ok(());
        }
        self.resize_storage(len)
    }

    // `capacity` is never below the live length here.
    fn resize_storage(&mut self, capacity: usize) -> Result<()> {
        if capacity > self.data.capacity() {
            self.data
                .try_reserve_exact(capacity - self.data.len())
                .map_err(|e| Error::allocation_failure(capacity, Some(e)))?;
        } else {
            self.data.shrink_to(capacity);
        }
        self.cap = capacity;
        Ok(())
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// Capacity is left as it is.
    pub fn pop(&mut self) -> Result<T> {
        debug_assert!(self.is_valid());
        let min = match self.data.len() {
            0 => return Err(Error::empty_heap("pop from")),
            1 => self.data.swap_remove(0),
            _ => {
                let res = self.data.swap_remove(0);
                sift_down(&mut self.data, 0, &natural());
                res
            }
        };
        debug_assert!(self.is_valid());
        Ok(min)
    }

    /// Pushes an item onto the heap, growing the storage first if it is full.
    pub fn push(&mut self, item: T) -> Result<()> {
        debug_assert!(self.is_valid());
        if self.data.len() == self.cap {
            let grown = grown_capacity(self.cap)
                .ok_or_else(|| Error::allocation_failure(usize::MAX, None))?;
            self.resize_storage(grown)?;
        }
        self.data.push(item);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, last, &natural());
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Consumes the heap and returns its items as a vector in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its items as a vector in sorted (ascending) order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let cmp = natural::<T>();
        let mut vec = self.data;
        for end in (1..vec.len()).rev() {
            vec.swap(0, end);
            sift_down(&mut vec[..end], 0, &cmp);
        }
        // The minimum was moved to the back first.
        vec.reverse();
        vec
    }

    /// Returns an iterator that pops items in ascending order until the heap is empty.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted(self)
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap, keeping its capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Checks that every item is greater than or equal to its parent.
    fn is_valid(&self) -> bool {
        let cmp = natural::<T>();
        self.data.len() <= self.cap
            && (1..self.data.len()).all(|i| cmp.compares_ge(&self.data[i], &self.data[parent(i)]))
    }
}

impl<T: Ord + Copy> From<Vec<T>> for MinHeap<T> {
    /// Returns a heap taking ownership of the items of `vec`, with a capacity of exactly
    /// `vec.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let heap = MinHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.capacity(), 4);
    /// assert_eq!(heap.top(), Ok(1));
    /// ```
    fn from(vec: Vec<T>) -> MinHeap<T> {
        Self::from_vec(vec)
    }
}

impl<'a, T: Ord + Copy> From<&'a [T]> for MinHeap<T> {
    fn from(source: &'a [T]) -> MinHeap<T> {
        Self::from_slice(source)
    }
}

impl<T: Debug> Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.data.len())
            .field("capacity", &self.cap)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Ord + Copy> iter::FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinHeap<T> {
        MinHeap::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord + Copy> Extend<T> for MinHeap<T> {
    /// Pushes every item in turn, so the heap grows on its usual schedule.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot grow. Use [`push`](MinHeap::push) to handle that case.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            if let Err(e) = self.push(elem) {
                panic!("{}", e);
            }
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// An iterator over a `MinHeap` in storage order.
///
/// Acquire through [`MinHeap::iter`](struct.MinHeap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.0.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.0.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `MinHeap` in storage order.
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator popping a `MinHeap` in ascending order.
///
/// Acquire through [`MinHeap::drain_sorted`](struct.MinHeap.html#method.drain_sorted). Items not
/// consumed stay in the heap.
pub struct DrainSorted<'a, T: 'a + Ord + Copy>(&'a mut MinHeap<T>);

impl<'a, T: 'a + Ord + Copy> Iterator for DrainSorted<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.pop().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.len();
        (len, Some(len))
    }
}

impl<'a, T: 'a + Ord + Copy> ExactSizeIterator for DrainSorted<'a, T> {}

impl<T: Ord + Copy> IntoIterator for MinHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.data.into_iter())
    }
}

impl<'a, T: Ord + Copy> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use rand::{thread_rng, Rng};

    use super::{grown_capacity, Error, MinHeap, BIG_THRESHOLD, SMALL_THRESHOLD};

    fn raw(data: Vec<i32>) -> MinHeap<i32> {
        let cap = data.len();
        MinHeap { data, cap }
    }

    #[test]
    fn fuzz_push_into_sorted_vec() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut heap = MinHeap::new();
            for _ in 0..100 {
                heap.push(rng.gen::<i32>()).unwrap();
            }
            let sorted = heap.into_sorted_vec();
            assert_eq!(sorted.len(), 100);
            for pair in sorted.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
        }
    }

    #[test]
    fn fuzz_pop_matches_reference() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut heap = MinHeap::new();
            let mut live: Vec<i32> = Vec::new();
            for _ in 0..200 {
                if rng.gen_bool(0.4) {
                    live.sort();
                    match heap.pop() {
                        Ok(x) => assert_eq!(x, live.remove(0)),
                        Err(e) => {
                            assert!(live.is_empty());
                            assert!(e.is_invalid_state());
                        }
                    }
                } else {
                    let x = rng.gen_range(-20..20);
                    heap.push(x).unwrap();
                    live.push(x);
                }
                assert!(heap.is_valid());
                assert_eq!(heap.len(), live.len());
            }
        }
    }

    #[test]
    fn fuzz_bulk_load_round_trip() {
        let mut rng = thread_rng();
        for len in 0..60 {
            let source: Vec<i32> = (0..len).map(|_| rng.gen_range(-10..10)).collect();
            let mut heap = MinHeap::from_slice(&source);
            assert!(heap.is_valid());
            let popped: Vec<i32> = heap.drain_sorted().collect();
            let mut expected = source.clone();
            expected.sort();
            assert_eq!(popped, expected);
            assert_eq!(heap.capacity(), source.len());
        }
    }

    #[test]
    fn test_round_trip_shapes() {
        let inputs: Vec<Vec<i32>> = vec![
            vec![],
            vec![42],
            vec![7; 9],
            (0..20).collect(),
            (0..20).rev().collect(),
            vec![3, 1, 2, 0],
            vec![6, 5, 1, 4, 3, 0, 2],
        ];
        for input in inputs {
            let mut expected = input.clone();
            expected.sort();
            let heap = MinHeap::from_slice(&input);
            assert_eq!(heap.clone().drain_sorted().collect::<Vec<_>>(), expected);
            assert_eq!(heap.into_sorted_vec(), expected);
        }
    }

    #[test]
    fn test_bulk_load_leaves_source_alone() {
        let nums = [3, 6, -2, 7, 1];
        let mut heap = MinHeap::from(&nums[..]);
        assert_eq!(heap.capacity(), 5);
        for (i, &expected) in [-2, 1, 3, 6, 7].iter().enumerate() {
            assert_eq!(heap.len(), 5 - i);
            assert_eq!(heap.pop(), Ok(expected));
            assert_eq!(heap.capacity(), 5);
        }
        assert_eq!(heap.len(), 0);
        assert_eq!(nums, [3, 6, -2, 7, 1]);
    }

    #[test]
    fn test_from_bounds() {
        let nums = [3, 6, -2, 7, 1];

        let heap = MinHeap::from_bounds(&nums, 0, 5).unwrap();
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.top(), Ok(-2));

        let heap = MinHeap::from_bounds(&nums, 2, 2).unwrap();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 0);

        assert_eq!(
            MinHeap::from_bounds(&nums, 3, 1).unwrap_err(),
            Error::InvalidArgument { begin: 3, end: 1, len: 5 }
        );
        assert!(matches!(
            MinHeap::from_bounds(&nums, 0, 6),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_push_with_growth() {
        let mut heap = MinHeap::with_capacity(3).unwrap();
        heap.push(2).unwrap();
        assert_eq!(heap.top(), Ok(2));
        heap.push(3).unwrap();
        assert_eq!(heap.top(), Ok(2));
        heap.push(-5).unwrap();
        assert_eq!(heap.top(), Ok(-5));
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.capacity(), 3);
        heap.push(7).unwrap();
        assert_eq!(heap.top(), Ok(-5));
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.capacity(), 13);
        heap.push(-5).unwrap();
        assert_eq!(heap.top(), Ok(-5));
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.capacity(), 13);
    }

    #[test]
    fn test_growth_law() {
        assert_eq!(grown_capacity(0), Some(10));
        assert_eq!(grown_capacity(9), Some(19));
        assert_eq!(grown_capacity(SMALL_THRESHOLD), Some(20));
        assert_eq!(grown_capacity(999_999), Some(1_999_998));
        assert_eq!(grown_capacity(BIG_THRESHOLD), Some(2_000_000));
        assert_eq!(grown_capacity(3_000_000), Some(4_000_000));
        assert_eq!(grown_capacity(usize::MAX), None);
    }

    #[test]
    fn test_growth_schedule_from_empty() {
        let mut heap = MinHeap::new();
        let mut seen = vec![heap.capacity()];
        for x in 0..100 {
            heap.push(x).unwrap();
            if *seen.last().unwrap() != heap.capacity() {
                seen.push(heap.capacity());
            }
        }
        assert_eq!(seen, vec![0, 10, 20, 40, 80, 160]);
    }

    #[test]
    fn test_memory() {
        let mut heap = MinHeap::with_capacity(3).unwrap();
        assert_eq!((heap.len(), heap.capacity()), (0, 3));
        heap.reserve(5).unwrap();
        assert_eq!((heap.len(), heap.capacity()), (0, 5));
        heap.shrink().unwrap();
        assert_eq!((heap.len(), heap.capacity()), (0, 0));
        heap.reserve(10).unwrap();
        heap.push(5).unwrap();
        assert_eq!(heap.top(), Ok(5));
        assert_eq!((heap.len(), heap.capacity()), (1, 10));
        heap.reserve(5).unwrap();
        assert_eq!((heap.len(), heap.capacity()), (1, 5));
        heap.shrink().unwrap();
        assert_eq!((heap.len(), heap.capacity()), (1, 1));
        heap.shrink().unwrap();
        assert_eq!((heap.len(), heap.capacity()), (1, 1));
    }

    #[test]
    fn test_reserve_then_shrink() {
        let mut heap = MinHeap::from(vec![4, 8, 1]);
        heap.reserve(64).unwrap();
        assert_eq!(heap.capacity(), 64);
        heap.shrink().unwrap();
        assert_eq!(heap.capacity(), heap.len());
        assert_eq!(heap.into_sorted_vec(), vec![1, 4, 8]);
    }

    #[test]
    fn test_reserve_below_length_is_atomic() {
        let mut heap = MinHeap::from(vec![9, 2, 5, 1]);
        heap.reserve(8).unwrap();
        let before = heap.clone().into_vec();
        let err = heap.reserve(3).unwrap_err();
        assert_eq!(err, Error::ReserveBelowLength { requested: 3, len: 4 });
        assert!(err.is_invalid_state());
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.capacity(), 8);
        assert_eq!(heap.into_vec(), before);
    }

    #[test]
    fn test_oversized_reserve_is_atomic() {
        let mut heap = MinHeap::from(vec![2, 1]);
        let err = heap.reserve(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::AllocationFailure { requested: usize::MAX, .. }));
        assert!(!err.is_invalid_state());
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.capacity(), 2);
        assert_eq!(heap.pop(), Ok(1));

        assert!(matches!(
            MinHeap::<i32>::with_capacity(usize::MAX),
            Err(Error::AllocationFailure { .. })
        ));
    }

    #[test]
    fn test_empty_heap() {
        let mut heap = MinHeap::from(vec![3, -5, 2]);
        assert_eq!(heap.pop(), Ok(-5));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.capacity(), 3);

        let err = heap.pop().unwrap_err();
        assert!(matches!(err, Error::EmptyHeap { .. }));
        assert!(err.is_invalid_state());
        assert!(heap.top().unwrap_err().is_invalid_state());
        assert_eq!(heap.capacity(), 3);

        heap.shrink().unwrap();
        assert_eq!(heap.capacity(), 0);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_duplicates_do_not_swap() {
        let mut heap = MinHeap::new();
        heap.push(4).unwrap();
        heap.push(4).unwrap();
        heap.push(4).unwrap();
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![4, 4, 4]);
        assert_eq!(heap.pop(), Ok(4));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut heap: MinHeap = (0..15).collect();
        assert_eq!(heap.capacity(), 15);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 15);
        heap.push(1).unwrap();
        assert_eq!(heap.capacity(), 15);
    }

    #[test]
    fn test_extend_uses_growth_policy() {
        let mut heap = MinHeap::new();
        heap.extend(vec![5, 3, 8]);
        heap.extend(&[1, 9]);
        assert_eq!(heap.capacity(), 10);
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.top(), Ok(1));
    }

    #[test]
    fn test_iterators() {
        let heap = MinHeap::from(vec![2, 1, 3]);
        assert_eq!(heap.iter().len(), 3);
        assert_eq!(heap.iter().next(), Some(&1));
        assert_eq!((&heap).into_iter().count(), 3);
        let mut items: Vec<i32> = heap.into_iter().collect();
        items.sort();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_drain_sorted_partial() {
        let mut heap = MinHeap::from(vec![5, 4, 3, 2, 1]);
        let first: Vec<i32> = heap.drain_sorted().take(2).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.drain_sorted().len(), 3);
    }

    #[test]
    fn test_debug() {
        let heap = MinHeap::<i32>::with_capacity(4).unwrap();
        assert_eq!(format!("{:?}", heap), "MinHeap { len: 0, capacity: 4, data: [] }");
        let heap = MinHeap::from(vec![2, 1]);
        assert_eq!(format!("{:?}", heap), "MinHeap { len: 2, capacity: 2, data: [1, 2] }");
    }

    #[test]
    fn test_is_valid() {
        assert!(raw(vec![]).is_valid());
        assert!(raw(vec![1]).is_valid());
        assert!(raw(vec![1, 1]).is_valid());
        assert!(raw(vec![1, 5, 2]).is_valid());
        assert!(raw(vec![1, 5, 2, 5, 6, 2]).is_valid());

        assert!(!raw(vec![2, 1]).is_valid());
        assert!(!raw(vec![1, 5, 0]).is_valid());
        assert!(!raw(vec![0, 3, 2, 1]).is_valid());
        assert!(!MinHeap { data: vec![1, 2], cap: 1 }.is_valid());
    }
}
