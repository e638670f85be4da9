use std::cmp::Ordering;

use crate::Compare;

/// Array-backed binary heap that ranks its elements with a [`Compare`] strategy instead of
/// [`Ord`], so the ranking can be chosen at runtime.
///
/// The element with the highest rank sits at index 0. Elements only move by swapping, so a
/// misbehaving comparator can scramble the order but never drops or duplicates an element.
#[derive(Debug, Clone)]
pub(crate) struct Heap<T, C> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C> Heap<T, C> {
    pub(crate) fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Inserts `item`.
    ///
    /// This operation has *O*(log(*N*)) amortized theoretical complexity.
    pub(crate) fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the element with the highest rank.
    ///
    /// This operation has *O*(log(*N*)) non-amortized theoretical complexity.
    pub(crate) fn pop(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(top)
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.data[a], &self.data[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.outranks(pos, parent) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.outranks(right, left) {
                right
            } else {
                left
            };
            if !self.outranks(child, pos) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}
