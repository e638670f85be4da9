use std::{
    fmt,
    sync::{Condvar, Mutex, MutexGuard, PoisonError},
};

use crate::{Compare, MaxFirst, MinFirst, heap::Heap};

/// Priority queue guarded by a single lock, with blocking consumers.
///
/// The element with the highest rank according to the comparator `C` is always the next one
/// to be popped. Equal ranks are popped in no particular order.
///
/// The queue starts out open. [`close`](Self::close) switches it to closed for good: waiters in
/// [`await_pop`](Self::await_pop) stop blocking once nothing is left, while the remaining
/// elements can still be popped.
///
/// # Note
/// The comparator is called while the internal lock is held. It must not block or call back
/// into the same queue, otherwise the calling thread deadlocks.
pub struct ConcurrentPriorityQueue<T, C = MaxFirst> {
    state: Mutex<State<T, C>>,
    /// Signalled when an element becomes available or the queue closes.
    available: Condvar,
}

struct State<T, C> {
    heap: Heap<T, C>,
    closed: bool,
}

impl<T, C: Compare<T>> ConcurrentPriorityQueue<T, C> {
    /// Creates an empty queue ranked by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self::with_capacity(0, cmp)
    }

    /// Creates an empty queue ranked by `cmp` with room for `capacity` elements before it
    /// has to grow. The queue is not bounded by `capacity`.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            state: Mutex::new(State {
                heap: Heap::with_capacity(capacity, cmp),
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Inserts `value`. Never blocks beyond the critical section.
    ///
    /// A push into an empty queue wakes one thread waiting in [`await_pop`](Self::await_pop).
    pub fn push(&self, value: T) {
        let mut state = self.lock();
        let was_empty = state.heap.is_empty();
        state.heap.push(value);
        drop(state);

        if was_empty {
            self.available.notify_one();
        }
    }

    /// Removes and returns the highest ranked element, or `None` right away if the queue is
    /// empty.
    pub fn pop(&self) -> Option<T> {
        self.lock().heap.pop()
    }

    /// Removes and returns the highest ranked element, blocking the calling thread while the
    /// queue is empty and open.
    ///
    /// Returns `None` only once the queue is closed and empty. There is no timeout; the only
    /// way to release a waiter without an element is [`close`](Self::close).
    pub fn await_pop(&self) -> Option<T> {
        let mut state = self
            .available
            .wait_while(self.lock(), |state| state.heap.is_empty() && !state.closed)
            .unwrap_or_else(PoisonError::into_inner);

        let Some(item) = state.heap.pop() else {
            tracing::trace!("queue closed and drained, releasing waiter");
            return None;
        };

        // Pushes into a non-empty queue do not notify, so hand the leftovers to the next waiter.
        if !state.heap.is_empty() {
            tracing::trace!(remaining = state.heap.len(), "waking next waiter");
            drop(state);
            self.available.notify_one();
        }
        Some(item)
    }

    /// Returns a copy of the highest ranked element without removing it.
    ///
    /// This is a snapshot: a concurrent consumer may have taken the element by the time the
    /// caller looks at it.
    pub fn top(&self) -> Option<T>
    where
        T: Clone,
    {
        self.top_with(T::clone)
    }

    /// Calls `f` on the highest ranked element without removing it, if there is one.
    ///
    /// `f` runs while the lock is held and must not call back into the queue.
    pub fn top_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.lock().heap.peek().map(f)
    }

    /// Removes up to `n` elements in rank order within a single critical section.
    pub fn drain(&self, n: usize) -> Vec<T> {
        let mut state = self.lock();

        let mut items = Vec::with_capacity(n.min(state.heap.len()));
        for _ in 0..n {
            let Some(value) = state.heap.pop() else {
                break;
            };
            items.push(value);
        }

        items
    }
}

impl<T, C> ConcurrentPriorityQueue<T, C> {
    /// Whether the queue holds no elements at the time of the call.
    pub fn is_empty(&self) -> bool {
        self.lock().heap.is_empty()
    }

    /// Number of elements at the time of the call.
    pub fn len(&self) -> usize {
        self.lock().heap.len()
    }

    /// Closes the queue and wakes every waiter. Elements already in the queue are kept.
    ///
    /// Closing more than once has no further effect.
    pub fn close(&self) {
        let mut state = self.lock();
        if state.closed {
            return;
        }
        state.closed = true;
        tracing::debug!(remaining = state.heap.len(), "queue closed");
        drop(state);

        self.available.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Acquires the state lock. A panic in a comparator poisons the mutex; the heap is still
    /// intact in that case (see [`Heap`]), so the poison is ignored.
    fn lock(&self) -> MutexGuard<'_, State<T, C>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Ord> ConcurrentPriorityQueue<T, MaxFirst> {
    /// Creates an empty queue that pops the largest element first.
    pub fn max_first() -> Self {
        Self::new(MaxFirst)
    }
}

impl<T: Ord> ConcurrentPriorityQueue<T, MinFirst> {
    /// Creates an empty queue that pops the smallest element first.
    pub fn min_first() -> Self {
        Self::new(MinFirst)
    }
}

impl<T: Ord> Default for ConcurrentPriorityQueue<T, MaxFirst> {
    fn default() -> Self {
        Self::max_first()
    }
}

impl<T, C> fmt::Debug for ConcurrentPriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("ConcurrentPriorityQueue")
            .field("len", &state.heap.len())
            .field("closed", &state.closed)
            .finish_non_exhaustive()
    }
}
