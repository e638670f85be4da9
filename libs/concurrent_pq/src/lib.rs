//! A priority queue that can be shared between threads.
//!
//! Producers [`push`](ConcurrentPriorityQueue::push) elements, consumers either poll with
//! [`pop`](ConcurrentPriorityQueue::pop) or block in
//! [`await_pop`](ConcurrentPriorityQueue::await_pop) until an element arrives or the queue is
//! [`close`](ConcurrentPriorityQueue::close)d.

mod compare;
mod heap;
mod queue;
pub mod test;

// region:    --- Exports
pub use compare::{Compare, MaxFirst, MinFirst};
pub use queue::ConcurrentPriorityQueue;
// endregion: --- Exports
