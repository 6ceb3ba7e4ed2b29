//! A first-in-first-out work queue, used to drive breadth-first traversals.
use std::collections::VecDeque;

/// FIFO queue: [Queue::pop] returns items in the order they were pushed.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue { items: VecDeque::new() }
    }

    /// Appends `item` to the back of the queue.
    pub fn push(&mut self, item:T) {
        self.items.push_back(item);
    }

    /// Removes and returns the oldest item, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}
