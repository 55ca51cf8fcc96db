use std::{
    fmt::Debug,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    error::QueueError,
    queue::{BoundedQueue, StepResult},
};

/// Cloneable handle that lets a producer and a consumer on different threads
/// drive one [`BoundedQueue`].
///
/// Every step and reset runs under the same lock, so the two halves of a step
/// always see one occupancy snapshot and a reset never lands mid-step.
#[derive(Debug)]
pub struct SharedQueue<T>
where
    T: Clone + Debug,
{
    inner: Arc<Mutex<BoundedQueue<T>>>,
}

impl<T> Clone for SharedQueue<T>
where
    T: Clone + Debug,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedQueue<T>
where
    T: Clone + Debug,
{
    pub fn new(capacity: usize, default_value: T) -> Result<Self, QueueError> {
        Ok(Self::from(BoundedQueue::new(capacity, default_value)?))
    }

    // step and reset leave the queue consistent even when a clone unwinds,
    // so a handle that panicked while holding the lock does not stop the others
    fn lock(&self) -> MutexGuard<'_, BoundedQueue<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn step(&self, enqueue_request: Option<T>, dequeue_request: bool) -> StepResult<T> {
        self.lock().step(enqueue_request, dequeue_request)
    }

    pub fn reset(&self) {
        self.lock().reset()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the live values, oldest first.
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().iter().cloned().collect()
    }
}

impl<T> From<BoundedQueue<T>> for SharedQueue<T>
where
    T: Clone + Debug,
{
    fn from(queue: BoundedQueue<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }
}
