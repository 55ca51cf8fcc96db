use std::{fmt::Debug, mem};

use tracing::{debug, trace};

use crate::error::{QueueError, QueueFault};

use super::ring_cursors::RingCursors;

/// Outcome of one [`BoundedQueue::step`].
///
/// `count` and the four status flags describe the queue after the step.
/// `overflow` and `underflow` only describe this step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult<T> {
    pub enqueue_accepted: bool,
    pub dequeue_accepted: bool,
    pub output_value: T,
    pub count: usize,
    pub full: bool,
    pub empty: bool,
    pub almost_full: bool,
    pub almost_empty: bool,
    pub overflow: bool,
    pub underflow: bool,
}

impl<T> StepResult<T> {
    /// Lifts the transient fault flags into a `Result`.
    pub fn check(&self) -> Result<(), QueueFault> {
        if self.overflow {
            Err(QueueFault::Overflow)
        } else if self.underflow {
            Err(QueueFault::Underflow)
        } else {
            Ok(())
        }
    }
}

/// Fixed-capacity FIFO ring driven one step at a time.
///
/// Each step takes at most one enqueue and one dequeue request and decides both
/// against the occupancy it had on entry, so a step at full rate in both
/// directions leaves the count unchanged.
#[derive(Clone, Debug)]
pub struct BoundedQueue<T>
where
    T: Clone + Debug,
{
    slots: Box<[T]>,
    cursors: RingCursors,
    default_value: T,
    output: T,
    overflow: bool,
    underflow: bool,
}

impl<T> BoundedQueue<T>
where
    T: Clone + Debug,
{
    pub fn new(capacity: usize, default_value: T) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }

        Ok(Self {
            slots: vec![default_value.clone(); capacity].into_boxed_slice(),
            cursors: RingCursors::new(capacity),
            output: default_value.clone(),
            default_value,
            overflow: false,
            underflow: false,
        })
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cursors.capacity()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.cursors.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    #[inline]
    pub const fn is_almost_full(&self) -> bool {
        self.cursors.is_almost_full()
    }

    #[inline]
    pub const fn is_almost_empty(&self) -> bool {
        self.cursors.is_almost_empty()
    }

    #[inline]
    pub const fn write_cursor(&self) -> usize {
        self.cursors.write()
    }

    #[inline]
    pub const fn read_cursor(&self) -> usize {
        self.cursors.read()
    }

    /// Value produced by the most recent committed dequeue, or the default
    /// value if none has happened since construction or reset.
    #[inline]
    pub fn output_value(&self) -> &T {
        &self.output
    }

    /// Whether the most recent step rejected its enqueue.
    #[inline]
    pub const fn overflow(&self) -> bool {
        self.overflow
    }

    /// Whether the most recent step rejected its dequeue.
    #[inline]
    pub const fn underflow(&self) -> bool {
        self.underflow
    }

    /// Live values, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len()).map(move |rank| &self.slots[self.cursors.slot_of(rank)])
    }

    pub fn reset(&mut self) {
        self.cursors.clear();
        self.overflow = false;
        self.underflow = false;

        self.output = self.default_value.clone();
        self.slots.fill(self.default_value.clone());

        debug!(capacity = self.capacity(), "fifo reset");
    }

    pub fn step(&mut self, enqueue_request: Option<T>, dequeue_request: bool) -> StepResult<T> {
        let was_full = self.cursors.is_full();
        let was_empty = self.cursors.is_empty();
        let dequeue_accepted = dequeue_request && !was_empty;

        // the only call into user code before the commit; nothing has moved yet
        let vacated = dequeue_accepted.then(|| self.default_value.clone());

        let mut enqueue_accepted = false;
        let mut rejected = None;
        let mut stale = None;

        match enqueue_request {
            Some(elem) if !was_full => {
                let index = self.cursors.write();
                stale = Some(mem::replace(&mut self.slots[index], elem));
                self.cursors.write_forward();

                enqueue_accepted = true;
            }
            Some(elem) => rejected = Some(elem),
            None => {}
        }

        let mut retired = None;

        if let Some(vacated) = vacated {
            let index = self.cursors.read();
            let elem = mem::replace(&mut self.slots[index], vacated);
            self.cursors.read_forward();

            retired = Some(mem::replace(&mut self.output, elem));
        }

        self.cursors.settle(enqueue_accepted, dequeue_accepted);
        self.overflow = rejected.is_some();
        self.underflow = dequeue_request && was_empty;

        if let Some(elem) = &rejected {
            debug!(
                rejected = ?elem,
                count = self.len(),
                write = self.write_cursor(),
                read = self.read_cursor(),
                "fifo overflow, enqueue discarded"
            );
        }

        if self.underflow {
            debug!(
                held = ?self.output,
                count = self.len(),
                write = self.write_cursor(),
                read = self.read_cursor(),
                "fifo underflow, output retained"
            );
        }

        drop((stale, retired));

        trace!(
            enqueue_accepted,
            dequeue_accepted,
            count = self.len(),
            write = self.write_cursor(),
            read = self.read_cursor(),
            "fifo step"
        );

        StepResult {
            enqueue_accepted,
            dequeue_accepted,
            output_value: self.output.clone(),
            count: self.len(),
            full: self.is_full(),
            empty: self.is_empty(),
            almost_full: self.is_almost_full(),
            almost_empty: self.is_almost_empty(),
            overflow: self.overflow,
            underflow: self.underflow,
        }
    }

    #[inline]
    pub fn enqueue(&mut self, elem: T) -> StepResult<T> {
        self.step(Some(elem), false)
    }

    #[inline]
    pub fn dequeue(&mut self) -> StepResult<T> {
        self.step(None, true)
    }
}
