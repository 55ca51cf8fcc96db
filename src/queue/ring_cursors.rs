/// Free slots at or below which the queue reports almost full.
pub const ALMOST_FULL_MARGIN: usize = 2;
/// Occupancy at or below which the queue reports almost empty.
pub const ALMOST_EMPTY_LEVEL: usize = 2;

/// Occupancy metadata for a ring of `capacity` slots.
///
/// Unlike free-running offsets, both cursors are kept reduced into
/// `[0, capacity)` so the capacity does not need to be a power of two. The
/// count is tracked separately and is the only source for full/empty status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RingCursors {
    capacity: usize,
    write: usize,
    read: usize,
    count: usize,
}

impl RingCursors {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);

        Self {
            capacity,
            write: 0,
            read: 0,
            count: 0,
        }
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    #[inline(always)]
    pub const fn is_almost_full(&self) -> bool {
        self.count >= self.capacity.saturating_sub(ALMOST_FULL_MARGIN)
    }

    #[inline(always)]
    pub const fn is_almost_empty(&self) -> bool {
        self.count <= ALMOST_EMPTY_LEVEL
    }

    #[inline(always)]
    pub const fn write(&self) -> usize {
        self.write
    }

    #[inline(always)]
    pub const fn read(&self) -> usize {
        self.read
    }

    #[inline(always)]
    const fn wrap(&self, val: usize) -> usize {
        if val + 1 == self.capacity {
            0
        } else {
            val + 1
        }
    }

    #[inline(always)]
    pub fn write_forward(&mut self) {
        self.write = self.wrap(self.write);
    }

    #[inline(always)]
    pub fn read_forward(&mut self) {
        self.read = self.wrap(self.read);
    }

    /// Applies the net occupancy change of one step.
    pub fn settle(&mut self, enqueued: bool, dequeued: bool) {
        match (enqueued, dequeued) {
            (true, false) => self.count += 1,
            (false, true) => self.count -= 1,
            _ => {}
        }
    }

    /// Slot index of the `rank`-th live element counting from the read cursor.
    #[inline(always)]
    pub const fn slot_of(&self, rank: usize) -> usize {
        (self.read + rank) % self.capacity
    }

    pub fn clear(&mut self) {
        self.write = 0;
        self.read = 0;
        self.count = 0;
    }
}
