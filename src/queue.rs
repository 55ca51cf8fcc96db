mod bounded_queue;
mod ring_cursors;

pub use bounded_queue::*;
pub use ring_cursors::{ALMOST_EMPTY_LEVEL, ALMOST_FULL_MARGIN};
