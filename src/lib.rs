mod queue;

pub mod config;
pub mod error;
pub mod shared;

pub use queue::*;
