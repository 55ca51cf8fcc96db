use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue capacity must be at least one slot")]
    ZeroCapacity,
}

/// Rejected half of a step. Never fatal; reported for the one step it occurred in.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum QueueFault {
    #[error("queue is full and the enqueued value was discarded")]
    Overflow,

    #[error("queue is empty and no element can be dequeued")]
    Underflow,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config")]
    Parse(#[from] toml::de::Error),

    #[error("`{0}` must be greater than zero")]
    NotPositive(&'static str),
}
