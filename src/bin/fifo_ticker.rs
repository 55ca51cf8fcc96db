//! Drives a byte producer and a byte consumer at different cadences through one
//! `BoundedQueue`, one step per tick, and reports what got through.
//!
//! Usage: `fifo_ticker [config.toml]`, logging controlled by `RUST_LOG`.

use std::{env, io, path::PathBuf};

use anyhow::{ensure, Context, Result};
use bounded_fifo::{
    config::{read_config, QueueConfig},
    BoundedQueue,
};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const MESSAGE: &[u8] = b"Hello, World!\r\n";

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TickerConfig {
    ticks: usize,
    produce_every: usize,
    consume_every: usize,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            ticks: 64,
            produce_every: 1,
            consume_every: 2,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DriverConfig {
    queue: QueueConfig,
    ticker: TickerConfig,
}

impl DriverConfig {
    fn load(path: Option<PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = read_config(&path)?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        config.queue.validate()?;
        ensure!(
            config.ticker.produce_every > 0,
            "`produce_every` must be greater than zero"
        );
        ensure!(
            config.ticker.consume_every > 0,
            "`consume_every` must be greater than zero"
        );

        Ok(config)
    }
}

#[derive(Debug, Default)]
struct Tally {
    sent: usize,
    received: Vec<u8>,
    overflows: usize,
    underflows: usize,
    almost_full_ticks: usize,
}

fn run(config: &DriverConfig) -> Result<Tally> {
    let mut queue = config.queue.build(0u8)?;
    let mut source = MESSAGE.iter().copied().cycle();
    let mut pending: Option<u8> = None;
    let mut tally = Tally::default();

    for tick in 0..config.ticker.ticks {
        // a rejected byte is retried on the next producing tick
        let enqueue = if tick % config.ticker.produce_every == 0 {
            pending.take().or_else(|| source.next())
        } else {
            None
        };
        let dequeue = tick % config.ticker.consume_every == 0;

        let res = queue.step(enqueue, dequeue);

        if res.enqueue_accepted {
            tally.sent += 1;
        }
        if res.dequeue_accepted {
            tally.received.push(res.output_value);
        }
        if res.overflow {
            tally.overflows += 1;
            pending = enqueue;
        }
        if res.underflow {
            tally.underflows += 1;
        }
        if res.almost_full {
            tally.almost_full_ticks += 1;
        }

        if let Err(fault) = res.check() {
            warn!(tick, count = res.count, "{fault}");
        }
    }

    drain(&mut queue, &mut tally);

    Ok(tally)
}

fn drain(queue: &mut BoundedQueue<u8>, tally: &mut Tally) {
    while !queue.is_empty() {
        tally.received.push(queue.dequeue().output_value);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = DriverConfig::load(env::args_os().nth(1).map(PathBuf::from))?;
    info!(
        capacity = config.queue.capacity,
        ticks = config.ticker.ticks,
        produce_every = config.ticker.produce_every,
        consume_every = config.ticker.consume_every,
        "starting fifo ticker"
    );

    let tally = run(&config)?;

    println!("sent:              {}", tally.sent);
    println!("received:          {}", tally.received.len());
    println!("overflows:         {}", tally.overflows);
    println!("underflows:        {}", tally.underflows);
    println!("almost-full ticks: {}", tally.almost_full_ticks);
    println!("{:?}", String::from_utf8_lossy(&tally.received));

    Ok(())
}
