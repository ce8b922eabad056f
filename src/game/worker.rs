//! Time-bounded strategy calls.
//!
//! Each call runs on its own thread and the engine waits on a channel with a
//! deadline. A late worker is abandoned: it keeps its copy of the inputs and
//! the strategy until it returns, and its answer is dropped with the channel.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::any::Any;
use core::panic::AssertUnwindSafe;
use core::time::Duration;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use crate::error::TurnFault;
use crate::strategy::{Strategy, StrategyCell};

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| String::from("non-string panic payload"))
}

/// Runs `invoke` against `strategy` on a worker thread, waiting at most `timeout`.
pub(crate) fn call<T, F>(
    strategy: Arc<StrategyCell>,
    seat: usize,
    timeout: Duration,
    invoke: F,
) -> Result<T, TurnFault>
where
    T: Send + 'static,
    F: FnOnce(&mut (dyn Strategy + 'static)) -> T + Send + 'static,
{
    let mut lease = strategy.lease().ok_or(TurnFault::Busy)?;

    let (sender, receiver) = mpsc::sync_channel(1);
    let spawned = thread::Builder::new()
        .name(format!("president-seat-{seat}"))
        .spawn(move || {
            let outcome =
                std::panic::catch_unwind(AssertUnwindSafe(|| lease.strategy().map(invoke)));
            // Back in the cell before the engine can ask again.
            drop(lease);
            // The engine may have stopped waiting.
            let _ = sender.send(outcome);
        });

    if let Err(err) = spawned {
        return Err(TurnFault::Unavailable(err.to_string()));
    }

    match receiver.recv_timeout(timeout) {
        Ok(Ok(Some(value))) => Ok(value),
        Ok(Ok(None)) => Err(TurnFault::Busy),
        Ok(Err(payload)) => Err(TurnFault::Panicked(panic_message(payload.as_ref()))),
        Err(RecvTimeoutError::Timeout) => Err(TurnFault::Timeout(timeout)),
        Err(RecvTimeoutError::Disconnected) => Err(TurnFault::Unavailable(String::from(
            "worker exited without answering",
        ))),
    }
}
