use std::thread;
use std::time::{Duration, Instant};

use crate::core::actions::render_walk::ports::tick_scheduler::{TickOutcome, TickScheduler};

/// Roughly a 60 Hz display refresh.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Delivers ticks on a fixed interval, sleeping off whatever time a tick
/// did not use. A tick that overruns starts the next one immediately.
#[derive(Debug, Clone, Copy)]
pub struct PacedTicker {
    interval: Duration,
    max_ticks: Option<u64>,
}

impl PacedTicker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_ticks: None,
        }
    }

    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for PacedTicker {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

impl TickScheduler for PacedTicker {
    fn run<F>(&mut self, mut on_tick: F) -> u64
    where
        F: FnMut(u64) -> TickOutcome,
    {
        let mut ticks = 0;
        let mut deadline = Instant::now();

        while self.max_ticks.is_none_or(|max| ticks < max) {
            let outcome = on_tick(ticks);
            ticks += 1;

            if outcome == TickOutcome::Complete {
                break;
            }

            deadline += self.interval;
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            } else {
                deadline = now;
            }
        }

        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_between_ticks() {
        let interval = Duration::from_millis(5);
        let start = Instant::now();

        let ticks = PacedTicker::new(interval).run(|tick| {
            if tick == 3 { TickOutcome::Complete } else { TickOutcome::Continue }
        });

        assert_eq!(ticks, 4);
        assert!(start.elapsed() >= interval * 3);
    }

    #[test]
    fn test_respects_max_ticks() {
        let ticks = PacedTicker::new(Duration::ZERO)
            .with_max_ticks(2)
            .run(|_| TickOutcome::Continue);

        assert_eq!(ticks, 2);
    }
}
