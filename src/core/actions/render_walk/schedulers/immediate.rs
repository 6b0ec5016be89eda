use crate::core::actions::render_walk::ports::tick_scheduler::{TickOutcome, TickScheduler};

/// Delivers ticks back to back with no delay, optionally capped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateTicker {
    max_ticks: Option<u64>,
}

impl ImmediateTicker {
    #[must_use]
    pub fn new() -> Self {
        Self { max_ticks: None }
    }

    #[must_use]
    pub fn with_max_ticks(max_ticks: u64) -> Self {
        Self {
            max_ticks: Some(max_ticks),
        }
    }
}

impl TickScheduler for ImmediateTicker {
    fn run<F>(&mut self, mut on_tick: F) -> u64
    where
        F: FnMut(u64) -> TickOutcome,
    {
        let mut ticks = 0;

        while self.max_ticks.is_none_or(|max| ticks < max) {
            let outcome = on_tick(ticks);
            ticks += 1;

            if outcome == TickOutcome::Complete {
                break;
            }
        }

        ticks
    }
}
