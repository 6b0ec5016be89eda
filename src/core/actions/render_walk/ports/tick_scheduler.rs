#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Complete,
}

/// Host-provided periodic callback, one invocation per display refresh.
///
/// `run` keeps calling `on_tick` with the zero-based tick number until it
/// returns [`TickOutcome::Complete`] or the scheduler itself stops, and
/// returns how many ticks were delivered.
pub trait TickScheduler {
    fn run<F>(&mut self, on_tick: F) -> u64
    where
        F: FnMut(u64) -> TickOutcome;
}
