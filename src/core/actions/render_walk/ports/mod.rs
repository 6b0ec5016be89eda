pub mod canvas;
pub mod tick_scheduler;
