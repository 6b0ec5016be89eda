//! Input adapters for the dragon curve renderer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into a [`DragonConfig`](crate::core::fractals::dragon::dragon_config::DragonConfig).

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
