//! Windowed front end for watching the curve being drawn.
//!
//! This module provides a fixed-size window using winit for window management,
//! pixels for framebuffer rendering, and egui for the progress panel.

pub mod app;
pub mod commands;
