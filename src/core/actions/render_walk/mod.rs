pub mod curve_animation;
pub mod ports;
pub mod schedulers;
