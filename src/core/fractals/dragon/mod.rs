pub mod algorithm;
pub mod dragon_config;
pub mod errors;
