pub mod dragon_cli;
