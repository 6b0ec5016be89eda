pub mod trace_path;
pub mod walk_state;
