pub mod rasterize;
pub mod render_walk;
pub mod walk_path;
