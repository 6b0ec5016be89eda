pub mod immediate;
pub mod paced;
