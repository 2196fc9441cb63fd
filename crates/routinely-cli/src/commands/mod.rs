pub mod routine;
pub mod stats;
pub mod theme;
