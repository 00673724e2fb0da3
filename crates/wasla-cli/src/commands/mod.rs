pub mod analyze;
pub mod segments;
