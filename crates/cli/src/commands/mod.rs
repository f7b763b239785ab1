pub mod analyze;
pub mod plan;
pub mod sources;
