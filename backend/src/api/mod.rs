pub mod lists;
pub mod observations;
