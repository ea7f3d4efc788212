pub mod error_boundary;
pub mod filter_components;
pub mod navbar;
pub mod observation_views;
pub mod suspend_boundary;
