pub mod observations_api;
