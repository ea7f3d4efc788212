pub mod observation_api;
