//! Server-side access to the observation API.

pub mod api;
pub mod config;
pub mod http_utils;
pub mod server_extra;
