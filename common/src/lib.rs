//! Filter and view-state core shared between frontend and backend.

extern crate serde;


pub mod error;
pub mod filter_set;
pub mod filter_store;
pub mod querystring;
pub mod date_codec;
pub mod tag_color;
pub mod selector_data;
pub mod map_layers;
pub mod histogram;
pub mod request_tracker;
pub mod observations;
pub mod config;
