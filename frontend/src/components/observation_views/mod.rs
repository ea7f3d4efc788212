pub mod mark_as_seen_button;
pub mod observations_counter;
pub mod observations_histogram;
pub mod observations_map;
pub mod observations_table;
