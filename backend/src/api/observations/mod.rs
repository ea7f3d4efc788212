//! Endpoints working on the filtered set of observations.
//!
//! All of them take the same filters, sent in the query string wire format.

mod filtered_observations_count;
pub use filtered_observations_count::filtered_observations_count;

mod filtered_observations_page;
pub use filtered_observations_page::filtered_observations_page;

mod filtered_observations_histogram;
pub use filtered_observations_histogram::filtered_observations_histogram;

mod mark_observations_as_seen;
pub use mark_observations_as_seen::mark_observations_as_seen;

mod hexagon_min_max;
pub use hexagon_min_max::hexagon_min_max;

pub mod observations_url;
