pub mod dashboard_context;
pub mod filter_query;
pub mod tracked_request;
pub mod translations;
