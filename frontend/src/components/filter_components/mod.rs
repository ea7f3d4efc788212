pub mod date_range_filter;
pub mod entity_selectors;
pub mod filter_panel;
pub mod multi_select;
pub mod status_filter;
