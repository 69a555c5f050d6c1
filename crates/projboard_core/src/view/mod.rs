//! Read-only projections for presentation adapters.

pub mod bucket_list;
