pub mod api;
pub mod snippet;
