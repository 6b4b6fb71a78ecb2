//! Request middleware shared by all routes.

pub mod api_key;
