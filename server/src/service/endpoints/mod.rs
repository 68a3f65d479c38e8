//! Endpoint handlers organized by resource

pub mod articles;
pub mod customers;
pub mod orders;
