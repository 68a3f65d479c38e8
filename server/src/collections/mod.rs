//! In-memory customer and order collections.
//!
//! These live only for the lifetime of the process. Lookups are linear
//! scans; customer ids are not checked for uniqueness.

mod customers;
mod orders;

pub use customers::{Customer, CustomerStore};
pub use orders::{Order, OrderStore};
