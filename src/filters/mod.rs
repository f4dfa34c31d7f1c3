//! CRUD over the user-filter table.

pub mod api;
pub mod handlers;
pub mod item;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
