//! Read-only access to the relational demo table through SeaORM.

pub mod entity;
pub mod handler;
