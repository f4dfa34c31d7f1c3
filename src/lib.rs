//! Lambda handlers for the user-filter table (DynamoDB) and the relational
//! demo table (SeaORM).
//!
//! Every handler is a thin adapter: parse the incoming event, issue one
//! database call and hand the result back to the runtime. Binaries under
//! `src/bin` wire each handler into `lambda_runtime` or `lambda_http`.

pub mod common;
pub mod filters;
pub mod relational;
