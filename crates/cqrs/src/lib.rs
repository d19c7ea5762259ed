//! Command/query separation primitives.
//!
//! Commands mutate state and return nothing; queries read state and return a
//! value. Both are dispatched through handlers that know nothing about the
//! concrete intent they carry.

pub mod command;
pub mod handler;
pub mod query;

pub use command::Command;
pub use handler::{CommandHandler, QueryHandler};
pub use query::Query;
