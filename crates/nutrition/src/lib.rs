mod command;
mod query;
mod repository;

pub use command::*;
pub use query::*;
