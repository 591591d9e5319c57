mod extract;
mod migrate;
mod server;

pub use extract::extract;
pub use migrate::{migrate, reset};
pub use server::serve;
