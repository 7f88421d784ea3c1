pub mod auth;
pub mod client;
pub mod store;
pub mod types;

#[cfg(test)]
pub mod memory;

pub use auth::*;
pub use client::*;
pub use store::*;
pub use types::*;
