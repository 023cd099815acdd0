//! Form-store client module for gRPC communication

mod client;
mod traits;

pub use client::FormStoreClient;
pub use traits::FormStoreTrait;

#[cfg(test)]
pub use traits::MockFormStoreTrait;
