//! Business services module
//!
//! Contains the upstream client adapter and the batch coordinator

pub mod client;
pub mod coordinator;

pub use client::UpstreamClient;
pub use coordinator::BatchCoordinator;
