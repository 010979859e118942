//! Data models module
//!
//! Defines the inbound variant wire types and the upstream classification
//! API request/response structures

pub mod franklin;
pub mod variant;
