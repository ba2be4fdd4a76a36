//! Backend API
//!
//! Request gateway and typed endpoint wrappers.

pub mod client;
