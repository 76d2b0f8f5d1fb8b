//! API Module
//!
//! HTTP access to the sentiment backend.

pub mod client;

pub use client::*;
