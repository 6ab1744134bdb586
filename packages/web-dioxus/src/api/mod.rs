//! REST client for the external extraction backend

mod client;

pub use client::*;
