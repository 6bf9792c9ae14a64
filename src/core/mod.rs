//! Service plumbing around the engine

pub mod http;

pub use http::*;
