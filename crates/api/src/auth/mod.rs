//! Authentication for the Basekit API

pub mod middleware;

pub use middleware::{require_bearer, BearerToken};
