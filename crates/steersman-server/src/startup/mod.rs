//! Server startup: logging and HTTP

pub mod http;
pub mod logging;

pub use http::*;
pub use logging::*;
