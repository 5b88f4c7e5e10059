//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routing)
//!     → request.rs (request ID access for log context)
//!     → search.rs (query validation, upstream fetch)
//!     → response.rs (shape result or error for the client)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod search;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::HttpServer;
