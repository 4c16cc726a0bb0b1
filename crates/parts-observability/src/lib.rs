//! Request-scoped structured logging for the shipping services.
//!
//! This crate provides:
//! - `RequestId` - Unique request identifier for log correlation
//! - `StructuredLogger` - JSON or human logs carrying request context
//! - `LogBuilder` - Fluent builder for entries with typed fields

mod logging;
mod request_id;

pub use logging::*;
pub use request_id::*;
