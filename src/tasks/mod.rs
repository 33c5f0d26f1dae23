//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Guard-state sweep: removes expired cached completions and idle
//!   rate-limiter identities at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
