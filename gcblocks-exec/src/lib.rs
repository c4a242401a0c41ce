#![forbid(unsafe_code)]

//! Runtime engine for executing Google Cloud integration blocks.
//!
//! The operation catalogue lives in `gcblocks-core`; this crate turns one
//! descriptor plus one set of input values into a single authenticated REST
//! call and an output event.

pub mod auth;
pub mod error;
pub mod executor;

pub use crate::error::BlockError;
pub use crate::executor::{AppConfig, Invoker};
