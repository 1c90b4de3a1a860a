//! Background worker thread for asynchronous storage operations.
//!
//! This module implements the worker thread that handles all storage I/O so
//! the main plugin UI thread never blocks on disk. It uses Zellij's worker API
//! for cross-thread communication.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol types
//! - `handler`: worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ReelfinderWorker;
pub use messages::{WorkerMessage, WorkerResponse};
