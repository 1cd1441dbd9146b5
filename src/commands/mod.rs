//! Command implementations for fib CLI

pub mod bundle;
pub mod completions;
pub mod create_rsp;
