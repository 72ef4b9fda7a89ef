//! Backend module for the `TaskBoard` application.

pub mod storage;
pub mod utils;
