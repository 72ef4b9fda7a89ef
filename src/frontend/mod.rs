//! Frontend module for the `TaskBoard` application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
