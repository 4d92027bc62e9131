//! Core library components.
//!
//! This module contains the reusable provisioning logic: sealing secret
//! values, talking to the GitHub secrets API, and running batches.

pub mod api;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod provision;
pub mod types;
pub mod validation;
