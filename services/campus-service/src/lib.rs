//! Campus-service library crate.
//!
//! # Purpose
//! Exposes the building/campus HTTP API, the validation services behind it,
//! configuration, and the storage backends for use by the binary and tests.
//!
//! # Notes
//! Requests flow `api` -> `service` -> `store`; only the service layer decides
//! what counts as invalid input or a missing resource.
pub mod api;
pub mod app;
pub mod config;
pub mod model;
pub mod observability;
pub mod service;
pub mod store;
