//! beadgrid - fuse-bead pattern server
//!
//! HTTP and command-line front end for the `bead-quant` pipeline.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
