//! Core domain types
//!
//! This module contains the domain structures shared between the backend
//! client and the CLI. They mirror the vocabulary of the remote download
//! service: a submitted job, the progress snapshots it reports, and the
//! artifact it eventually produces.

pub mod artifact;
pub mod job;
pub mod progress;
pub mod video;
