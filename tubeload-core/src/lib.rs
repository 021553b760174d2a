//! Tubeload Core
//!
//! Core types for the tubeload download client.
//!
//! This crate contains:
//! - Domain types: Core entities (jobs, progress snapshots, artifacts)
//! - DTOs: Request/response bodies for the backend HTTP surface

pub mod domain;
pub mod dto;
