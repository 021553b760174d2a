//! Request/response bodies for the backend HTTP surface
//!
//! These DTOs mirror the JSON the download backend actually speaks. They are
//! kept separate from the domain types so wire-format quirks (like the bare
//! `{"error": ...}` bodies) stay out of the rest of the code.

pub mod download;
pub mod info;
