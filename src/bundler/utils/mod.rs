//! Shared helpers for downloading, extracting and writing build output.

pub mod fs;
pub mod http;
