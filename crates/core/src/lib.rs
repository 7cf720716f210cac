//! Core types and shared functionality for linkcanon.
//!
//! This crate provides:
//! - A tolerant URL tokenizer and RFC 3986 reference resolver
//! - Canonical serialization used as the crawler's deduplication key
//! - Display-only beautification of canonical URLs
//! - Configuration structures

pub mod config;
pub mod error;
pub mod url;

pub use config::{CanonConfig, ConfigError};
pub use error::Error;
pub use url::{
    Canonicalizer, LinkBatch, ParsedUrl, RejectedLink, UrlKind, beautify, canonicalize, normalize_path, parse,
    resolve, resolve_and_canonicalize,
};
