// src/specs/mod.rs
//! Page-specific parsing specs for the answer site.
//!
//! Each spec encodes *where the ground truth lives in the HTML* of one
//! page kind and *how to extract it robustly*: tolerant, case-insensitive
//! slicing via `core::html`, no networking, no persistence. Higher layers
//! (`resolver`, `importer`) decide when to fetch and what to do with the
//! extracted values.
//!
//! Specs are testable offline against captured or hand-written fixtures.

pub mod category_page;
pub mod letter_page;
