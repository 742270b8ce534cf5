//! # Profile Module
//!
//! This module provides the user-facing accessor layer that ties the record
//! scanner and composition models together into per-file protein profiles.
//!
//! ## Overview
//!
//! The profile layer is the primary entry point for users of protcomp. A
//! [`Protein`](protein::Protein) binds a file path to the scanning routines in
//! [`core::io`](crate::core::io) and exposes the derived properties (name,
//! composition, per-chain percentages, length) through memoizing accessors.
//! Each property is computed on first access from a fresh read of the file and
//! cached for the lifetime of the instance; no file handle is held between
//! derivations.
//!
//! ## Key Capabilities
//!
//! - **Lazy derivation** with per-property caching of successful results
//! - **Scoped file access** so failures never leak open handles
//! - **Configurable strictness** for malformed sequence records via
//!   [`AnalysisOptions`](options::AnalysisOptions)

pub mod options;
pub mod protein;
