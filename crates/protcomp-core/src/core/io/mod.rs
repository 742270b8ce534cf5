//! Provides record-level input functionality for PDB text files.
//!
//! This module contains the line-oriented scanner used to extract title payloads
//! and sequence composition from PDB header records. Scanning is column-agnostic:
//! records are recognized by their first whitespace-delimited token, and values
//! are extracted by word-boundary tokenization rather than fixed column ranges.

pub mod pdb;
