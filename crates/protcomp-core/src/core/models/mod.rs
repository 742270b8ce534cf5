//! # Core Models Module
//!
//! This module contains the data structures used to represent the composition
//! of a protein as read from PDB header records.
//!
//! ## Key Components
//!
//! - [`composition`] - An ordered count table of residue codes with totals and
//!   percentage conversion
//! - [`residue`] - The twenty standard amino acids, their one- and three-letter
//!   codes, and a compile-time lookup for classifying observed codes
//!
//! Scanning never filters through the residue table; nonstandard codes such as
//! `MSE` are counted like any other. The table exists for classification and
//! report annotation on top of raw counts.

pub mod composition;
pub mod residue;
