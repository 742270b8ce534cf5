//! # Core Module
//!
//! This module provides the fundamental building blocks for PDB record analysis
//! in protcomp, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the record scanning and data modeling required to
//! turn raw PDB header text into structured composition data. It interprets only
//! the `TITLE` and `SEQRES` record families and ignores everything else, so it
//! tolerates partial, concatenated, or otherwise nonconforming files.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **File Scanning** ([`io`]) - Line-oriented extraction of title payloads and
//!   per-chain residue codes from any buffered reader
//! - **Data Models** ([`models`]) - The residue count table with percentage
//!   conversion, and static knowledge of the twenty standard amino acids

pub mod io;
pub mod models;
