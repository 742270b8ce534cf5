//! # Protcomp Core Library
//!
//! A lightweight library for deriving protein names and amino-acid composition
//! from the header records of Protein Data Bank (PDB) files.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict two-layer architecture to keep parsing,
//! data modeling, and caching concerns separate and independently testable.
//!
//! - **[`core`]: The Foundation.** Contains the line-oriented PDB record scanner
//!   (`io`), the residue count table (`models::composition`), and static
//!   amino-acid knowledge (`models::residue`). Everything here is stateless:
//!   scanners read from any [`std::io::BufRead`] source and return plain data.
//!
//! - **[`profile`]: The Public API.** This is the user-facing layer. Its
//!   [`Protein`](profile::protein::Protein) accessor binds a file path to the
//!   core scanners, derives each property on first use, and memoizes the result
//!   for the lifetime of the instance.

pub mod core;
pub mod profile;
