//! Generates mkdocstrings reference stubs and a literate-nav `SUMMARY.md` for
//! Python projects.
//!
//! Generation never touches the docs directory: [`generator::ReferenceGenerator`]
//! stages everything in memory and the caller decides where, and whether, the
//! result is written.

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod generator;
