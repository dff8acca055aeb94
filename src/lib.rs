//! acslang - household language analysis for ACS microdata
//!
//! acslang is a CLI tool and library that merges American Community Survey
//! household and person records, recodes language, linguistic isolation and
//! public-assistance fields, classifies language codes into linguistic
//! families, and reports proportions and chi-square tests.
//!
//! ## Module Structure
//!
//! - `analysis`: Proportions, filters and chi-square tests
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Family classification, language key, dataset and recode engine
//! - `utils`: Shared utility functions

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
