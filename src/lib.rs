//! keydedup - duplicate key remover for generated translation files
//!
//! keydedup scans translation sources made of language blocks such as
//! `[Language.EN]: { ... }` and drops every `key: value` line whose key
//! already appeared earlier in the same block.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `dedup`: Block detection and duplicate key removal
//! - `paths`: Expansion of file arguments and glob patterns
//! - `source_file`: Reading, backing up and rewriting target files

pub mod cli;
pub mod config;
pub mod dedup;
pub mod paths;
pub mod source_file;
