//! keyprune - prune locale files down to the keys your HTML uses
//!
//! keyprune scans a directory tree of HTML documents for `data-i18n="<dotted.key>"`
//! attributes, then filters nested JSON translation files down to the keys actually
//! referenced and writes cleaned copies next to the originals.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Key extraction, tree filtering and the pruning driver

pub mod cli;
pub mod config;
pub mod core;
