//! # Command-Line Interface
//!
//! | Invocation | Prints |
//! |------------|--------|
//! | `shape-area` | area of the example rectangle (4 × 6) |
//! | `shape-area circle <radius>` | area of a circle |
//! | `shape-area rectangle <width> <height>` | area of a rectangle |
//! | `shape-area eval <json>` | area of a serialized shape |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - the area alone, one line
//! - `json` - `{"shape": {...}, "area": ...}`
//!
//! `--verbose` (or `-v`) writes diagnostics to stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;

pub use app::{Cli, Commands, run, EXAMPLE_SHAPE};
pub use output::{Output, OutputFormat};
