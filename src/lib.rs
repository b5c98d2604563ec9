//! Text-table rendering and directory traversal helpers for build and
//! reporting scripts.
//!
//! Two independent utilities:
//!
//! - [`Table`] accumulates rows, tracks column widths, and renders a
//!   pipe-delimited, column-aligned report suitable for terminals or
//!   markdown.
//! - [`DirectoryScanner`] walks a directory tree and invokes a callback for
//!   every non-directory entry with its absolute and relative paths.
//!
//! # Example
//!
//! ```
//! use script_utils::Table;
//!
//! let mut table = Table::new(["Name", "Age"]);
//! table.add_row(["Alice", "30"]);
//! table.add_row(["Bob", "7"]);
//!
//! let mut out = Vec::new();
//! table.render_to(&mut out)?;
//! # Ok::<(), script_utils::Error>(())
//! ```

pub mod error;
pub mod scanner;
pub mod table;

pub use error::{Error, Result};
pub use scanner::DirectoryScanner;
pub use table::{Column, Justify, Table};
