//! # Introduction
//!
//! coursework is a catalog of small, independent teaching exercises: array
//! traversal, string substitution, trait-based inheritance and dispatch,
//! averages, matrix arithmetic and input filtering. Each exercise can be run
//! from the command line or browsed in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Catalog → Exercise::run(input) → Transcript → stdout | TUI output pane
//! ```
//!
//! 1. [`exercises`]: the exercises themselves, the [`exercises::Exercise`]
//!    trait and the name-indexed [`exercises::Catalog`].
//! 2. [`output`]: the [`output::Transcript`] every exercise prints into, and
//!    the number formatting they share.
//! 3. [`ui`]: ratatui-based browser; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use coursework::exercises::Catalog;
//!
//! let catalog = Catalog::standard();
//! let out = catalog.run("long-words", "elephant cat giraffe").unwrap();
//! assert_eq!(out.get_output(), vec!["Valid words:", "elephant"]);
//! ```

pub mod exercises;
pub mod output;
pub mod ui;
