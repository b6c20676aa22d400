//! Reader for **EA979V3** drawing scripts.
//!
//! This crate is intentionally dependency-free so the script format can be
//! validated by tooling without pulling in the rasterizer or image codecs.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Script`, `Header`, `Statement`, `Command`, `Vertex` |
//! | [`error`] | `ScriptError`, `ErrorKind` |
//! | [`lexer`] | `LineReader`, `Tokens` |
//! | [`parser`] | `Parser` (streaming), `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use polyraster_script::{parse_str, Command};
//!
//! let src = "EA979V3\n8 8\nm 2 0 0 0 2 0 0 0 1\nL 0 0 1 1\n";
//!
//! let script = parse_str(src).unwrap();
//! assert_eq!(script.header.width, 8);
//! assert!(matches!(script.statements[1].command, Command::Line(..)));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Command, Header, Script, Statement, Vertex};
pub use error::{ErrorKind, ScriptError};
pub use parser::{parse_str, Parser, MAGIC, MATRIX_LEN, MAX_DIMENSION};
