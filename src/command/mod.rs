//! Command line parsing and dispatch for serial consoles.
//!
//! A command line is a command name optionally followed by arguments, all
//! separated by a single delimiter character and optionally wrapped in start
//! and stop markers:
//!
//! ```text
//! blink 3 200          delimiter ' ', no framing
//! [blink 3 200]        start '[' and stop ']'
//! set,led,on           delimiter ','
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Transport     │───▶│   Dispatcher    │───▶│   Line Parser   │
//! │   (LineSource)  │    │   (poll, help)  │    │   (framing)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                                        │
//!                                                        ▼
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handler      │◀───│    Registry     │◀───│   Tokenizer     │
//! │                 │    │    (lookup)     │    │   (split)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every stage fails fast with an [`Error`]; handler errors are passed through
//! unchanged. Rendering an error as text is left to the caller through
//! [`Dispatcher::report`] or [`Error::describe`].

/// Bounded argument list
pub mod args;
/// Parser configuration
pub mod config;
/// Polling dispatcher
pub mod dispatcher;
/// Error codes
pub mod error;
/// Line parser
pub mod parser;
/// Command dictionary
pub mod registry;
/// Argument tokenizer
pub mod tokenizer;

pub use args::{Args, MAX_ARGS};
pub use config::{NO_FRAMING, ParserConfig, READ_TIMEOUT_MS};
pub use dispatcher::{Dispatcher, MAX_LINE_LEN};
pub use error::{CommandResult, Error, NONE_CODE};
pub use parser::{ParsedLine, parse, process};
pub use registry::{Command, HELP_COMMAND, Handler, Registry};
