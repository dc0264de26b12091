//! # serialcmd - serial command parser and dispatcher
//!
//! A small command interpreter for microcontroller serial consoles. It reads a
//! text line from a serial link, splits it into a command name and a bounded
//! list of arguments, looks the name up in an application supplied dictionary
//! and invokes the matching handler. Application functions (blink an LED, read
//! a sensor) stay decoupled from the text protocol used to reach them.
//!
//! The library is `no_std`, never allocates, and borrows argument tokens
//! straight from the received line.
//!
//! ## Usage
//!
//! ```rust
//! use core::cell::Cell;
//! use serialcmd::command::{Args, Command, CommandResult, Dispatcher, Registry};
//! use serialcmd::transport::BufferedTransport;
//!
//! let led = Cell::new(false);
//! let set = |args: &Args<'_>| -> CommandResult {
//!     args.expect_count(1, 1)?;
//!     match args.get(0) {
//!         Some("on") => led.set(true),
//!         Some("off") => led.set(false),
//!         _ => return Err(serialcmd::command::Error::InvalidArg),
//!     }
//!     Ok(())
//! };
//!
//! let commands = [Command::new("set", &set)];
//! let transport: BufferedTransport = BufferedTransport::new();
//! let mut dispatcher = Dispatcher::new(transport, Registry::new(&commands));
//! dispatcher.set_start_char('[');
//! dispatcher.set_stop_char(']');
//!
//! dispatcher.transport_mut().push_line("[set on]").unwrap();
//! // In firmware this runs on every iteration of the main loop.
//! let result = dispatcher.run();
//! dispatcher.report(result).unwrap();
//! assert!(led.get());
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable [`transport::IoTransport`] over `std::io` streams
//! - `async`: Enable async transport traits and `Dispatcher::run_async`
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Command parsing, lookup and dispatch.
///
/// Contains the tokenizer, the line parser, the command registry and the
/// polling dispatcher, together with the error codes they share.
pub mod command;

/// Line source abstraction used by the dispatcher.
///
/// Provides the traits a serial link has to implement as well as ready-made
/// in-memory and `std::io` transports.
pub mod transport;
