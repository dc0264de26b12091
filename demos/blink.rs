//! Host-side rendition of the classic "blink over serial" sketch.
//!
//! Reads framed commands from stdin and drives a simulated LED:
//!
//! ```text
//! $ cargo run --example blink --features std
//! [set on]
//! [blink 3 200]
//! help
//! ```

use std::cell::Cell;
use std::io;
use std::thread;
use std::time::Duration;

use serialcmd::command::{Args, Command, CommandResult, Dispatcher, Error, Registry};
use serialcmd::transport::{IoTransport, LineRead};

/// A pin driving an LED, standing in for the board's GPIO.
struct Led {
    lit: Cell<bool>,
}

impl Led {
    fn write(&self, lit: bool) {
        self.lit.set(lit);
        println!("LED {}", if lit { "on" } else { "off" });
    }

    fn toggle(&self) {
        self.write(!self.lit.get());
    }
}

fn main() {
    let led = Led {
        lit: Cell::new(false),
    };

    let set = |args: &Args<'_>| -> CommandResult {
        args.expect_count(1, 1)?;
        match args.get(0) {
            Some("on") => led.write(true),
            Some("off") => led.write(false),
            _ => return Err(Error::InvalidArg),
        }
        Ok(())
    };

    let blink = |args: &Args<'_>| -> CommandResult {
        args.expect_count(2, 2)?;
        let count: u32 = args.parse(0)?;
        let period_ms: u64 = args.parse(1)?;
        for _ in 0..count.saturating_mul(2) {
            led.toggle();
            thread::sleep(Duration::from_millis(period_ms / 2));
        }
        Ok(())
    };

    let commands = [Command::new("set", &set), Command::new("blink", &blink)];

    let transport = IoTransport::new(io::stdin().lock(), io::stdout());
    let mut dispatcher = Dispatcher::new(transport, Registry::new(&commands));
    dispatcher.set_start_char('[');
    dispatcher.set_stop_char(']');

    // Polling stdin waits for the next byte; the loop ends at end of stream.
    while !dispatcher.transport().is_closed() {
        let result = dispatcher.run();
        if dispatcher.report(result).is_err() {
            break;
        }
    }
}
