use serialcmd::command::*;
use std::cell::RefCell;

fn framed() -> ParserConfig {
    ParserConfig::new().with_start_char('[').with_stop_char(']')
}

#[test]
fn test_framed_line_yields_name_and_tokens() {
    let line = parse("[blink 3 200]", &framed()).unwrap();
    assert_eq!(line.name, "blink");
    assert_eq!(line.args.as_slice(), &["3", "200"]);
}

#[test]
fn test_unframed_line() {
    let line = parse("set on", &ParserConfig::new()).unwrap();
    assert_eq!(line.name, "set");
    assert_eq!(line.args.as_slice(), &["on"]);
}

#[test]
fn test_missing_start_char_regardless_of_content() {
    let config = framed();
    for line in ["blink 3 200]", "]", "x", "{blink}", " (set on]"] {
        assert_eq!(parse(line, &config), Err(Error::MissingStartChar), "{line:?}");
    }
}

#[test]
fn test_missing_stop_char() {
    let config = framed();
    assert_eq!(parse("[blink 3 200", &config), Err(Error::MissingStopChar));
    assert_eq!(parse("[blink 3 200] x", &config), Err(Error::MissingStopChar));
}

#[test]
fn test_stop_char_strips_exactly_one_char() {
    // The last character before the marker belongs to the last argument.
    let line = parse("[blink 3 200]", &framed()).unwrap();
    assert_eq!(line.args.get(1), Some("200"));

    let config = ParserConfig::new().with_stop_char('!');
    let line = parse("go!", &config).unwrap();
    assert_eq!(line.name, "go");
}

#[test]
fn test_markers_only_line() {
    let line = parse("[]", &framed()).unwrap();
    assert_eq!(line.name, "");
    assert!(line.args.is_empty());

    let registry = Registry::empty();
    assert_eq!(process("[]", &framed(), &registry), Err(Error::NoMatchingCmd));
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let line = parse("\t [set on] \r\n", &framed()).unwrap();
    assert_eq!(line.name, "set");
    assert_eq!(line.args.as_slice(), &["on"]);
}

#[test]
fn test_vertical_tab_and_form_feed_are_trimmed() {
    let line = parse("\x0b[set on]\x0c\x0b", &framed()).unwrap();
    assert_eq!(line.name, "set");
    assert_eq!(line.args.as_slice(), &["on"]);

    let line = parse("set\x0b", &ParserConfig::new()).unwrap();
    assert_eq!(line.name, "set");
    assert!(line.args.is_empty());
}

#[test]
fn test_argument_section_is_trimmed_once() {
    let config = ParserConfig::new().with_delimiter(',');
    let line = parse("move, 1, 2 ", &config).unwrap();
    assert_eq!(line.name, "move");
    assert_eq!(line.args.as_slice(), &["1", " 2"]);
}

#[test]
fn test_name_is_case_sensitive() {
    let handler = |_: &Args<'_>| -> CommandResult { Ok(()) };
    let commands = [Command::new("Set", &handler)];
    let registry = Registry::new(&commands);
    let config = ParserConfig::new();

    assert_eq!(process("Set on", &config, &registry), Ok(()));
    assert_eq!(process("set on", &config, &registry), Err(Error::NoMatchingCmd));
}

#[test]
fn test_handler_result_is_passed_through() {
    let fails = |_: &Args<'_>| -> CommandResult { Err(Error::InvalidArg) };
    let commands = [Command::new("bad", &fails)];
    let registry = Registry::new(&commands);

    assert_eq!(
        process("bad 1", &ParserConfig::new(), &registry),
        Err(Error::InvalidArg)
    );
}

#[test]
fn test_argument_overflow_precedes_lookup() {
    let registry = Registry::empty();
    let line = "unknown 1 2 3 4 5 6 7 8 9 10 11";
    assert_eq!(
        process(line, &ParserConfig::new(), &registry),
        Err(Error::ArgumentOverflow)
    );
}

#[test]
fn test_lookup_round_trip_reaches_registered_handler() {
    let calls = RefCell::new(Vec::new());
    let blink = |_: &Args<'_>| -> CommandResult {
        calls.borrow_mut().push("blink");
        Ok(())
    };
    let set = |args: &Args<'_>| -> CommandResult {
        calls.borrow_mut().push("set");
        args.expect_count(1, 1)
    };
    let commands = [Command::new("blink", &blink), Command::new("set", &set)];
    let registry = Registry::new(&commands);

    let command = registry.lookup("set").unwrap();
    assert_eq!(command.name, "set");
    assert_eq!(command.invoke(&Args::new()), Err(Error::TooFewArgs));
    assert_eq!(*calls.borrow(), ["set"]);
}

#[test]
fn test_closures_and_objects_are_interchangeable() {
    struct Counter(std::cell::Cell<u32>);

    impl Handler for Counter {
        fn invoke(&self, args: &Args<'_>) -> CommandResult {
            self.0.set(self.0.get() + args.len() as u32);
            Ok(())
        }
    }

    fn plain(_: &Args<'_>) -> CommandResult {
        Ok(())
    }

    let counter = Counter(std::cell::Cell::new(0));
    let closure = |args: &Args<'_>| -> CommandResult { args.expect_count(0, 0) };
    let commands = [
        Command::new("plain", &plain),
        Command::new("closure", &closure),
        Command::new("count", &counter),
    ];
    let registry = Registry::new(&commands);
    let config = ParserConfig::new();

    assert_eq!(process("plain", &config, &registry), Ok(()));
    assert_eq!(process("closure x", &config, &registry), Err(Error::TooManyArgs));
    assert_eq!(process("count a b c", &config, &registry), Ok(()));
    assert_eq!(counter.0.get(), 3);
}

#[test]
fn test_error_descriptions() {
    assert_eq!(Error::MissingStartChar.to_string(), "Missing start character");
    assert_eq!(Error::NoArgs.describe(), "No args");
    assert_eq!(error::code_of(&Err(Error::InvalidArg)), 9);
    assert_eq!(error::code_of(&Ok(())), NONE_CODE);
}
