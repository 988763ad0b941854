//! Tests for dispatch: filtering, coloring and sink routing.

use regex::Regex;
use simplelog::fmt::color::{GREEN, RED, RESET, YELLOW};
use simplelog::{Line, Log, Loggable, Logger, Sink, Target};
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory sink that tests can read back.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn sink(&self) -> Sink {
        Sink::writer(self.clone())
    }

    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn strip_ts(line: &str) -> String {
    let re = Regex::new(r"\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} ").unwrap();
    re.replace(line, "[TS ").into_owned()
}

#[test]
fn console_filters_below_minimum() {
    let console = Capture::default();
    let logger = Logger::with_console("warning", console.sink());

    logger.info("x", &[]);
    assert_eq!(console.contents(), "");

    logger.warning("x", &[]);
    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(strip_ts(&lines[0]), format!("{YELLOW}[TS WARNING] x{RESET}"));
}

#[test]
fn console_errors_bypass_minimum() {
    let console = Capture::default();
    let logger = Logger::with_console("error", console.sink());

    logger.warning("hidden", &[]);
    logger.error("x".into(), &[]);

    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(strip_ts(&lines[0]), format!("{RED}[TS ERROR] x{RESET}"));
}

#[test]
fn default_logger_decisions() {
    let logger = Logger::new("warning");
    assert!(!logger.is_redirected(Target::Std));
    assert!(!logger.is_redirected(Target::StdErr));

    assert_eq!(logger.prepare("info", "x"), None);

    let Line { target, text } = logger.prepare("warning", "x").unwrap();
    assert_eq!(target, Target::Std);
    assert!(text.starts_with(YELLOW) && text.ends_with(RESET));

    let Line { target, text } = logger.prepare("error", "x").unwrap();
    assert_eq!(target, Target::StdErr);
    assert!(text.starts_with(RED) && text.ends_with(RESET));
}

/// Redirecting a sink turns it into "log everything, no color". This is intended
/// behaviour: captured files get the full, uncolored record.
#[test]
fn redirected_sink_disables_filter_and_color() {
    let console = Capture::default();
    let file = Capture::default();
    let mut logger = Logger::with_console("error", console.sink());
    logger.set_sink(file.sink());

    logger.debug("x", &[]);
    logger.test("y", &[]);

    assert_eq!(console.contents(), "");
    let lines: Vec<String> = file.lines().iter().map(|l| strip_ts(l)).collect();
    assert_eq!(lines, vec!["[TS DEBUG] x", "[TS TEST] y"]);
    assert!(!file.contents().contains('\x1b'));
}

#[test]
fn redirected_error_sink_is_plain_and_isolated() {
    let console = Capture::default();
    let errors = Capture::default();
    let mut logger = Logger::with_console("test", console.sink());
    logger.set_error_sink(errors.sink());

    logger.error("boom".into(), &[]);

    assert_eq!(console.contents(), "");
    let lines = errors.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(strip_ts(&lines[0]), "[TS ERROR] boom");
}

#[test]
fn redirected_error_sink_leaves_console_rules_for_other_levels() {
    let console = Capture::default();
    let errors = Capture::default();
    let mut logger = Logger::with_console("info", console.sink());
    logger.set_error_sink(errors.sink());

    logger.debug("filtered", &[]);
    logger.info("colored", &[]);

    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("\x1b[34m"));
    assert_eq!(errors.contents(), "");
}

#[test]
fn redirecting_back_to_stdout_still_counts_as_redirected() {
    let mut logger = Logger::new("error");
    logger.set_sink(Sink::stdout());
    assert!(logger.is_redirected(Target::Std));

    let line = logger.prepare("debug", "x").unwrap();
    assert!(!line.text.contains('\x1b'));
}

#[test]
fn format_args_are_substituted() {
    let console = Capture::default();
    let logger = Logger::with_console("test", console.sink());

    logger.write("info", "count=%d", &[&5]);

    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("count=5"));
}

#[test]
fn no_args_leaves_message_verbatim() {
    let file = Capture::default();
    let mut logger = Logger::new("test");
    logger.set_sink(file.sink());

    logger.write("info", "literal %d no args", &[]);

    let lines = file.lines();
    assert_eq!(strip_ts(&lines[0]), "[TS INFO] literal %d no args");
}

#[test]
fn emitted_line_shape() {
    let file = Capture::default();
    let mut logger = Logger::new("test");
    logger.set_sink(file.sink());

    logger.warning("disk %s", &[&"low"]);

    let re = Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} WARNING\] disk low\n$").unwrap();
    assert!(re.is_match(&file.contents()), "{:?}", file.contents());
}

#[test]
fn one_line_per_call() {
    let file = Capture::default();
    let mut logger = Logger::new("test");
    logger.set_sink(file.sink());

    logger.info("a", &[]);
    logger.info("b\nc", &[]);
    logger.debug("d", &[]);

    assert_eq!(file.contents().matches("] ").count(), 3);
    assert!(file.contents().ends_with("d\n"));
}

#[test]
fn unknown_level_names_rank_as_debug() {
    let console = Capture::default();
    let logger = Logger::with_console("info", console.sink());
    logger.write("audit", "hidden", &[]);
    assert_eq!(console.contents(), "");

    let logger = Logger::with_console("debug", console.sink());
    logger.write("audit", "shown", &[]);
    let lines = console.lines();
    assert_eq!(strip_ts(&lines[0]), format!("{GREEN}[TS AUDIT] shown{RESET}"));
}

#[test]
fn unknown_minimum_filters_like_debug() {
    let console = Capture::default();
    let logger = Logger::with_console("verbose", console.sink());
    assert_eq!(logger.level(), "verbose");

    logger.test("hidden", &[]);
    logger.debug("shown", &[]);

    assert_eq!(console.lines().len(), 1);
}

#[test]
fn set_level_moves_the_threshold() {
    let console = Capture::default();
    let mut logger = Logger::with_console("error", console.sink());
    logger.info("hidden", &[]);
    logger.set_level("info");
    logger.info("shown", &[]);
    assert_eq!(console.lines().len(), 1);
}

#[test]
fn error_accepts_error_values() {
    let errors = Capture::default();
    let mut logger = Logger::new("test");
    logger.set_error_sink(errors.sink());

    let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
    logger.error(Loggable::from(&err), &[]);
    logger.error(Loggable::opaque(&(1, "two")), &[]);
    logger.error("%s failed".into(), &[&"sync"]);

    let lines: Vec<String> = errors.lines().iter().map(|l| strip_ts(l)).collect();
    assert_eq!(
        lines,
        vec![
            "[TS ERROR] no such file",
            "[TS ERROR] (1, \"two\")",
            "[TS ERROR] sync failed",
        ]
    );
}

/// Records calls instead of writing, standing in for an alternative implementation.
#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<(String, String)>>,
}

impl Log for Recorder {
    fn set_sink(&mut self, _sink: Sink) {}

    fn set_error_sink(&mut self, _sink: Sink) {}

    fn write(&self, level: &str, message: &str, args: &[&dyn Display]) {
        let msg = if args.is_empty() {
            message.to_string()
        } else {
            simplelog::sprintf(message, args)
        };
        self.calls.lock().unwrap().push((level.to_string(), msg));
    }
}

fn log_startup(log: &dyn Log) {
    log.info("started in %dms", &[&12]);
    log.error("nothing".into(), &[]);
}

#[test]
fn alternative_loggers_fit_behind_the_trait() {
    let recorder = Recorder::default();
    log_startup(&recorder);

    let calls = recorder.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            ("info".to_string(), "started in 12ms".to_string()),
            ("error".to_string(), "nothing".to_string()),
        ]
    );

    let file = Capture::default();
    let mut logger = Logger::new("test");
    logger.set_sink(file.sink());
    logger.set_error_sink(file.sink());
    log_startup(&logger);
    assert_eq!(file.lines().len(), 2);
}

#[test]
fn logger_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Logger>();
    assert_send_sync::<Sink>();
}

#[test]
fn oversized_format_width_does_not_abort_dispatch() {
    let file = Capture::default();
    let mut logger = Logger::new("test");
    logger.set_sink(file.sink());

    logger.info("%18446744073709551615s", &[&"x"]);
    logger.info("%.99999999999f", &[&2.5]);

    let lines: Vec<String> = file.lines().iter().map(|l| strip_ts(l)).collect();
    assert_eq!(
        lines,
        vec!["[TS INFO] %!(BADWIDTH)x", "[TS INFO] %!(BADPREC)2.500000"]
    );
}
