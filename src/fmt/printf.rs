//! printf-style substitution over `Display` arguments.
//!
//! Arguments arrive type-erased, so numeric verbs re-parse the rendered text and fall
//! back to a `%!verb(value)` marker when it does not parse. Malformed input never panics.

use regex::Regex;
use std::fmt::{Display, Write};
use std::sync::LazyLock;

/// `%[flags][width][.precision]verb`
static VERB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([-+ #0]*)(\d+)?(?:\.(\d+))?([A-Za-z%])").expect("Invalid verb regex")
});

/// Widths and precisions above this render `%!(BADWIDTH)` / `%!(BADPREC)` and are ignored.
const MAX_WIDTH: usize = 1_000_000;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    left: bool,
    zero: bool,
    plus: bool,
    alt: bool,
    width: Option<usize>,
    precision: Option<usize>,
    bad_width: bool,
    bad_precision: bool,
}

impl Spec {
    fn parse(flags: &str, width: Option<&str>, precision: Option<&str>) -> Self {
        let (width, bad_width) = bounded(width);
        let (precision, bad_precision) = bounded(precision);
        Self {
            left: flags.contains('-'),
            zero: flags.contains('0'),
            plus: flags.contains('+'),
            alt: flags.contains('#'),
            width,
            precision,
            bad_width,
            bad_precision,
        }
    }

    fn pad(&self, body: String, numeric: bool) -> String {
        let body = if numeric && self.plus && !body.starts_with('-') {
            format!("+{body}")
        } else {
            body
        };
        let len = body.chars().count();
        let Some(width) = self.width.filter(|w| *w > len) else {
            return body;
        };
        let fill = width - len;
        if self.left {
            format!("{body}{}", " ".repeat(fill))
        } else if self.zero && numeric {
            let (sign, digits) = match body.chars().next() {
                Some(c @ ('-' | '+')) => (c.to_string(), &body[1..]),
                _ => (String::new(), body.as_str()),
            };
            format!("{sign}{}{digits}", "0".repeat(fill))
        } else {
            format!("{}{body}", " ".repeat(fill))
        }
    }
}

/// Second field is set when the digits exceed [`MAX_WIDTH`].
fn bounded(digits: Option<&str>) -> (Option<usize>, bool) {
    match digits.map(str::parse::<usize>) {
        None => (None, false),
        Some(Ok(n)) if n <= MAX_WIDTH => (Some(n), false),
        Some(_) => (None, true),
    }
}

/// Substitutes `args` into `template` in order.
///
/// `%%` is a literal percent. A verb with no argument left renders `%!v(MISSING)`;
/// arguments nobody consumed are appended as `%!(EXTRA a, b)`.
#[must_use]
pub fn sprintf(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    let mut next = 0;

    for caps in VERB_REGEX.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();

        let verb = caps[4].chars().next().unwrap_or('v');
        if verb == '%' {
            out.push('%');
            continue;
        }

        let Some(arg) = args.get(next) else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        next += 1;

        let spec = Spec::parse(
            &caps[1],
            caps.get(2).map(|m| m.as_str()),
            caps.get(3).map(|m| m.as_str()),
        );
        if spec.bad_width {
            out.push_str("%!(BADWIDTH)");
        }
        if spec.bad_precision {
            out.push_str("%!(BADPREC)");
        }
        out.push_str(&render(verb, &arg.to_string(), &spec));
    }
    out.push_str(&template[last..]);

    if next < args.len() {
        let extra: Vec<String> = args[next..].iter().map(ToString::to_string).collect();
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}

fn render(verb: char, value: &str, spec: &Spec) -> String {
    match verb {
        'v' | 't' => spec.pad(value.to_string(), is_numeric(value)),
        'd' | 'i' => value.trim().parse::<i128>().map_or_else(
            |_| bad_verb(verb, value),
            |n| spec.pad(n.to_string(), true),
        ),
        's' => {
            let text = spec.precision.map_or_else(
                || value.to_string(),
                |p| value.chars().take(p).collect(),
            );
            spec.pad(text, false)
        }
        'q' => spec.pad(format!("{value:?}"), false),
        'f' | 'F' => value.trim().parse::<f64>().map_or_else(
            |_| bad_verb(verb, value),
            |n| spec.pad(format!("{n:.prec$}", prec = spec.precision.unwrap_or(6)), true),
        ),
        'x' | 'X' => {
            let (sign, digits) = value.trim().parse::<i64>().map_or_else(
                |_| ("", value.bytes().map(|b| format!("{b:02x}")).collect()),
                |n| (if n < 0 { "-" } else { "" }, format!("{:x}", n.unsigned_abs())),
            );
            let prefix = if spec.alt { "0x" } else { "" };
            let hex = format!("{sign}{prefix}{digits}");
            let hex = if verb == 'X' {
                hex.to_uppercase()
            } else {
                hex
            };
            spec.pad(hex, true)
        }
        'o' => value.trim().parse::<i64>().map_or_else(
            |_| bad_verb(verb, value),
            |n| spec.pad(format!("{n:o}"), true),
        ),
        'b' => value.trim().parse::<i64>().map_or_else(
            |_| bad_verb(verb, value),
            |n| spec.pad(format!("{n:b}"), true),
        ),
        'c' => value
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| bad_verb(verb, value), |c| spec.pad(c.to_string(), false)),
        _ => bad_verb(verb, value),
    }
}

fn bad_verb(verb: char, value: &str) -> String {
    format!("%!{verb}({value})")
}

fn is_numeric(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}
