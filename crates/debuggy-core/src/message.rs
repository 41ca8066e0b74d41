//! printf-style message interpolation.
//!
//! Arguments arrive as JSON values. When the first one is a string it acts
//! as a template:
//!
//! | Directive | Renders |
//! |-----------|---------|
//! | `%s` | string form |
//! | `%d` | number (`NaN` when not numeric) |
//! | `%i` | integer, truncated toward zero |
//! | `%f` | floating point number |
//! | `%j` | compact JSON |
//! | `%o`, `%O` | inspected form |
//! | `%%` | a literal `%` |
//!
//! A template with no arguments after it is printed as-is, `%%` included.
//! A directive with nothing left to consume stays in the output verbatim.
//! Arguments left over after the template are appended, space-separated.

use serde_json::{Number, Value};

/// Renders an argument list into a single message line.
///
/// ```
/// use debuggy_core::{render_message, Value};
///
/// let args = [Value::from("%s took %dms"), Value::from("load"), Value::from(12)];
/// assert_eq!(render_message(&args), "load took 12ms");
/// ```
#[must_use]
pub fn render_message(args: &[Value]) -> String {
    let Some((first, rest)) = args.split_first() else {
        return String::new();
    };

    let mut out = String::new();
    let mut remaining = rest.iter();

    match first {
        Value::String(template) if rest.is_empty() => out.push_str(template),
        Value::String(template) => {
            let mut chars = template.chars().peekable();
            while let Some(c) = chars.next() {
                if c != '%' {
                    out.push(c);
                    continue;
                }
                match chars.peek().copied() {
                    Some('%') => {
                        chars.next();
                        out.push('%');
                    }
                    Some(directive @ ('s' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O')) => {
                        chars.next();
                        match remaining.next() {
                            Some(arg) => out.push_str(&substitute(directive, arg)),
                            None => {
                                out.push('%');
                                out.push(directive);
                            }
                        }
                    }
                    _ => out.push('%'),
                }
            }
        }
        other => out.push_str(&inspect(other)),
    }

    for arg in remaining {
        out.push(' ');
        match arg {
            Value::String(s) => out.push_str(s),
            other => out.push_str(&inspect(other)),
        }
    }

    out
}

/// Inspected form of a value: strings single-quoted, everything else JSON.
#[must_use]
pub fn inspect(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        Value::Number(n) => number_string(n),
        other => other.to_string(),
    }
}

fn substitute(directive: char, arg: &Value) -> String {
    match directive {
        's' => plain(arg),
        'd' | 'f' => js_number(to_number(arg)),
        'i' => js_number(to_number(arg).trunc()),
        'j' => arg.to_string(),
        _ => inspect(arg),
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_string(n),
        other => other.to_string(),
    }
}

fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn number_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        js_number(n.as_f64().unwrap_or(f64::NAN))
    }
}

// Integral values print without a fraction, the way script runtimes do;
// magnitudes from 1e21 up and below 1e-6 switch to exponent form.
fn js_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}
