//! Positional templates for rendering intervals.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::mem;
use std::str::FromStr;

use crate::{Error, IntervalDetail, Result};

/// Widths beyond this are almost certainly a typo in the template.
const MAX_WIDTH: usize = 64;

/// A template that renders the fields of an [`IntervalDetail`] into text.
///
/// Templates consist of literal text and placeholders in braces. A placeholder names one of
/// the five interval fields, either by position or by name:
///
/// | Position | Name                | Field        |
/// |----------|---------------------|--------------|
/// | `0`      | `hours`             | hours        |
/// | `1`      | `minutes`           | minutes      |
/// | `2`      | `seconds`           | seconds      |
/// | `3`      | `ms`                | milliseconds |
/// | `4`      | `mk` or `us`        | microseconds |
///
/// A placeholder may carry a width after a colon. A leading zero in the width selects zero
/// padding, otherwise the value is padded with spaces. Literal braces are written as `{{` and
/// `}}`.
///
/// # Examples
///
/// ```
/// use bench_timers::{Interval, IntervalFormat};
///
/// let format: IntervalFormat = "{minutes}:{2:02}.{3:03}".parse().unwrap();
///
/// assert_eq!(Interval::new(75.5).format(&format), "1:15.500");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntervalFormat {
    pieces: Cow<'static, [Piece]>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Piece {
    Literal(Cow<'static, str>),
    Field {
        field: Field,
        width: usize,
        zero_pad: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Field {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
}

impl IntervalFormat {
    /// Seconds and milliseconds, e.g. `00:100`. Template: `{2:02}:{3:03}`.
    pub const SIMPLE: Self = Self {
        pieces: Cow::Borrowed(&[
            Piece::zero_padded(Field::Seconds, 2),
            Piece::Literal(Cow::Borrowed(":")),
            Piece::zero_padded(Field::Milliseconds, 3),
        ]),
    };

    /// Seconds, milliseconds and microseconds, e.g. `01s 101ms 234us`.
    /// Template: `{2:02}s {3:03}ms {4:03}us`.
    pub const MICRO: Self = Self {
        pieces: Cow::Borrowed(&[
            Piece::zero_padded(Field::Seconds, 2),
            Piece::Literal(Cow::Borrowed("s ")),
            Piece::zero_padded(Field::Milliseconds, 3),
            Piece::Literal(Cow::Borrowed("ms ")),
            Piece::zero_padded(Field::Microseconds, 3),
            Piece::Literal(Cow::Borrowed("us")),
        ]),
    };

    /// Hours, minutes and seconds, e.g. `01h 02m 05s`. Template: `{0:02}h {1:02}m {2:02}s`.
    pub const HOURS: Self = Self {
        pieces: Cow::Borrowed(&[
            Piece::zero_padded(Field::Hours, 2),
            Piece::Literal(Cow::Borrowed("h ")),
            Piece::zero_padded(Field::Minutes, 2),
            Piece::Literal(Cow::Borrowed("m ")),
            Piece::zero_padded(Field::Seconds, 2),
            Piece::Literal(Cow::Borrowed("s")),
        ]),
    };

    /// Every field from hours down to microseconds, e.g. `00h 01m 15s 000ms 000us`.
    /// Template: `{0:02}h {1:02}m {2:02}s {3:03}ms {4:03}us`.
    pub const FULL: Self = Self {
        pieces: Cow::Borrowed(&[
            Piece::zero_padded(Field::Hours, 2),
            Piece::Literal(Cow::Borrowed("h ")),
            Piece::zero_padded(Field::Minutes, 2),
            Piece::Literal(Cow::Borrowed("m ")),
            Piece::zero_padded(Field::Seconds, 2),
            Piece::Literal(Cow::Borrowed("s ")),
            Piece::zero_padded(Field::Milliseconds, 3),
            Piece::Literal(Cow::Borrowed("ms ")),
            Piece::zero_padded(Field::Microseconds, 3),
            Piece::Literal(Cow::Borrowed("us")),
        ]),
    };

    /// Parses a caller-supplied template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if a placeholder is unterminated, names an unknown
    /// field or carries an invalid width, or if a closing brace is not escaped.
    pub fn parse(template: &str) -> Result<Self> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(c) = rest.chars().next() {
            rest = &rest[c.len_utf8()..];

            match c {
                '{' if rest.starts_with('{') => {
                    rest = &rest[1..];
                    literal.push('{');
                }
                '{' => {
                    let Some((placeholder, remainder)) = rest.split_once('}') else {
                        return Err(invalid(template, "unterminated placeholder"));
                    };

                    if placeholder.contains('{') {
                        return Err(invalid(template, "unexpected '{' inside placeholder"));
                    }

                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(Cow::Owned(mem::take(&mut literal))));
                    }

                    pieces.push(parse_placeholder(template, placeholder)?);
                    rest = remainder;
                }
                '}' if rest.starts_with('}') => {
                    rest = &rest[1..];
                    literal.push('}');
                }
                '}' => return Err(invalid(template, "unmatched '}'")),
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(Cow::Owned(literal)));
        }

        Ok(Self {
            pieces: Cow::Owned(pieces),
        })
    }

    pub(crate) fn render(&self, detail: &IntervalDetail, out: &mut impl Write) -> fmt::Result {
        for piece in self.pieces.iter() {
            match piece {
                Piece::Literal(text) => out.write_str(text)?,
                Piece::Field {
                    field,
                    width,
                    zero_pad: true,
                } => write!(out, "{:0width$}", field.value(detail), width = *width)?,
                Piece::Field {
                    field,
                    width,
                    zero_pad: false,
                } => write!(out, "{:width$}", field.value(detail), width = *width)?,
            }
        }

        Ok(())
    }
}

impl Default for IntervalFormat {
    fn default() -> Self {
        Self::SIMPLE
    }
}

impl FromStr for IntervalFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Renders the format back into template syntax, with fields in positional form.
impl fmt::Display for IntervalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in self.pieces.iter() {
            match piece {
                Piece::Literal(text) => {
                    for c in text.chars() {
                        match c {
                            '{' => f.write_str("{{")?,
                            '}' => f.write_str("}}")?,
                            other => f.write_char(other)?,
                        }
                    }
                }
                Piece::Field {
                    field,
                    width: 0,
                    zero_pad: _,
                } => write!(f, "{{{}}}", field.index())?,
                Piece::Field {
                    field,
                    width,
                    zero_pad,
                } => {
                    let pad = if *zero_pad { "0" } else { "" };
                    write!(f, "{{{}:{pad}{width}}}", field.index())?;
                }
            }
        }

        Ok(())
    }
}

impl Piece {
    const fn zero_padded(field: Field, width: usize) -> Self {
        Self::Field {
            field,
            width,
            zero_pad: true,
        }
    }
}

impl Field {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "0" | "hours" => Some(Self::Hours),
            "1" | "minutes" => Some(Self::Minutes),
            "2" | "seconds" => Some(Self::Seconds),
            "3" | "ms" => Some(Self::Milliseconds),
            "4" | "mk" | "us" => Some(Self::Microseconds),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Hours => 0,
            Self::Minutes => 1,
            Self::Seconds => 2,
            Self::Milliseconds => 3,
            Self::Microseconds => 4,
        }
    }

    const fn value(self, detail: &IntervalDetail) -> i64 {
        match self {
            Self::Hours => detail.hours(),
            Self::Minutes => detail.minutes(),
            Self::Seconds => detail.seconds(),
            Self::Milliseconds => detail.milliseconds(),
            Self::Microseconds => detail.microseconds(),
        }
    }
}

fn parse_placeholder(template: &str, placeholder: &str) -> Result<Piece> {
    let (name, spec) = placeholder
        .split_once(':')
        .unwrap_or((placeholder, ""));

    let name = name.trim();
    let field = Field::parse(name)
        .ok_or_else(|| invalid(template, format!("unknown field '{name}'")))?;

    let (zero_pad, digits) = match spec.strip_prefix('0') {
        Some(digits) => (true, digits),
        None => (false, spec),
    };

    let width = if digits.is_empty() {
        0
    } else {
        digits
            .parse::<usize>()
            .map_err(|e| invalid(template, format!("invalid width '{spec}': {e}")))?
    };

    if width > MAX_WIDTH {
        return Err(invalid(
            template,
            format!("width {width} exceeds the maximum of {MAX_WIDTH}"),
        ));
    }

    Ok(Piece::Field {
        field,
        width,
        zero_pad,
    })
}

fn invalid(template: &str, problem: impl Into<String>) -> Error {
    Error::InvalidFormat {
        template: template.to_string(),
        problem: problem.into(),
    }
}
