use super::lexer::PatternToken;
use crate::error::{get_location, print_span, Error, ErrorType, Result};
use logos::{Logos, Span};
use std::{borrow::Cow, fmt, str::FromStr};

/// Which grammar a [DurationPattern] was created from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PatternKind {
    /// `-H:mm:ss.FFFFFFFFF`, the total number of hours followed by minutes, seconds and an
    /// optional fraction of a second, e.g. `2959:53:10.019`.
    JsonRoundtrip,
    /// `-D:hh:mm:ss.FFFFFFFFF`, the total number of days followed by hours, minutes, seconds
    /// and an optional fraction of a second, e.g. `123:07:53:10.019`.
    Roundtrip,
    /// Any other pattern compiled with [`DurationPattern::create`].
    Custom,
}

impl PatternKind {
    /// The configuration name of a named pattern.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::JsonRoundtrip => "json-roundtrip",
            PatternKind::Roundtrip => "roundtrip",
            PatternKind::Custom => "custom",
        }
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "json-roundtrip" => Ok(PatternKind::JsonRoundtrip),
            "roundtrip" => Ok(PatternKind::Roundtrip),
            "custom" => Ok(PatternKind::Custom),
            _ => Err(Error::new(
                format!("Unknown duration pattern kind `{}`", name),
                Some(ErrorType::Syntax),
            )),
        }
    }
}

/// A unit of time a pattern field refers to, ordered from the largest to the smallest.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Unit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        })
    }
}

/// How many digits a bounded field is written with.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Width {
    /// One or two digits, e.g. `m`
    Variable,
    /// Exactly two digits, e.g. `mm`
    Fixed,
}

/// A single compiled element of a [DurationPattern].
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Segment {
    /// `-` when the duration is negative, nothing otherwise.
    Sign,
    /// The whole duration in `unit`s with all larger units folded in, zero-padded to `min_width`.
    Total { unit: Unit, min_width: u8 },
    /// A field bounded by the next larger unit, such as the minutes of an hour.
    Field { unit: Unit, width: Width },
    /// A fraction of a second truncated to `precision` digits.
    ///
    /// A `trimmed` fraction drops trailing zeros and is left out entirely when it's zero,
    /// together with its leading `.` if `dot` is set.
    Fraction { precision: u8, trimmed: bool, dot: bool },
    /// Literal text that's written and expected verbatim.
    Literal(Cow<'static, str>),
}

/// A compiled text format for [Duration](crate::duration::Duration) values.
///
/// Patterns are immutable configuration values. A scalar captures one when it's constructed and
/// uses it for every value it parses or serializes. The two named patterns are constants and
/// don't allocate:
///
/// ```
/// use graphql_duration::{duration::Duration, text::DurationPattern};
///
/// let duration = Duration::from_parts(123, 7, 53, 10, 19).unwrap();
/// assert_eq!(DurationPattern::JSON_ROUNDTRIP.format(&duration), "2959:53:10.019");
/// assert_eq!(DurationPattern::ROUNDTRIP.format(&duration), "123:07:53:10.019");
///
/// let pattern = DurationPattern::create("-H'h 'mm'm'").unwrap();
/// assert_eq!(pattern.format(&duration), "2959h 53m");
/// ```
///
/// The pattern language is:
///
/// - `-`: a leading `-` for negative durations. It's optional on input and must come first.
/// - `D`, `H`, `M`, `S`: the total number of days, hours, minutes or seconds. Repeating the
///   letter raises the minimum number of digits. Every pattern has exactly one, before any
///   other field.
/// - `h`/`hh`, `m`/`mm`, `s`/`ss`: hours, minutes and seconds bounded by the next larger unit,
///   as one or two digits or as exactly two digits.
/// - `f` to `fffffffff`: a fixed number of fractional second digits.
/// - `F` to `FFFFFFFFF`: up to that many fractional second digits without trailing zeros. A `.`
///   right before it is left out with it when the fraction is zero.
/// - `'text'` or `\c`: literal text. Any other character that isn't a letter is literal too.
///
/// A leading `+` is never accepted when parsing, no matter the pattern.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct DurationPattern {
    kind: PatternKind,
    text: Cow<'static, str>,
    segments: Cow<'static, [Segment]>,
}

const COLON: Segment = Segment::Literal(Cow::Borrowed(":"));

const NANO_FRACTION: Segment = Segment::Fraction {
    precision: 9,
    trimmed: true,
    dot: true,
};

const JSON_ROUNDTRIP_SEGMENTS: &[Segment] = &[
    Segment::Sign,
    Segment::Total {
        unit: Unit::Hours,
        min_width: 1,
    },
    COLON,
    Segment::Field {
        unit: Unit::Minutes,
        width: Width::Fixed,
    },
    COLON,
    Segment::Field {
        unit: Unit::Seconds,
        width: Width::Fixed,
    },
    NANO_FRACTION,
];

const ROUNDTRIP_SEGMENTS: &[Segment] = &[
    Segment::Sign,
    Segment::Total {
        unit: Unit::Days,
        min_width: 1,
    },
    COLON,
    Segment::Field {
        unit: Unit::Hours,
        width: Width::Fixed,
    },
    COLON,
    Segment::Field {
        unit: Unit::Minutes,
        width: Width::Fixed,
    },
    COLON,
    Segment::Field {
        unit: Unit::Seconds,
        width: Width::Fixed,
    },
    NANO_FRACTION,
];

const MAX_TOTAL_WIDTH: usize = 10;
const MAX_PRECISION: usize = 9;

impl DurationPattern {
    pub const JSON_ROUNDTRIP: DurationPattern = DurationPattern {
        kind: PatternKind::JsonRoundtrip,
        text: Cow::Borrowed("-H:mm:ss.FFFFFFFFF"),
        segments: Cow::Borrowed(JSON_ROUNDTRIP_SEGMENTS),
    };

    pub const ROUNDTRIP: DurationPattern = DurationPattern {
        kind: PatternKind::Roundtrip,
        text: Cow::Borrowed("-D:hh:mm:ss.FFFFFFFFF"),
        segments: Cow::Borrowed(ROUNDTRIP_SEGMENTS),
    };

    /// Returns the named pattern for a [PatternKind], or `None` for [`PatternKind::Custom`].
    pub fn named(kind: PatternKind) -> Option<DurationPattern> {
        match kind {
            PatternKind::JsonRoundtrip => Some(DurationPattern::JSON_ROUNDTRIP),
            PatternKind::Roundtrip => Some(DurationPattern::ROUNDTRIP),
            PatternKind::Custom => None,
        }
    }

    /// Compiles pattern text into a [DurationPattern].
    ///
    /// Text that's identical to one of the named patterns returns that named pattern.
    pub fn create<S: AsRef<str>>(text: S) -> Result<DurationPattern> {
        let text = text.as_ref();
        for named in [DurationPattern::JSON_ROUNDTRIP, DurationPattern::ROUNDTRIP] {
            if named.text == text {
                return Ok(named);
            }
        }

        let segments = compile(text)?;
        Ok(DurationPattern {
            kind: PatternKind::Custom,
            text: Cow::Owned(text.to_string()),
            segments: Cow::Owned(segments),
        })
    }

    #[inline]
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The pattern text this pattern was created from.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_ref()
    }
}

impl Default for DurationPattern {
    /// The [`DurationPattern::ROUNDTRIP`] pattern.
    #[inline]
    fn default() -> Self {
        DurationPattern::ROUNDTRIP
    }
}

impl FromStr for DurationPattern {
    type Err = Error;

    /// Accepts either the name of a named pattern or pattern text.
    fn from_str(text: &str) -> Result<Self> {
        match text.parse::<PatternKind>() {
            Ok(kind) => DurationPattern::named(kind).ok_or_else(|| {
                Error::new(
                    "A custom duration pattern must be given as pattern text",
                    Some(ErrorType::Syntax),
                )
            }),
            Err(_) => DurationPattern::create(text),
        }
    }
}

impl fmt::Display for DurationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for DurationPattern {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self.kind {
            PatternKind::Custom => serializer.serialize_str(&self.text),
            kind => serializer.serialize_str(kind.name()),
        }
    }
}

#[cfg(feature = "json")]
impl<'de> serde::Deserialize<'de> for DurationPattern {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|error: Error| serde::de::Error::custom(error.print(false)))
    }
}

fn pattern_error(source: &str, span: Span, message: String) -> Error {
    let context = print_span(source, span.clone());
    let location = get_location(source, span);
    Error::new_with_context(
        format!("Invalid duration pattern, {}", message),
        Some(location),
        context,
        Some(ErrorType::Syntax),
    )
}

const TOTAL_FIRST: &str =
    "only one total specifier (D, H, M or S) may be used and it must come before any other field";
const ADJACENT_NUMBERS: &str = "adjacent numeric fields must be separated by a literal";
const DIGIT_AFTER_NUMBER: &str =
    "literal text right after a numeric field must not start with a digit";

/// Keeps track of what a pattern has defined so far while it's being compiled.
#[derive(Default)]
struct PatternBuilder {
    segments: Vec<Segment>,
    literal: String,
    pending_dot: bool,
    has_sign: bool,
    last_unit: Option<Unit>,
    has_fraction: bool,
}

impl PatternBuilder {
    fn push_literal(&mut self, text: &str) -> std::result::Result<(), String> {
        self.flush_dot();
        if self.ends_with_number() && text.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(DIGIT_AFTER_NUMBER.to_string());
        }
        self.literal.push_str(text);
        Ok(())
    }

    /// Whether the last segment is numeric, with no literal text written after it yet.
    fn ends_with_number(&self) -> bool {
        self.literal.is_empty()
            && !self.pending_dot
            && matches!(
                self.segments.last(),
                Some(Segment::Total { .. } | Segment::Field { .. } | Segment::Fraction { .. })
            )
    }

    fn flush_dot(&mut self) {
        if self.pending_dot {
            self.pending_dot = false;
            self.literal.push('.');
        }
    }

    fn push(&mut self, segment: Segment) {
        self.flush_dot();
        self.flush_literal();
        self.segments.push(segment);
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            let literal = std::mem::take(&mut self.literal);
            self.segments.push(Segment::Literal(Cow::Owned(literal)));
        }
    }

    fn sign(&mut self) -> std::result::Result<(), String> {
        if self.has_sign {
            Err("the sign specifier may only be used once".to_string())
        } else if !self.segments.is_empty() || !self.literal.is_empty() || self.pending_dot {
            Err("the sign specifier must come first".to_string())
        } else {
            self.has_sign = true;
            self.push(Segment::Sign);
            Ok(())
        }
    }

    fn total(&mut self, unit: Unit, count: usize) -> std::result::Result<(), String> {
        if self.last_unit.is_some() {
            Err(TOTAL_FIRST.to_string())
        } else if count > MAX_TOTAL_WIDTH {
            Err(format!(
                "the total {} may be padded to at most {} digits",
                unit, MAX_TOTAL_WIDTH
            ))
        } else {
            self.last_unit = Some(unit);
            self.push(Segment::Total {
                unit,
                min_width: count as u8,
            });
            Ok(())
        }
    }

    fn field(&mut self, unit: Unit, count: usize) -> std::result::Result<(), String> {
        match self.last_unit {
            None => Err(format!(
                "the {} field requires a total specifier (D, H, M or S) before it",
                unit
            )),
            Some(last_unit) if last_unit >= unit => Err(format!(
                "the {} field must follow a larger unit than {}",
                unit, last_unit
            )),
            Some(_) if count > 2 => Err(format!("the {} field takes at most two letters", unit)),
            Some(_) if self.ends_with_number() => Err(ADJACENT_NUMBERS.to_string()),
            Some(_) => {
                self.last_unit = Some(unit);
                self.push(Segment::Field {
                    unit,
                    width: if count == 2 {
                        Width::Fixed
                    } else {
                        Width::Variable
                    },
                });
                Ok(())
            }
        }
    }

    fn fraction(&mut self, count: usize, trimmed: bool) -> std::result::Result<(), String> {
        if self.has_fraction {
            Err("only one fraction specifier may be used".to_string())
        } else if self.last_unit != Some(Unit::Seconds) {
            Err("the fraction specifier must follow the seconds".to_string())
        } else if count > MAX_PRECISION {
            Err(format!(
                "the fraction specifier takes at most {} letters",
                MAX_PRECISION
            ))
        } else if self.ends_with_number() {
            Err(ADJACENT_NUMBERS.to_string())
        } else {
            let dot = std::mem::take(&mut self.pending_dot);
            self.has_fraction = true;
            self.push(Segment::Fraction {
                precision: count as u8,
                trimmed,
                dot,
            });
            Ok(())
        }
    }

    fn finish(mut self) -> std::result::Result<Vec<Segment>, String> {
        if self.last_unit.is_none() {
            return Err("a total specifier (D, H, M or S) is required".to_string());
        }
        self.flush_dot();
        self.flush_literal();
        Ok(self.segments)
    }
}

/// Compiles pattern text into its segments.
pub(crate) fn compile(source: &str) -> Result<Vec<Segment>> {
    let mut builder = PatternBuilder::default();
    let mut lexer = PatternToken::lexer(source);
    while let Some(token) = lexer.next() {
        let result = match token {
            PatternToken::Minus => builder.sign(),
            PatternToken::Dot => {
                builder.flush_dot();
                builder.pending_dot = true;
                Ok(())
            }
            PatternToken::TotalDays(count) => builder.total(Unit::Days, count),
            PatternToken::TotalHours(count) => builder.total(Unit::Hours, count),
            PatternToken::TotalMinutes(count) => builder.total(Unit::Minutes, count),
            PatternToken::TotalSeconds(count) => builder.total(Unit::Seconds, count),
            PatternToken::Hours(count) => builder.field(Unit::Hours, count),
            PatternToken::Minutes(count) => builder.field(Unit::Minutes, count),
            PatternToken::Seconds(count) => builder.field(Unit::Seconds, count),
            PatternToken::FixedFraction(count) => builder.fraction(count, false),
            PatternToken::TrimmedFraction(count) => builder.fraction(count, true),
            PatternToken::Quoted(text)
            | PatternToken::Escaped(text)
            | PatternToken::Literal(text) => builder.push_literal(text),
            PatternToken::Error if lexer.slice().starts_with('\'') => {
                Err("quoted text must be closed with a `'`".to_string())
            }
            PatternToken::Error if lexer.slice().starts_with('\\') => {
                Err("an escape must be followed by a character".to_string())
            }
            PatternToken::Error => Err(format!("unsupported character `{}`", lexer.slice())),
        };
        if let Err(message) = result {
            return Err(pattern_error(source, lexer.span(), message));
        }
    }

    builder
        .finish()
        .map_err(|message| pattern_error(source, 0..source.len(), message))
}
