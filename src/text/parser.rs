use super::pattern::{DurationPattern, Segment, Unit, Width};
use crate::duration::{Duration, DurationFields, Sign};
use crate::error::{get_location, print_span, Error, ErrorType, Result};
use logos::Span;
use std::fmt;

type ParseResult<T> = std::result::Result<T, ParseFailure>;

/// The reason a duration text didn't match its pattern.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum ParseFailure {
    ExplicitPositiveSign,
    ExpectedDigits(Unit, usize),
    ExpectedTwoDigits(Unit),
    ExpectedFraction(usize),
    ExpectedLiteral(String),
    TrailingText,
    OutOfRange,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::ExplicitPositiveSign => {
                f.write_str("positive durations must not have a `+` sign")
            }
            ParseFailure::ExpectedDigits(unit, 1) => write!(f, "expected digits for {}", unit),
            ParseFailure::ExpectedDigits(unit, count) => {
                write!(f, "expected at least {} digits for {}", count, unit)
            }
            ParseFailure::ExpectedTwoDigits(unit) => {
                write!(f, "expected exactly two digits for {}", unit)
            }
            ParseFailure::ExpectedFraction(1) => {
                f.write_str("expected digits for the fraction of a second")
            }
            ParseFailure::ExpectedFraction(count) => write!(
                f,
                "expected exactly {} digits for the fraction of a second",
                count
            ),
            ParseFailure::ExpectedLiteral(text) => write!(f, "expected `{}`", text),
            ParseFailure::TrailingText => f.write_str("unexpected trailing text"),
            ParseFailure::OutOfRange => f.write_str("the duration is out of range"),
        }
    }
}

/// Parser state over a duration text. The span always covers what the parser looked at last,
/// so that a failure can point at it.
pub(crate) struct ParserContext<'a> {
    source: &'a str,
    offset: usize,
    span: Span,
}

impl<'a> ParserContext<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        ParserContext {
            source,
            offset: 0,
            span: 0..0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.offset).copied()
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Points the span at the next character, or at the end of the input.
    #[inline]
    fn mark_next(&mut self) {
        let len = self.source[self.offset..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        self.span = self.offset..self.offset + len;
    }

    /// Points the span at everything from the current position to the end of the input.
    #[inline]
    fn mark_rest(&mut self) {
        self.span = self.offset..self.source.len();
    }

    #[inline]
    fn eat(&mut self, byte: u8) -> bool {
        self.mark_next();
        if self.peek() == Some(byte) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn eat_str(&mut self, text: &str) -> bool {
        self.mark_next();
        if self.source[self.offset..].starts_with(text) {
            self.offset += text.len();
            true
        } else {
            false
        }
    }

    /// Consumes a run of ASCII digits, at most `max` of them when it's set.
    fn digits(&mut self, max: Option<usize>) -> &'a str {
        let start = self.offset;
        let rest = &self.source.as_bytes()[start..];
        let limit = max.unwrap_or(rest.len()).min(rest.len());
        let len = rest[..limit]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if len == 0 {
            self.mark_next();
        } else {
            self.offset += len;
            self.span = start..self.offset;
        }
        &self.source[start..self.offset]
    }

    pub(crate) fn error(&self, failure: ParseFailure) -> Error {
        let context = print_span(self.source, self.span.clone());
        let location = get_location(self.source, self.span.clone());
        Error::new_with_context(
            format!("Invalid Duration value, {}", failure),
            Some(location),
            context,
            Some(ErrorType::Syntax),
        )
    }
}

#[inline]
fn parse_number(digits: &str) -> ParseResult<u64> {
    lexical_core::parse::<u64>(digits.as_bytes()).map_err(|_| ParseFailure::OutOfRange)
}

#[inline]
fn unit_field(fields: &mut DurationFields, unit: Unit) -> &mut u64 {
    match unit {
        Unit::Days => &mut fields.days,
        Unit::Hours => &mut fields.hours,
        Unit::Minutes => &mut fields.minutes,
        Unit::Seconds => &mut fields.seconds,
    }
}

/// Trait for parsing a part of a duration's text form into [DurationFields].
pub(crate) trait ParseSegment {
    fn parse_with_ctx(
        &self,
        ctx: &mut ParserContext<'_>,
        fields: &mut DurationFields,
    ) -> ParseResult<()>;
}

impl ParseSegment for Segment {
    fn parse_with_ctx(
        &self,
        ctx: &mut ParserContext<'_>,
        fields: &mut DurationFields,
    ) -> ParseResult<()> {
        match self {
            Segment::Sign => {
                if ctx.eat(b'-') {
                    fields.sign = Sign::Negative;
                } else if ctx.peek() == Some(b'+') {
                    return Err(ParseFailure::ExplicitPositiveSign);
                }
                Ok(())
            }
            Segment::Total { unit, min_width } => {
                let min_width = usize::from(*min_width).max(1);
                let digits = ctx.digits(None);
                if digits.len() < min_width {
                    return Err(ParseFailure::ExpectedDigits(*unit, min_width));
                }
                *unit_field(fields, *unit) = parse_number(digits)?;
                Ok(())
            }
            Segment::Field { unit, width } => {
                let digits = ctx.digits(Some(2));
                match width {
                    Width::Fixed if digits.len() != 2 => {
                        return Err(ParseFailure::ExpectedTwoDigits(*unit))
                    }
                    Width::Variable if digits.is_empty() => {
                        return Err(ParseFailure::ExpectedDigits(*unit, 1))
                    }
                    _ => {}
                }
                *unit_field(fields, *unit) = parse_number(digits)?;
                Ok(())
            }
            Segment::Fraction {
                precision,
                trimmed,
                dot,
            } => {
                let precision = usize::from(*precision);
                if *dot && !ctx.eat(b'.') {
                    return if *trimmed {
                        Ok(())
                    } else {
                        Err(ParseFailure::ExpectedLiteral(".".to_string()))
                    };
                }
                let digits = ctx.digits(None);
                match *trimmed {
                    true if digits.is_empty() && *dot => {
                        return Err(ParseFailure::ExpectedFraction(1))
                    }
                    false if digits.len() != precision => {
                        return Err(ParseFailure::ExpectedFraction(precision))
                    }
                    _ => {}
                }
                let digits = &digits[..digits.len().min(precision)];
                if !digits.is_empty() {
                    let scale = 10u64.pow(9 - digits.len() as u32);
                    fields.nanoseconds = parse_number(digits)? * scale;
                }
                Ok(())
            }
            Segment::Literal(text) => {
                if ctx.eat_str(text) {
                    Ok(())
                } else {
                    Err(ParseFailure::ExpectedLiteral(text.to_string()))
                }
            }
        }
    }
}

impl DurationPattern {
    /// Parses a duration's text form according to this pattern.
    ///
    /// Fields that exceed their natural range but fit their digits, like 70 seconds, are
    /// normalized rather than rejected. Fraction digits beyond the pattern's precision are
    /// truncated. A leading `+` is always rejected.
    pub fn parse(&self, text: &str) -> Result<Duration> {
        let mut ctx = ParserContext::new(text);
        if ctx.peek() == Some(b'+') {
            ctx.mark_next();
            return Err(ctx.error(ParseFailure::ExplicitPositiveSign));
        }

        let mut fields = DurationFields::default();
        for segment in self.segments() {
            segment
                .parse_with_ctx(&mut ctx, &mut fields)
                .map_err(|failure| ctx.error(failure))?;
        }

        if !ctx.is_done() {
            ctx.mark_rest();
            return Err(ctx.error(ParseFailure::TrailingText));
        }

        Duration::from_fields(fields).ok_or_else(|| {
            ctx.span = 0..text.len();
            ctx.error(ParseFailure::OutOfRange)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages() {
        let error = DurationPattern::JSON_ROUNDTRIP.parse("12:3:00").unwrap_err();
        assert_eq!(
            error.message(),
            "Invalid Duration value, expected exactly two digits for minutes"
        );
        assert_eq!(error.location().unwrap().column, 4);
        assert_eq!(error.context(), Some(" 1 | 12:3:00\n   |    ^"));
    }

    #[test]
    fn trailing_text_is_marked() {
        let error = DurationPattern::JSON_ROUNDTRIP.parse("1:00:00 h").unwrap_err();
        assert_eq!(
            error.message(),
            "Invalid Duration value, unexpected trailing text"
        );
        assert_eq!(error.context(), Some(" 1 | 1:00:00 h\n   |        ^^"));
    }

    #[test]
    fn non_ascii_input() {
        let error = DurationPattern::JSON_ROUNDTRIP.parse("1:ä0:00").unwrap_err();
        assert_eq!(error.location().unwrap().column, 3);
        assert_eq!(error.context(), Some(" 1 | 1:ä0:00\n   |   ^"));
    }

    #[test]
    fn digit_overflow() {
        let error = DurationPattern::JSON_ROUNDTRIP
            .parse("99999999999999999999999:00:00")
            .unwrap_err();
        assert_eq!(
            error.message(),
            "Invalid Duration value, the duration is out of range"
        );
        let error = DurationPattern::JSON_ROUNDTRIP
            .parse("402653184:00:00")
            .unwrap_err();
        assert_eq!(
            error.message(),
            "Invalid Duration value, the duration is out of range"
        );
    }
}
