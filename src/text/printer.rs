use super::pattern::{DurationPattern, Segment, Unit, Width};
use crate::duration::Duration;
use std::{fmt, fmt::Write};

/// Trait for writing a part of a [Duration]'s text form to a buffer.
///
/// This is implemented by the segments of a [DurationPattern] and by the pattern itself, which
/// writes all of its segments in order.
pub trait PrintSegment {
    /// Write the text of `duration` to a buffer implementing the [Write] trait.
    fn write_to_buffer(&self, duration: &Duration, buffer: &mut dyn Write) -> fmt::Result;
}

impl PrintSegment for Segment {
    fn write_to_buffer(&self, duration: &Duration, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Segment::Sign if duration.is_negative() => buffer.write_char('-'),
            Segment::Sign => Ok(()),
            Segment::Total { unit, min_width } => {
                let value = match unit {
                    Unit::Days => duration.days(),
                    Unit::Hours => duration.total_hours(),
                    Unit::Minutes => duration.total_minutes(),
                    Unit::Seconds => duration.total_seconds(),
                };
                let mut digits = [b'0'; lexical_core::BUFFER_SIZE];
                let digits = lexical_core::write(value, &mut digits);
                for _ in digits.len()..usize::from(*min_width) {
                    buffer.write_char('0')?;
                }
                buffer.write_str(std::str::from_utf8(digits).map_err(|_| fmt::Error)?)
            }
            Segment::Field { unit, width } => {
                let value = match unit {
                    Unit::Days => duration.days(),
                    Unit::Hours => duration.hours(),
                    Unit::Minutes => duration.minutes(),
                    Unit::Seconds => duration.seconds(),
                };
                match width {
                    Width::Fixed => write!(buffer, "{:02}", value),
                    Width::Variable => write!(buffer, "{}", value),
                }
            }
            Segment::Fraction {
                precision,
                trimmed,
                dot,
            } => {
                let precision = usize::from(*precision);
                let value = duration.subsec_nanos() / 10u64.pow(9 - precision as u32);
                let digits = format!("{:0width$}", value, width = precision);
                let digits = if *trimmed {
                    digits.trim_end_matches('0')
                } else {
                    digits.as_str()
                };
                if digits.is_empty() {
                    return Ok(());
                }
                if *dot {
                    buffer.write_char('.')?;
                }
                buffer.write_str(digits)
            }
            Segment::Literal(text) => buffer.write_str(text),
        }
    }
}

impl PrintSegment for DurationPattern {
    #[inline]
    fn write_to_buffer(&self, duration: &Duration, buffer: &mut dyn Write) -> fmt::Result {
        for segment in self.segments() {
            segment.write_to_buffer(duration, buffer)?;
        }
        Ok(())
    }
}

impl DurationPattern {
    /// Serializes a duration to its text form according to this pattern.
    ///
    /// Any duration can be serialized with any pattern; fractions of a second beyond the
    /// pattern's precision are truncated.
    pub fn format(&self, duration: &Duration) -> String {
        let mut buf = String::new();
        match PrintSegment::write_to_buffer(self, duration, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}
