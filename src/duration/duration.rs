use super::DurationFields;
use crate::error::{Error, Result};
use crate::text::{DurationPattern, PrintSegment};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::{fmt, str::FromStr, time};

pub const NANOS_PER_MILLI: u128 = 1_000_000;
pub const NANOS_PER_SECOND: u128 = 1_000_000_000;
pub const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
pub const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;
pub const NANOS_PER_DAY: u128 = 24 * NANOS_PER_HOUR;

/// Exclusive upper bound of a duration's magnitude in nanoseconds.
const MAX_NANOS: u128 = Duration::MAX_DAYS as u128 * NANOS_PER_DAY;

/// The direction of a [Duration].
///
/// Positive durations are written without any sign, negative durations with a single leading `-`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// A fixed, calendar-independent length of time with nanosecond precision.
///
/// A duration is an unsigned magnitude and a [Sign]. Its magnitude is always below
/// [`Duration::MAX_DAYS`] days and a zero duration is always positive, hence two durations
/// that represent the same length of time are always equal.
///
/// The [`fmt::Display`] and [`FromStr`] implementations use the JSON roundtrip pattern
/// (`-H:mm:ss.FFFFFFFFF`), which is the wire format of the `Duration` scalar:
///
/// ```
/// use graphql_duration::duration::Duration;
///
/// let duration = Duration::from_parts(123, 7, 53, 10, 19).unwrap();
/// assert_eq!(duration.to_string(), "2959:53:10.019");
/// assert_eq!((-duration).to_string(), "-2959:53:10.019");
/// assert_eq!("2959:53:10.019".parse::<Duration>().unwrap(), duration);
/// ```
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct Duration {
    sign: Sign,
    nanos: u128,
}

impl Duration {
    /// The number of days every duration's magnitude stays below.
    pub const MAX_DAYS: u64 = 1 << 24;

    /// A duration of zero length.
    pub const ZERO: Duration = Duration {
        sign: Sign::Positive,
        nanos: 0,
    };

    /// The longest positive duration.
    pub const MAX: Duration = Duration {
        sign: Sign::Positive,
        nanos: MAX_NANOS - 1,
    };

    /// The longest negative duration.
    pub const MIN: Duration = Duration {
        sign: Sign::Negative,
        nanos: MAX_NANOS - 1,
    };

    /// Creates a duration from a sign and a magnitude in nanoseconds.
    ///
    /// Returns `None` if the magnitude is out of range. A zero magnitude is always positive.
    #[inline]
    pub fn new(sign: Sign, nanos: u128) -> Option<Duration> {
        if nanos >= MAX_NANOS {
            None
        } else if nanos == 0 {
            Some(Duration::ZERO)
        } else {
            Some(Duration { sign, nanos })
        }
    }

    /// Creates a duration from unnormalized fields, carrying overflow into larger units.
    #[inline]
    pub fn from_fields(fields: DurationFields) -> Option<Duration> {
        Duration::new(fields.sign, fields.total_nanos()?)
    }

    /// Creates a positive duration from days, hours, minutes, seconds and milliseconds.
    ///
    /// None of the values need to be in their natural range, so `from_parts(123, 26, 0, 70, 0)`
    /// is the same as `from_parts(124, 2, 1, 10, 0)`.
    pub fn from_parts(
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
        millis: u64,
    ) -> Option<Duration> {
        let nanos = u128::from(millis).checked_mul(NANOS_PER_MILLI)?;
        let fields = DurationFields {
            sign: Sign::Positive,
            days,
            hours,
            minutes,
            seconds,
            nanoseconds: 0,
        };
        Duration::new(Sign::Positive, fields.total_nanos()?.checked_add(nanos)?)
    }

    #[inline]
    fn from_units(value: i64, unit: u128) -> Option<Duration> {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Duration::new(sign, u128::from(value.unsigned_abs()).checked_mul(unit)?)
    }

    /// Makes a new duration with the given number of days.
    /// Returns `None` when it's out of range.
    #[inline]
    pub fn try_from_days(days: i64) -> Option<Duration> {
        Duration::from_units(days, NANOS_PER_DAY)
    }

    /// Makes a new duration with the given number of days.
    ///
    /// # Panics
    ///
    /// Panics when the duration is out of range.
    #[inline]
    pub fn from_days(days: i64) -> Duration {
        Duration::try_from_days(days).expect("Duration::from_days out of bounds")
    }

    /// Makes a new duration with the given number of hours.
    ///
    /// # Panics
    ///
    /// Panics when the duration is out of range.
    #[inline]
    pub fn from_hours(hours: i64) -> Duration {
        Duration::from_units(hours, NANOS_PER_HOUR).expect("Duration::from_hours out of bounds")
    }

    /// Makes a new duration with the given number of minutes.
    ///
    /// # Panics
    ///
    /// Panics when the duration is out of range.
    #[inline]
    pub fn from_minutes(minutes: i64) -> Duration {
        Duration::from_units(minutes, NANOS_PER_MINUTE)
            .expect("Duration::from_minutes out of bounds")
    }

    /// Makes a new duration with the given number of seconds.
    ///
    /// # Panics
    ///
    /// Panics when the duration is out of range.
    #[inline]
    pub fn from_seconds(seconds: i64) -> Duration {
        Duration::from_units(seconds, NANOS_PER_SECOND)
            .expect("Duration::from_seconds out of bounds")
    }

    /// Makes a new duration with the given number of milliseconds.
    ///
    /// # Panics
    ///
    /// Panics when the duration is out of range.
    #[inline]
    pub fn from_millis(millis: i64) -> Duration {
        Duration::from_units(millis, NANOS_PER_MILLI).expect("Duration::from_millis out of bounds")
    }

    /// Makes a new duration with the given number of nanoseconds.
    #[inline]
    pub fn from_nanos(nanos: i64) -> Duration {
        // i64::MAX nanoseconds are roughly 106,751 days, well below MAX_DAYS
        Duration::from_units(nanos, 1).unwrap_or(Duration::ZERO)
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.nanos == 0
    }

    /// The unsigned magnitude of this duration in nanoseconds.
    #[inline]
    pub fn magnitude_nanos(&self) -> u128 {
        self.nanos
    }

    /// The signed length of this duration in nanoseconds.
    #[inline]
    pub fn total_nanos(&self) -> i128 {
        // MAX_NANOS is far below i128::MAX
        let nanos = self.nanos as i128;
        match self.sign {
            Sign::Positive => nanos,
            Sign::Negative => -nanos,
        }
    }

    /// Whole days of the magnitude.
    #[inline]
    pub fn days(&self) -> u64 {
        (self.nanos / NANOS_PER_DAY) as u64
    }

    /// Hours of the day, from 0 to 23.
    #[inline]
    pub fn hours(&self) -> u64 {
        (self.nanos % NANOS_PER_DAY / NANOS_PER_HOUR) as u64
    }

    /// Minutes of the hour, from 0 to 59.
    #[inline]
    pub fn minutes(&self) -> u64 {
        (self.nanos % NANOS_PER_HOUR / NANOS_PER_MINUTE) as u64
    }

    /// Seconds of the minute, from 0 to 59.
    #[inline]
    pub fn seconds(&self) -> u64 {
        (self.nanos % NANOS_PER_MINUTE / NANOS_PER_SECOND) as u64
    }

    /// The fraction of a second in nanoseconds.
    #[inline]
    pub fn subsec_nanos(&self) -> u64 {
        (self.nanos % NANOS_PER_SECOND) as u64
    }

    /// The fraction of a second in whole milliseconds.
    #[inline]
    pub fn subsec_millis(&self) -> u64 {
        (self.nanos % NANOS_PER_SECOND / NANOS_PER_MILLI) as u64
    }

    /// Whole hours of the magnitude, with days folded in.
    #[inline]
    pub fn total_hours(&self) -> u64 {
        (self.nanos / NANOS_PER_HOUR) as u64
    }

    /// Whole minutes of the magnitude, with all larger units folded in.
    #[inline]
    pub fn total_minutes(&self) -> u64 {
        (self.nanos / NANOS_PER_MINUTE) as u64
    }

    /// Whole seconds of the magnitude, with all larger units folded in.
    #[inline]
    pub fn total_seconds(&self) -> u64 {
        (self.nanos / NANOS_PER_SECOND) as u64
    }

    /// Returns the normalized field-by-field view of this duration.
    pub fn fields(&self) -> DurationFields {
        DurationFields {
            sign: self.sign,
            days: self.days(),
            hours: self.hours(),
            minutes: self.minutes(),
            seconds: self.seconds(),
            nanoseconds: self.subsec_nanos(),
        }
    }

    /// Returns the positive duration of the same magnitude.
    #[inline]
    pub fn abs(&self) -> Duration {
        Duration {
            sign: Sign::Positive,
            nanos: self.nanos,
        }
    }

    /// Adds two durations, returning `None` if the result is out of range.
    pub fn checked_add(self, rhs: Duration) -> Option<Duration> {
        if self.sign == rhs.sign {
            Duration::new(self.sign, self.nanos.checked_add(rhs.nanos)?)
        } else if self.nanos >= rhs.nanos {
            Duration::new(self.sign, self.nanos - rhs.nanos)
        } else {
            Duration::new(rhs.sign, rhs.nanos - self.nanos)
        }
    }

    /// Subtracts two durations, returning `None` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        self.checked_add(-rhs)
    }
}

impl Default for Duration {
    #[inline]
    fn default() -> Self {
        Duration::ZERO
    }
}

impl Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        if self.nanos == 0 {
            self
        } else {
            Duration {
                sign: -self.sign,
                nanos: self.nanos,
            }
        }
    }
}

impl Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("overflow when adding durations")
    }
}

impl Sub for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Duration) -> Duration {
        self.checked_sub(rhs).expect("overflow when subtracting durations")
    }
}

impl AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl PartialOrd for Duration {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_nanos().cmp(&other.total_nanos())
    }
}

impl TryFrom<time::Duration> for Duration {
    type Error = Error;

    fn try_from(duration: time::Duration) -> Result<Self> {
        Duration::new(Sign::Positive, duration.as_nanos())
            .ok_or_else(|| Error::new("Duration is out of the supported range", None))
    }
}

impl TryFrom<Duration> for time::Duration {
    type Error = Error;

    fn try_from(duration: Duration) -> Result<Self> {
        if duration.is_negative() {
            return Err(Error::new(
                "Negative durations can't be converted to std::time::Duration",
                None,
            ));
        }
        // Magnitudes below MAX_DAYS days fit into u64 seconds
        Ok(time::Duration::new(
            duration.total_seconds(),
            duration.subsec_nanos() as u32,
        ))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DurationPattern::JSON_ROUNDTRIP.write_to_buffer(self, f)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self)
    }
}

impl FromStr for Duration {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self> {
        DurationPattern::JSON_ROUNDTRIP.parse(text)
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for Duration {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "json")]
impl<'de> serde::Deserialize<'de> for Duration {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|error: Error| serde::de::Error::custom(error.print(false)))
    }
}
