use super::{Duration, Sign, NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND};

/// A field-by-field view of a [Duration].
///
/// Fields aren't bounded by their natural ranges, so a value of 70 minutes is representable here.
/// [`DurationFields::normalize`] carries any overflow into the next larger unit, while
/// [`Duration::from_fields`] turns the fields into a value directly.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct DurationFields {
    pub sign: Sign,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub nanoseconds: u64,
}

impl DurationFields {
    /// Returns the total magnitude of all fields in nanoseconds, or `None` if it doesn't fit.
    pub fn total_nanos(&self) -> Option<u128> {
        let days = u128::from(self.days).checked_mul(NANOS_PER_DAY)?;
        let hours = u128::from(self.hours).checked_mul(NANOS_PER_HOUR)?;
        let minutes = u128::from(self.minutes).checked_mul(NANOS_PER_MINUTE)?;
        let seconds = u128::from(self.seconds).checked_mul(NANOS_PER_SECOND)?;
        days.checked_add(hours)?
            .checked_add(minutes)?
            .checked_add(seconds)?
            .checked_add(u128::from(self.nanoseconds))
    }

    /// Carries every field that exceeds its natural bound into the next larger unit.
    ///
    /// The result has hours below 24, minutes and seconds below 60 and nanoseconds below one
    /// second. The total elapsed time and the sign are preserved, except that a zero duration
    /// always ends up positive. Returns `None` if the total is out of the supported range.
    #[inline]
    pub fn normalize(self) -> Option<DurationFields> {
        Duration::from_fields(self).map(|duration| duration.fields())
    }
}

impl From<Duration> for DurationFields {
    #[inline]
    fn from(duration: Duration) -> Self {
        duration.fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_across_several_units() {
        let fields = DurationFields {
            sign: Sign::Positive,
            days: 123,
            hours: 26,
            minutes: 0,
            seconds: 70,
            nanoseconds: 0,
        };
        assert_eq!(
            fields.normalize(),
            Some(DurationFields {
                sign: Sign::Positive,
                days: 124,
                hours: 2,
                minutes: 1,
                seconds: 10,
                nanoseconds: 0,
            })
        );
    }

    #[test]
    fn carries_fraction_into_seconds() {
        let fields = DurationFields {
            minutes: 59,
            seconds: 59,
            nanoseconds: 1_500_000_000,
            sign: Sign::Negative,
            ..Default::default()
        };
        let normalized = fields.normalize().unwrap();
        assert_eq!(normalized.sign, Sign::Negative);
        assert_eq!(normalized.hours, 1);
        assert_eq!(normalized.minutes, 0);
        assert_eq!(normalized.seconds, 0);
        assert_eq!(normalized.nanoseconds, 500_000_000);
    }

    #[test]
    fn negative_zero_becomes_positive() {
        let fields = DurationFields {
            sign: Sign::Negative,
            ..Default::default()
        };
        assert_eq!(fields.normalize().unwrap().sign, Sign::Positive);
    }

    #[test]
    fn out_of_range() {
        let fields = DurationFields {
            days: Duration::MAX_DAYS,
            ..Default::default()
        };
        assert_eq!(fields.normalize(), None);

        let fields = DurationFields {
            days: u64::MAX,
            hours: u64::MAX,
            ..Default::default()
        };
        assert!(fields.total_nanos().is_some());
        assert_eq!(fields.normalize(), None);
    }
}
