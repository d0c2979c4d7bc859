use bon::bon;

use crate::{interval::TimeInterval, time::Time};

/// Plausible interval invariant that does not hold.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Inconsistency {
    #[error("non-finite value in {interval:?}")]
    NonFinite { interval: TimeInterval },

    #[error("end time {end_time} precedes start time {start_time}")]
    Reversed { start_time: Time, end_time: Time },

    #[error("negative duration {duration}")]
    NegativeDuration { duration: Time },

    #[error("duration {duration} does not match the span {span} between start and end")]
    DurationMismatch { duration: Time, span: Time },
}

#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
#[error("tolerance must be a finite non-negative number, got {0}")]
pub struct InvalidTolerance(pub f64);

/// Opt-in checker for the invariants [`TimeInterval`] leaves unenforced:
/// `start_time <= end_time` and `duration == end_time - start_time`.
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct Consistency {
    /// Relative tolerance for the duration check, scaled by the largest of `1`, `|duration|`
    /// and `|span|`.
    tolerance: f64,
}

impl Default for Consistency {
    fn default() -> Self {
        Self { tolerance: Self::DEFAULT_TOLERANCE }
    }
}

#[bon]
impl Consistency {
    #[builder]
    pub fn new(
        #[builder(default = Consistency::DEFAULT_TOLERANCE)] tolerance: f64,
    ) -> Result<Self, InvalidTolerance> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Consistency {
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Return the first violated rule.
    ///
    /// Rules are checked in order: finiteness, start before end, non-negative duration,
    /// and finally duration against the span. A span too large to represent never matches.
    pub fn check(&self, interval: &TimeInterval) -> Result<(), Inconsistency> {
        let TimeInterval { duration, end_time, start_time } = *interval;
        if !interval.is_finite() {
            return Err(Inconsistency::NonFinite { interval: *interval });
        }
        if end_time < start_time {
            return Err(Inconsistency::Reversed { start_time, end_time });
        }
        if duration < Time::ZERO {
            return Err(Inconsistency::NegativeDuration { duration });
        }
        let span = end_time - start_time;
        if !span.is_finite() {
            return Err(Inconsistency::DurationMismatch { duration, span });
        }
        let scale = 1.0_f64.max(f64::from(duration.abs())).max(f64::from(span.abs()));
        if f64::from((duration - span).abs()) > self.tolerance * scale {
            return Err(Inconsistency::DurationMismatch { duration, span });
        }
        Ok(())
    }

    /// Yield the index and the first violated rule of every inconsistent interval.
    pub fn report<'a>(
        &'a self,
        intervals: &'a [TimeInterval],
    ) -> impl Iterator<Item = (usize, Inconsistency)> + 'a {
        intervals
            .iter()
            .enumerate()
            .filter_map(|(index, interval)| self.check(interval).err().map(|error| (index, error)))
    }
}
