use std::fmt::{Debug, Formatter};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::time::Time;

/// One segment of a time bar.
///
/// Nothing ties the fields together: `end_time` may precede `start_time`, and `duration`
/// is not required to match the difference between them. Use [`crate::Consistency`]
/// when a consumer cares.
///
/// Fields are declared (and serialized) in the order `duration`, `end_time`, `start_time`.
///
/// ```
/// use timebar::TimeInterval;
///
/// let interval = TimeInterval::builder().duration(10).start_time(0).end_time(10).build();
/// assert_eq!(f64::from(interval.end_time), 10.0);
/// ```
#[derive(Copy, Clone, Eq, Hash, PartialEq, Builder, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[must_use]
pub struct TimeInterval {
    #[builder(into)]
    pub duration: Time,

    #[builder(into)]
    pub end_time: Time,

    #[builder(into)]
    pub start_time: Time,
}

impl Debug for TimeInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?} ({:?})", self.start_time, self.end_time, self.duration)
    }
}

impl TimeInterval {
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.duration.is_finite() && self.end_time.is_finite() && self.start_time.is_finite()
    }
}

/// Time bar segments in display order.
///
/// Neither sorted nor deduplicated.
pub type TimeIntervalSequence = Vec<TimeInterval>;
