//! Date windows for notification runs
//!
//! Windowed notification queries are bounded by an entry-date range and a
//! publication-year floor. The range depends on cadence: daily runs cover
//! the current day (reaching back over the weekend on Mondays), weekly runs
//! cover the configured number of days. A user resuming after a pause can
//! widen the window with a resume date, never narrow it.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::MyadsConfig;
use crate::notification::Frequency;

/// Days of publication history covered by the pubdate floor
const PUBDATE_LOOKBACK_DAYS: i64 = 180;

/// The entdate/pubdate window applied to a notification query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Publication-year floor, roughly half a year back from the run date
    pub beg_pubyear: i32,
}

impl DateWindow {
    /// Window for one notification run ending on `now`.
    ///
    /// A resume date earlier than the default start widens the window;
    /// later ones are ignored so a stale resume date can never hide
    /// results.
    pub fn for_frequency(
        frequency: Frequency,
        resume: Option<NaiveDate>,
        now: NaiveDate,
        config: &MyadsConfig,
    ) -> Self {
        let default_start = match frequency {
            Frequency::Daily => {
                if now.weekday() == Weekday::Mon {
                    // cover the weekend gap since the Friday run
                    now - Duration::days(config.windows.daily_time_range as i64)
                } else {
                    now
                }
            }
            Frequency::Weekly => now - Duration::days(config.windows.weekly_time_range as i64),
        };

        let start = match resume {
            Some(resume) if resume < default_start => resume,
            _ => default_start,
        };

        Self {
            start,
            end: now,
            beg_pubyear: (now - Duration::days(PUBDATE_LOOKBACK_DAYS)).year(),
        }
    }

    /// The filter fragment appended to windowed queries.
    pub fn filter(&self) -> String {
        format!(
            "entdate:[\"{}Z00:00\" TO \"{}Z23:59\"] pubdate:[{}-00 TO *]",
            self.start, self.end, self.beg_pubyear
        )
    }
}
