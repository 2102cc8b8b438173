//! Daily forecast aggregation.
//!
//! Collapses the source's fine-grained sample list (one entry per 3-hour
//! window, several days ahead) into one [`DaySummary`] per calendar date,
//! suitable for the per-day cards and the temperature chart.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{DaySummary, ForecastSample};

/// Number of days kept when the caller does not ask for a specific horizon.
pub const DEFAULT_HORIZON: usize = 5;

/// Group `samples` by calendar date and reduce each group to one summary.
///
/// Samples are expected in ascending timestamp order, as delivered by the
/// data source; they are not re-sorted here. The grouping key is the date
/// portion of each sample's timestamp taken verbatim (the source reports
/// local time and no timezone arithmetic is applied), and summaries come
/// back in the order their dates first appear, truncated to `horizon`.
///
/// Per day, `temp_max_c` / `temp_min_c` are the widest extremes seen across
/// that day's samples, while icon and description stick with the day's first
/// sample. That first slot can be a pre-dawn one and thus unrepresentative
/// of the day as a whole, but it keeps the choice deterministic; callers
/// relying on reproducible output depend on exactly this rule.
///
/// Pure function: no I/O, no shared state, same input gives same output.
/// An empty sample list or a horizon of zero yields an empty result.
pub fn aggregate(samples: &[ForecastSample], horizon: usize) -> Vec<DaySummary> {
    let mut days: Vec<DaySummary> = Vec::new();
    let mut seen: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let date = sample.timestamp.date();

        match seen.get(&date) {
            Some(&at) => {
                let day = &mut days[at];
                day.temp_max_c = day.temp_max_c.max(sample.temp_max_c);
                day.temp_min_c = day.temp_min_c.min(sample.temp_min_c);
                // Icon and description stay as seeded by the first sample.
            }
            None => {
                seen.insert(date, days.len());
                days.push(DaySummary {
                    date,
                    temp_max_c: sample.temp_max_c,
                    temp_min_c: sample.temp_min_c,
                    icon: sample.icon.clone(),
                    description: sample.description.clone(),
                });
            }
        }
    }

    days.truncate(horizon);
    days
}
