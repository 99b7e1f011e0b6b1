//! Positional extraction of readings from a station row.
//!
//! All knowledge of where readings sit in a row lives in [`RowLayout`]. A layout
//! change upstream shows up as unavailable readings, not as wrong ones.

use tracing::warn;

use crate::{
    error::Reading,
    html,
    model::{Observation, StationRow},
};

/// Zero-based `<td>` positions of each reading within a station row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Observation stamp, e.g. `14/02:30pm`; the time follows the last `/`.
    pub current_time: usize,
    /// Current temperature as plain text.
    pub current_value: usize,
    /// `value<br/><small>time</small>`
    pub low: usize,
    /// `value<br/><small>time</small>`
    pub high: usize,
}

impl RowLayout {
    /// Layout of the Sydney-area latest observations table (IDN60900).
    pub const BOM_IDN60900: RowLayout = RowLayout { current_time: 1, current_value: 2, low: 14, high: 15 };

    pub fn current(&self, row: &StationRow) -> Option<Observation> {
        let stamp = html::text(html::inner(cell(row, self.current_time)?));
        let (_, time) = stamp.rsplit_once('/')?;
        let time = time.trim();
        let value = html::text(html::inner(cell(row, self.current_value)?));
        if time.is_empty() || value.is_empty() {
            return None;
        }
        Some(Observation::new(time, value))
    }

    pub fn high(&self, row: &StationRow) -> Option<Observation> {
        value_with_small_time(cell(row, self.high)?)
    }

    pub fn low(&self, row: &StationRow) -> Option<Observation> {
        value_with_small_time(cell(row, self.low)?)
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::BOM_IDN60900
    }
}

/// The three readings of one run. `None` means unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readings {
    pub high: Option<Observation>,
    pub low: Option<Observation>,
    pub current: Option<Observation>,
}

impl Readings {
    pub fn extract(row: &StationRow, layout: &RowLayout) -> Self {
        let readings = Self { high: layout.high(row), low: layout.low(row), current: layout.current(row) };
        for missing in readings.missing() {
            warn!(station = %row.station, reading = %missing, "reading unavailable");
        }
        readings
    }

    pub fn missing(&self) -> Vec<Reading> {
        [
            (Reading::High, &self.high),
            (Reading::Low, &self.low),
            (Reading::Current, &self.current),
        ]
        .into_iter()
        .filter(|(_, obs)| obs.is_none())
        .map(|(reading, _)| reading)
        .collect()
    }
}

fn cell(row: &StationRow, index: usize) -> Option<&str> {
    row.cells.get(index).map(String::as_str)
}

/// Split `value<br/><small>time</small>` cell markup.
fn value_with_small_time(cell: &str) -> Option<Observation> {
    let markup = html::inner(cell);
    let lc = html::to_lower(markup);

    let br = lc.find("<br")?;
    let br_end = markup[br..].find('>')? + br + 1;
    let (small_start, small_end) = html::next_element(markup, &lc, "small", br_end)?;
    if !markup[br_end..small_start].trim().is_empty() {
        return None;
    }

    let value = html::text(&markup[..br]);
    let time = html::text(html::inner(&markup[small_start..small_end]));
    if value.is_empty() || time.is_empty() {
        return None;
    }
    Some(Observation::new(time, value))
}
