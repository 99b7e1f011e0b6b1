//! Station row lookup on the observation page.

use tracing::debug;

use crate::{TempTweetError, html, model::StationRow};

/// Class carried by every station row of the observation table.
pub const ROW_CLASS: &str = "rowleftcolumn";

/// Find the row whose first link reads `station` (case-insensitive, trimmed).
///
/// The first match wins. Rows without a link are skipped.
pub fn locate(document: &str, station: &str) -> Result<StationRow, TempTweetError> {
    let wanted = station.trim().to_lowercase();

    for row in html::elements(document, "tr") {
        if !html::has_class(html::open_tag(row), ROW_CLASS) {
            continue;
        }
        let Some(link) = html::first_element(row, "a") else {
            continue;
        };
        let name = html::text(link);
        if name.to_lowercase() != wanted {
            continue;
        }

        let cells: Vec<String> = html::elements(row, "td").into_iter().map(str::to_owned).collect();
        debug!(station = %name, cells = cells.len(), "located station row");
        return Ok(StationRow { station: name, cells });
    }

    Err(TempTweetError::StationNotFound { station: station.to_string() })
}
