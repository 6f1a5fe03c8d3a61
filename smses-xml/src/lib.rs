//! Translation of Signal backup rows into SMS Backup & Restore records.
//!
//! The input is one [`SqlStatement`] per row of the `sms`, `mms` or `part` table; the output is
//! the typed record tree of [`schema`], ready to be handed to a serde XML encoder.

pub mod columns;
pub mod config;
mod error;
pub mod export;
pub mod schema;
pub mod statement;
pub mod translate;

pub use self::config::ExportConfig;
pub use self::error::{Error, Result};
pub use self::export::SmsesBuilder;
pub use self::schema::{Mms, MmsPart, Sms, SmsType, Smses};
pub use self::statement::{SqlParameter, SqlStatement};
pub use self::translate::{classify, mms_from_statement, part_from_statement, sms_from_statement};

use chrono::prelude::*;
use chrono::LocalResult;

/// Format of `readable_date`, as the importer expects it, e.g. `Nov 14, 2023 10:13:20 PM`.
pub const READABLE_DATE_FORMAT: &str = "%b %d, %Y %-I:%M:%S %p";

/// Renders a millisecond timestamp in local time, truncated to whole seconds.
///
/// Timestamps past the range chrono can represent (around the year 262000) give `None`.
pub fn millis_to_readable_date(ts: Option<u64>) -> Option<String> {
    let ts = ts?;
    // u64::MAX / 1000 fits in an i64
    let secs = (ts / 1000) as i64;
    match Utc.timestamp_opt(secs, 0) {
        LocalResult::Single(t) => Some(
            t.with_timezone(&Local)
                .format(READABLE_DATE_FORMAT)
                .to_string(),
        ),
        _ => {
            log::warn!("Timestamp {} out of range, leaving readable date empty", ts);
            None
        }
    }
}
