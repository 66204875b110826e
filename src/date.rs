//! Date helpers.

use std::fmt::{Display, Write};

use chrono::{DateTime, Datelike, Local, TimeZone};

use crate::compat::{Zz, ZzCompatible};

/// Pattern used when the caller has no preference: `18/10/2026 13:45`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

impl<Tz: TimeZone> ZzCompatible for DateTime<Tz> {}

impl<Tz: TimeZone> Zz<&DateTime<Tz>> {
    /// Whether the date falls in the current calendar year of the local time zone.
    #[must_use]
    pub fn is_in_this_year(&self) -> bool {
        self.base.with_timezone(&Local).year() == Local::now().year()
    }

    /// Render the date with a `chrono` strftime pattern.
    ///
    /// Returns `None` when `format` holds an unknown specifier.
    ///
    /// ```
    /// # use chrono::{TimeZone, Utc};
    /// # use zz_extension::{ZzCompatible, date::DEFAULT_DATE_FORMAT};
    /// let date = Utc.with_ymd_and_hms(2026, 10, 18, 13, 45, 0).unwrap();
    /// assert_eq!(date.zz().string_with_format(DEFAULT_DATE_FORMAT).as_deref(), Some("18/10/2026 13:45"));
    /// ```
    #[must_use]
    pub fn string_with_format(&self, format: &str) -> Option<String>
    where
        Tz::Offset: Display,
    {
        let mut rendered = String::new();
        write!(rendered, "{}", self.base.format(format)).ok()?;
        Some(rendered)
    }
}
