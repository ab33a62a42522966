use crate::constants::APPEND_BAND;

/// Static description of one spreadsheet tab and the routes generated for it.
///
/// One instance per tab, defined once in `constants::LOCATIONS`; handlers
/// never mutate these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationSpec {
    /// Lowercase route segment (`/vinh`, `/vinh/write`, `/vinh/add`)
    pub name: &'static str,
    /// Tab name as it appears in A1 notation
    pub sheet_title: &'static str,
    /// Full A1 range returned by the read route, e.g. `"Vinh!A5:P"`
    pub read_range: &'static str,
    /// First column of the row-write span
    pub write_col_start: &'static str,
    /// Last column of the row-write span
    pub write_col_end: &'static str,
    /// Required `values` length for row writes (the span width)
    pub write_width: usize,
    /// Whether a whole-row `/add` route is generated
    pub appendable: bool,
}

impl LocationSpec {
    /// A1 range for overwriting one row's write span,
    /// e.g. `"Vinh!B10:H10"` for row 10 on a B..H location.
    pub fn write_range(&self, row_index: i64) -> String {
        format!(
            "{}!{}{row}:{}{row}",
            self.sheet_title,
            self.write_col_start,
            self.write_col_end,
            row = row_index
        )
    }

    /// Open-ended column band appends target, e.g. `"Vinh!B:P"`.
    pub fn append_range(&self) -> String {
        format!("{}!{}", self.sheet_title, APPEND_BAND)
    }
}
