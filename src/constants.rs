//! Service-wide constants
//!
//! Defines the environment variable names, the row/column limits shared by
//! every write route, and the builtin location table the route registry is
//! generated from.
//!
//! ## Location table
//!
//! Each entry maps one spreadsheet tab to one set of routes. The write
//! column span (and therefore the expected `values` width) is part of the
//! contract for that location; widths vary between 2 and 15 columns
//! depending on how much of the row a location's clients maintain.

use std::time::Duration;

use crate::models::LocationSpec;

/// Environment variable holding the service-account JSON (inline, or
/// `@/path/to/key.json` to read from a file)
pub const ENV_CREDENTIALS: &str = "GOOGLE_CREDENTIALS";

/// Environment variable holding the target spreadsheet id
pub const ENV_SHEET_ID: &str = "GOOGLE_SHEET_ID";

/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "PORT";

pub const DEFAULT_PORT: u16 = 3000;

/// Rows 1-5 hold headers; row writes below this index are rejected
pub const MIN_WRITE_ROW: i64 = 6;

/// Column band targeted by whole-row appends
pub const APPEND_BAND: &str = "B:P";

/// Number of cells in one appended row (columns B through P)
pub const APPEND_WIDTH: usize = 15;

/// Upper bound on any single call to the Sheets values API
pub const REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// One entry per spreadsheet tab served by this process.
pub static LOCATIONS: &[LocationSpec] = &[
    LocationSpec {
        name: "trangbom",
        sheet_title: "TrangBom",
        read_range: "TrangBom!A5:P",
        write_col_start: "E",
        write_col_end: "F",
        write_width: 2,
        appendable: true,
    },
    LocationSpec {
        name: "songthan",
        sheet_title: "SongThan",
        read_range: "SongThan!A5:P",
        write_col_start: "E",
        write_col_end: "F",
        write_width: 2,
        appendable: true,
    },
    LocationSpec {
        name: "dieutri",
        sheet_title: "DieuTri",
        read_range: "DieuTri!A5:P",
        write_col_start: "E",
        write_col_end: "G",
        write_width: 3,
        appendable: true,
    },
    LocationSpec {
        name: "danang",
        sheet_title: "DaNang",
        read_range: "DaNang!A5:P",
        write_col_start: "E",
        write_col_end: "G",
        write_width: 3,
        appendable: true,
    },
    LocationSpec {
        name: "kimlien",
        sheet_title: "KimLien",
        read_range: "KimLien!A5:P",
        write_col_start: "E",
        write_col_end: "F",
        write_width: 2,
        appendable: true,
    },
    LocationSpec {
        name: "donganh",
        sheet_title: "DongAnh",
        read_range: "DongAnh!A5:P",
        write_col_start: "E",
        write_col_end: "G",
        write_width: 3,
        appendable: true,
    },
    LocationSpec {
        name: "giapbat",
        sheet_title: "GiapBat",
        read_range: "GiapBat!A5:P",
        write_col_start: "B",
        write_col_end: "H",
        write_width: 7,
        appendable: true,
    },
    LocationSpec {
        name: "vinh",
        sheet_title: "Vinh",
        read_range: "Vinh!A5:P",
        write_col_start: "B",
        write_col_end: "H",
        write_width: 7,
        appendable: true,
    },
    LocationSpec {
        name: "quangngai",
        sheet_title: "QuangNgai",
        read_range: "QuangNgai!A5:P",
        write_col_start: "B",
        write_col_end: "H",
        write_width: 7,
        appendable: true,
    },
    LocationSpec {
        name: "nhatrang",
        sheet_title: "NhaTrang",
        read_range: "NhaTrang!A5:P",
        write_col_start: "B",
        write_col_end: "P",
        write_width: 15,
        appendable: true,
    },
    LocationSpec {
        name: "binhthuan",
        sheet_title: "BinhThuan",
        read_range: "BinhThuan!A5:P",
        write_col_start: "B",
        write_col_end: "P",
        write_width: 15,
        appendable: true,
    },
];

/// Summary tab behind the legacy `/data` and `/write` routes.
///
/// Not registered under `/sum`; only the legacy paths reach it, and it has
/// no append route.
pub static SUMMARY: LocationSpec = LocationSpec {
    name: "sum",
    sheet_title: "sum",
    read_range: "sum!A5:P8",
    write_col_start: "E",
    write_col_end: "F",
    write_width: 2,
    appendable: false,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn location_names_are_unique_route_segments() {
        let mut seen = HashSet::new();
        for spec in LOCATIONS {
            assert!(seen.insert(spec.name), "duplicate location {}", spec.name);
            assert!(
                spec.name.chars().all(|c| c.is_ascii_lowercase()),
                "{} is not a lowercase route segment",
                spec.name
            );
        }
    }

    #[test]
    fn read_ranges_target_their_own_tab() {
        for spec in LOCATIONS {
            let prefix = format!("{}!", spec.sheet_title);
            assert!(
                spec.read_range.starts_with(&prefix),
                "{} reads from {}",
                spec.name,
                spec.read_range
            );
        }
    }

    #[test]
    fn write_widths_are_positive_and_within_append_band() {
        for spec in LOCATIONS.iter().chain(std::iter::once(&SUMMARY)) {
            assert!(spec.write_width >= 1);
            assert!(spec.write_width <= APPEND_WIDTH);
        }
    }
}
