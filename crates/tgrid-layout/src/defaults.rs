//! Default width tables and font metrics per column type and breakpoint.
//!
//! All values are pixels. Maximum widths combine a per-breakpoint absolute
//! cap with a percentage-of-container cap, taking the smaller of the two.

use crate::breakpoint::Breakpoint;
use crate::measure::FontSpec;
use tgrid_core::ColumnType;

// Tables indexed by Breakpoint::index(): [xs, sm, md, lg, xl].

const BASE_BOOL: [f64; 5] = [60.0, 70.0, 80.0, 90.0, 100.0];
const BASE_NUMBER: [f64; 5] = [80.0, 90.0, 100.0, 110.0, 120.0];
const BASE_DATE: [f64; 5] = [100.0, 110.0, 120.0, 130.0, 140.0];
const BASE_STRING: [f64; 5] = [100.0, 120.0, 140.0, 160.0, 180.0];

const MIN_BOOL: [f64; 5] = [50.0, 60.0, 70.0, 70.0, 70.0];
const MIN_NUMBER: [f64; 5] = [60.0, 70.0, 80.0, 80.0, 80.0];
const MIN_DATE: [f64; 5] = [80.0, 90.0, 100.0, 100.0, 100.0];
const MIN_STRING: [f64; 5] = [80.0, 90.0, 100.0, 100.0, 100.0];

const MAX_BOOL: [f64; 5] = [80.0, 100.0, 120.0, 140.0, 160.0];
const MAX_NUMBER: [f64; 5] = [120.0, 150.0, 180.0, 200.0, 220.0];
const MAX_DATE: [f64; 5] = [140.0, 160.0, 180.0, 200.0, 220.0];
const MAX_STRING: [f64; 5] = [200.0, 250.0, 300.0, 350.0, 400.0];

/// Base (preferred) width for a type at a breakpoint.
#[must_use]
pub fn base_width(ty: ColumnType, bp: Breakpoint) -> f64 {
    let table = match ty {
        ColumnType::Bool => &BASE_BOOL,
        ColumnType::Number => &BASE_NUMBER,
        ColumnType::Date => &BASE_DATE,
        ColumnType::String => &BASE_STRING,
    };
    table[bp.index()]
}

/// Minimum width for a type at a breakpoint.
///
/// With `preserve_readability` the minimum is additionally floored at a
/// breakpoint-independent value so dense containers stay legible.
#[must_use]
pub fn min_width(ty: ColumnType, bp: Breakpoint, preserve_readability: bool) -> f64 {
    let table = match ty {
        ColumnType::Bool => &MIN_BOOL,
        ColumnType::Number => &MIN_NUMBER,
        ColumnType::Date => &MIN_DATE,
        ColumnType::String => &MIN_STRING,
    };
    let mut min = table[bp.index()];
    if preserve_readability {
        let floor = match ty {
            ColumnType::Bool => 80.0,
            ColumnType::Number => 100.0,
            ColumnType::Date => 120.0,
            ColumnType::String => 120.0,
        };
        min = min.max(floor);
    }
    min
}

/// Share of the container a type may occupy at most.
#[must_use]
pub const fn max_container_share(ty: ColumnType) -> f64 {
    match ty {
        ColumnType::Bool => 0.10,
        ColumnType::Number => 0.15,
        ColumnType::Date => 0.20,
        ColumnType::String => 0.40,
    }
}

/// Maximum width for a type: the smaller of the percentage-of-container cap
/// and the absolute per-breakpoint cap.
#[must_use]
pub fn max_width(ty: ColumnType, bp: Breakpoint, container_width: f64) -> f64 {
    let table = match ty {
        ColumnType::Bool => &MAX_BOOL,
        ColumnType::Number => &MAX_NUMBER,
        ColumnType::Date => &MAX_DATE,
        ColumnType::String => &MAX_STRING,
    };
    let percentage_max = container_width * max_container_share(ty);
    percentage_max.min(table[bp.index()])
}

/// Body font size in pixels at a breakpoint.
#[must_use]
pub const fn font_size(bp: Breakpoint) -> f64 {
    match bp {
        Breakpoint::Xs => 11.0,
        Breakpoint::Sm => 12.0,
        Breakpoint::Md => 13.0,
        Breakpoint::Lg | Breakpoint::Xl => 14.0,
    }
}

/// Header font at a breakpoint (semibold).
#[must_use]
pub const fn header_font(bp: Breakpoint) -> FontSpec {
    FontSpec {
        weight: 600,
        size_px: font_size(bp),
    }
}

/// Body font at a breakpoint (regular weight).
#[must_use]
pub const fn body_font(bp: Breakpoint) -> FontSpec {
    FontSpec {
        weight: 400,
        size_px: font_size(bp),
    }
}
