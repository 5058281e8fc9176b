//! 时间工具函数 (order timestamps)
//!
//! History lines carry the C-locale `ctime` text (`Thu Oct  3 09:05:07 2024`).
//! The sortable epoch value is re-derived from that text at parse time.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Fixed `ctime` layout used for every stored order time
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Source of "now" for checkout stamping
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Local wall-clock time; `None` if it does not exist in this timezone
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .earliest()
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Local time → `ctime` text, no trailing newline
pub fn format_ctime(at: DateTime<Local>) -> String {
    at.format(CTIME_FORMAT).to_string()
}

/// `ctime` text → Unix seconds (local timezone)
///
/// Trailing `\r`/`\n` are ignored. DST gap fallback: 如果本地时间不存在，按 UTC 解释。
pub fn parse_ctime(raw: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), CTIME_FORMAT).ok()?;
    Some(
        naive
            .and_local_timezone(Local)
            .earliest()
            .map(|dt| dt.timestamp())
            .unwrap_or_else(|| naive.and_utc().timestamp()),
    )
}

/// Receipt header layout: `2024-10-3 9:5:7`
pub fn format_receipt_datetime(at: DateTime<Local>) -> String {
    at.format("%Y-%-m-%-d %-H:%-M:%-S").to_string()
}
