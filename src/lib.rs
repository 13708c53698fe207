//! # almanac
//!
//! Pure Gregorian calendar arithmetic: periods, shift schedules, and
//! weekday searches.
//!
//! Every function is a stateless transformation of its arguments. Date
//! values are `chrono` types and are never mutated; calendar steps build
//! new values. Instant-based functions are generic over
//! [`chrono::TimeZone`] — pass a `DateTime<Local>` for host-local
//! behavior, `DateTime<Utc>` for reproducible output. Textual output is
//! pinned to `en-US` conventions.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["zoned instant"] -->|"epoch_millis()"| B["i64 ms"]
//!     B -->|"from_epoch_millis()"| A
//!     A -->|"time_of_day() / format_date_time()"| C["en-US strings"]
//!     D["NaiveDate"] -->|"next_weekday() / next_friday_the_13th()"| D
//!     D -->|"shift_days()"| E["Vec of NaiveDate"]
//!     F["DD-MM-YYYY strings"] -->|"work_schedule()"| F
//!     G["Period"] -->|".contains() / .day_count()"| H["bool / i64"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac::{next_friday, quarter, work_schedule, ShiftCycle};
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! assert_eq!(next_friday(day), NaiveDate::from_ymd_opt(2023, 1, 6).unwrap());
//! assert_eq!(quarter(day), 1);
//!
//! let cycle = ShiftCycle { days_on: 2, days_off: 2 };
//! let schedule = work_schedule("01-01-2023", "07-01-2023", cycle).unwrap();
//! assert_eq!(schedule, ["01-01-2023", "02-01-2023", "05-01-2023", "06-01-2023"]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `timestamp` | Epoch-millisecond conversions |
//! | `format` | Fixed-locale formatting and parsing |
//! | `period` | Inclusive date ranges and day spans |
//! | `month` | Month lengths, weekend counts, quarters |
//! | `week` | ISO-8601 week numbers |
//! | `year` | Gregorian leap-year rule |
//! | `friday` | Forward weekday and Friday-the-13th searches |
//! | `schedule` | Rotating work-shift schedules |
//! | `error` | Error types |

mod error;
mod format;
mod friday;
mod month;
mod period;
mod schedule;
mod timestamp;
mod week;
mod year;

pub use error::CalendarError;
pub use format::{
    day_name, format_date_time, format_day_first, parse_date_time, parse_day_first, time_of_day,
    DAY_FIRST_FORMAT,
};
pub use friday::{next_friday, next_friday_the_13th, next_weekday, FRIDAY_13TH_SEARCH_MONTHS};
pub use month::{days_in_month, quarter, weekend_days_in_month};
pub use period::{days_spanned, Period};
pub use schedule::{shift_days, work_schedule, ShiftCycle};
pub use timestamp::{epoch_millis, from_epoch_millis};
pub use week::iso_week_number;
pub use year::is_leap_year;
