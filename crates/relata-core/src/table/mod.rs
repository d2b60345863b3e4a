//! Read-only time-series table consumed by discovery.

mod time_series;

pub use time_series::TimeSeriesTable;
