/// Record identifiers are assigned by the repository, monotonic from 1.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (joining, scheduled inactivation) carry no time of day.
pub type Date = chrono::NaiveDate;
