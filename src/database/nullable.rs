use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

/// Column value paired with a validity flag, the shape nullable SQL columns
/// are bound and read with. `value` holds `T::default()` when not valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

pub type NullInt64 = Nullable<i64>;
pub type NullString = Nullable<String>;
pub type NullTime = Nullable<DateTime<Utc>>;

impl<T> Nullable<T> {
    pub fn present(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T: Default> Nullable<T> {
    pub fn absent() -> Self {
        Self {
            value: T::default(),
            valid: false,
        }
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        wrap_nullable(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

pub fn wrap_nullable<T: Default>(value: Option<T>) -> Nullable<T> {
    match value {
        Some(v) => Nullable::present(v),
        None => Nullable::absent(),
    }
}

pub fn null_int64(value: Option<i64>) -> NullInt64 {
    wrap_nullable(value)
}

pub fn null_string(value: Option<&str>) -> NullString {
    wrap_nullable(value.map(str::to_owned))
}

pub fn null_time(value: Option<DateTime<Utc>>) -> NullTime {
    wrap_nullable(value)
}

/// Lifts an owned value into its own optional slot.
pub fn to_optional<T>(value: T) -> Option<T> {
    Some(value)
}

impl<T: ToSql> ToSql for Nullable<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        if self.valid {
            self.value.to_sql()
        } else {
            Ok(ToSqlOutput::Owned(Value::Null))
        }
    }
}

impl<T: FromSql + Default> FromSql for Nullable<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Nullable::absent()),
            other => T::column_result(other).map(Nullable::present),
        }
    }
}
