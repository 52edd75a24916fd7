//! Scalar value marshaling

use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::MarshalError;

/// Result alias for marshaler implementations.
pub type MarshalResult<T> = std::result::Result<T, MarshalError>;

/// A scalar value that can render itself for any carrier.
///
/// `marshal_string` produces the path/query/header form; `marshal_json`
/// produces the structured-body form. The default `marshal_json` adapter
/// reuses the string form, which is right for most scalars.
pub trait ValueMarshaler {
    /// Render the value as its string wire form
    fn marshal_string(&self) -> MarshalResult<String>;

    /// Render the value as a JSON document value
    fn marshal_json(&self) -> MarshalResult<Value> {
        Ok(Value::String(self.marshal_string()?))
    }
}

impl<T: ValueMarshaler + ?Sized> ValueMarshaler for &T {
    fn marshal_string(&self) -> MarshalResult<String> {
        (**self).marshal_string()
    }

    fn marshal_json(&self) -> MarshalResult<Value> {
        (**self).marshal_json()
    }
}

impl ValueMarshaler for str {
    fn marshal_string(&self) -> MarshalResult<String> {
        Ok(self.to_string())
    }
}

impl ValueMarshaler for String {
    fn marshal_string(&self) -> MarshalResult<String> {
        Ok(self.clone())
    }
}

impl ValueMarshaler for bool {
    fn marshal_string(&self) -> MarshalResult<String> {
        Ok(self.to_string())
    }

    fn marshal_json(&self) -> MarshalResult<Value> {
        Ok(Value::Bool(*self))
    }
}

macro_rules! integer_marshaler {
    ($($ty:ty),*) => {
        $(
            impl ValueMarshaler for $ty {
                fn marshal_string(&self) -> MarshalResult<String> {
                    Ok(self.to_string())
                }

                fn marshal_json(&self) -> MarshalResult<Value> {
                    Ok(Value::from(*self))
                }
            }
        )*
    };
}

integer_marshaler!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! float_marshaler {
    ($($ty:ty),*) => {
        $(
            impl ValueMarshaler for $ty {
                fn marshal_string(&self) -> MarshalResult<String> {
                    Ok(self.to_string())
                }

                fn marshal_json(&self) -> MarshalResult<Value> {
                    serde_json::Number::from_f64(f64::from(*self))
                        .map(Value::Number)
                        .ok_or(MarshalError::NonFiniteFloat)
                }
            }
        )*
    };
}

float_marshaler!(f32, f64);

/// Blobs render as standard base64 in every carrier.
impl ValueMarshaler for Bytes {
    fn marshal_string(&self) -> MarshalResult<String> {
        Ok(general_purpose::STANDARD.encode(self))
    }
}

/// Wire encodings for timestamp values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2024-01-15T10:30:00Z`
    Rfc3339,
    /// `Mon, 15 Jan 2024 10:30:00 GMT`
    HttpDate,
    /// Seconds since the Unix epoch, as a JSON number in bodies
    EpochSeconds,
}

/// A timestamp paired with the wire format it should render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeValue {
    time: DateTime<Utc>,
    format: TimestampFormat,
}

impl TimeValue {
    #[must_use]
    pub fn new(time: DateTime<Utc>, format: TimestampFormat) -> Self {
        Self { time, format }
    }

    #[must_use]
    pub fn rfc3339(time: DateTime<Utc>) -> Self {
        Self::new(time, TimestampFormat::Rfc3339)
    }

    #[must_use]
    pub fn http_date(time: DateTime<Utc>) -> Self {
        Self::new(time, TimestampFormat::HttpDate)
    }

    #[must_use]
    pub fn epoch_seconds(time: DateTime<Utc>) -> Self {
        Self::new(time, TimestampFormat::EpochSeconds)
    }
}

impl ValueMarshaler for TimeValue {
    fn marshal_string(&self) -> MarshalResult<String> {
        let rendered = match self.format {
            TimestampFormat::Rfc3339 => self.time.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::HttpDate => {
                self.time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
            }
            TimestampFormat::EpochSeconds => self.time.timestamp().to_string(),
        };
        Ok(rendered)
    }

    fn marshal_json(&self) -> MarshalResult<Value> {
        match self.format {
            TimestampFormat::EpochSeconds => Ok(Value::from(self.time.timestamp())),
            _ => Ok(Value::String(self.marshal_string()?)),
        }
    }
}

/// Adapter marshaling any `serde::Serialize` value through `serde_json`.
pub struct Serialized<T>(pub T);

impl<T: Serialize> ValueMarshaler for Serialized<T> {
    fn marshal_string(&self) -> MarshalResult<String> {
        serde_json::to_string(&self.0).map_err(|e| MarshalError::Json(e.to_string()))
    }

    fn marshal_json(&self) -> MarshalResult<Value> {
        serde_json::to_value(&self.0).map_err(|e| MarshalError::Json(e.to_string()))
    }
}
