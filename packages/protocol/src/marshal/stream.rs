//! Raw payload stream marshaling

use std::io::{Cursor, Read};

use bytes::Bytes;

use super::value::MarshalResult;

/// The raw payload body handed back at assembly time.
pub type PayloadReader = Box<dyn Read + Send>;

/// A producer of raw payload bytes.
///
/// Stream values are always carried as the raw request payload; they never
/// become structured-body fields.
pub trait StreamMarshaler {
    /// Produce the reader the transport will consume
    fn marshal_stream(&self) -> MarshalResult<PayloadReader>;
}

impl<T: StreamMarshaler + ?Sized> StreamMarshaler for &T {
    fn marshal_stream(&self) -> MarshalResult<PayloadReader> {
        (**self).marshal_stream()
    }
}

impl StreamMarshaler for Bytes {
    fn marshal_stream(&self) -> MarshalResult<PayloadReader> {
        Ok(Box::new(Cursor::new(self.clone())))
    }
}

impl StreamMarshaler for Vec<u8> {
    fn marshal_stream(&self) -> MarshalResult<PayloadReader> {
        Ok(Box::new(Cursor::new(self.clone())))
    }
}
