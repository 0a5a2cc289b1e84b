// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use bytes::Bytes;
use std::fmt::{Debug, Formatter};
use std::io::Read;

/// Body is the payload attached to an outgoing request.
///
/// A reader body always carries its total length so the transport can
/// declare `Content-Length` up front instead of buffering the payload.
#[derive(Default)]
pub enum Body {
    /// No payload.
    #[default]
    Empty,
    /// A payload that is already in memory.
    Bytes(Bytes),
    /// A payload pulled from a reader, with exactly `length` bytes.
    Reader {
        /// Source of the payload.
        reader: Box<dyn Read + Send>,
        /// Total number of bytes the reader will yield.
        length: u64,
    },
}

impl Body {
    /// Create a reader body of `length` bytes.
    pub fn from_reader(reader: impl Read + Send + 'static, length: u64) -> Self {
        Body::Reader {
            reader: Box::new(reader),
            length,
        }
    }

    /// The declared length of this body.
    pub fn len(&self) -> u64 {
        match self {
            Body::Empty => 0,
            Body::Bytes(bs) => bs.len() as u64,
            Body::Reader { length, .. } => *length,
        }
    }

    /// Check if this body declares no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the body into memory.
    ///
    /// Mostly useful for transports that can't stream, and for tests. The
    /// buffer grows with what the reader yields, never with the declared
    /// length.
    pub fn into_bytes(self) -> std::io::Result<Bytes> {
        match self {
            Body::Empty => Ok(Bytes::new()),
            Body::Bytes(bs) => Ok(bs),
            Body::Reader { reader, length } => {
                let mut buf = Vec::new();
                reader.take(length).read_to_end(&mut buf)?;
                Ok(buf.into())
            }
        }
    }
}

impl From<Bytes> for Body {
    fn from(bs: Bytes) -> Self {
        Body::Bytes(bs)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bs: Vec<u8>) -> Self {
        Body::Bytes(bs.into())
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Body::Bytes(Bytes::from_static(s.as_bytes()))
    }
}

impl Debug for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Empty => f.write_str("Body::Empty"),
            Body::Bytes(bs) => f.debug_tuple("Body::Bytes").field(&bs.len()).finish(),
            Body::Reader { length, .. } => f
                .debug_struct("Body::Reader")
                .field("length", length)
                .finish_non_exhaustive(),
        }
    }
}
