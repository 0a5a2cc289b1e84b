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

//! Blocking reqwest based HTTP sending implementation for bucketsign.
//!
//! ## Example
//!
//! ```no_run
//! use bucketsign_core::Context;
//! use bucketsign_http_send_reqwest::ReqwestHttpSend;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! ```

use bucketsign_core::{Body, HttpSend};
use bytes::Bytes;
use log::debug;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

/// Max redirects to follow before giving up.
const MAX_REDIRECTS: usize = 10;

/// [`HttpSend`] implementation backed by [`reqwest::blocking::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::blocking::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a ReqwestHttpSend whose client traces connection level
    /// reads and writes when `verbose` is set.
    pub fn verbose(verbose: bool) -> reqwest::Result<Self> {
        let client = Client::builder()
            .connection_verbose(verbose)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

impl HttpSend for ReqwestHttpSend {
    fn http_send(&self, req: http::Request<Body>) -> anyhow::Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        debug!("sending {} {}", parts.method, parts.uri);

        let mut builder = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers);
        builder = match body {
            Body::Empty => builder,
            Body::Bytes(bs) => builder.body(bs),
            Body::Reader { reader, length } => {
                builder.body(reqwest::blocking::Body::sized(reader, length))
            }
        };

        let resp = builder.send()?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes()?;

        let mut http_resp = http::Response::builder().status(status);
        for (name, value) in headers.iter() {
            http_resp = http_resp.header(name, value);
        }

        Ok(http_resp.body(body)?)
    }
}
