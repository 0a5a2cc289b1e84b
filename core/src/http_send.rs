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

use crate::Body;
use anyhow::Result;
use bytes::Bytes;
use std::fmt::Debug;

/// HttpSend performs one blocking HTTP exchange.
///
/// Implementations own everything below the request: connection setup, TLS,
/// DNS, timeouts and redirect following. The whole response body is returned
/// buffered in memory.
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    fn http_send(&self, req: http::Request<Body>) -> Result<http::Response<Bytes>>;
}
