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

//! Time related utils.

use crate::Error;
use crate::Result;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into http date: `Tue, 27 Mar 2007 19:36:42 +0000`
///
/// Day and month names are always English abbreviations, whatever the
/// locale of the running process.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Parse an RFC 2822 date such as `Tue, 27 Mar 2007 19:36:42 +0000`.
pub fn parse_http_date(s: &str) -> Result<DateTime> {
    let v = chrono::DateTime::parse_from_rfc2822(s)
        .map_err(|e| Error::unexpected(format!("invalid http date: {s}")).with_source(e))?;
    Ok(v.with_timezone(&Utc))
}
