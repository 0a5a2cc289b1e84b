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
use quick_xml::de;
use serde::Deserialize;

/// Error document returned by s3 for failed requests.
///
/// ```xml
/// <Error>
///   <Code>NoSuchKey</Code>
///   <Message>The resource you requested does not exist</Message>
///   <Resource>/mybucket/myfoto.jpg</Resource>
///   <RequestId>4442587FB7D0A2F9</RequestId>
/// </Error>
/// ```
#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub resource: String,
    pub request_id: String,
}

/// Describe a failed response for error messages.
///
/// Falls back to the status line if the body is not an s3 error document.
pub(crate) fn describe_failure(status: http::StatusCode, body: &Bytes) -> String {
    let parsed = std::str::from_utf8(body)
        .ok()
        .and_then(|s| de::from_str::<ErrorResponse>(s).ok())
        .filter(|resp| !resp.code.is_empty());

    match parsed {
        Some(resp) => format!(
            "service responded {status}: {} ({}), request id: {}",
            resp.code, resp.message, resp.request_id
        ),
        None => format!("service responded {status}"),
    }
}
