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

//! Signature version 2 for s3 requests.
use std::fmt::Write;

use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE, HOST};
use http::{HeaderName, HeaderValue, Method};
use log::debug;
use percent_encoding::utf8_percent_encode;

use crate::constants::OBJECT_KEY_ENCODE_SET;
use crate::{Bucket, Credential};
use bucketsign_core::Result;

/// CanonicalRequest is the exact set of fields covered by a signature.
///
/// It only lives for one signing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// HTTP verb.
    pub method: Method,
    /// Content type declared by the request, may be empty.
    pub content_type: String,
    /// Http date also sent as the `Date` header.
    pub timestamp: String,
    /// Extension headers with lower cased names, sorted by name.
    pub headers: Vec<(String, String)>,
    /// `/{bucket}/{path}` with the path trimmed of surrounding `/`.
    pub resource: String,
}

impl CanonicalRequest {
    /// Collect the canonical fields of a request.
    pub fn new(
        method: Method,
        bucket: &Bucket,
        path: &str,
        content_type: &str,
        timestamp: &str,
        headers: &[(String, String)],
    ) -> Self {
        let mut headers: Vec<(String, String)> = headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.clone()))
            .collect();
        // Stable, so duplicated names keep the order they were given in.
        headers.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            method,
            content_type: content_type.to_string(),
            timestamp: timestamp.to_string(),
            headers,
            resource: format!("/{}/{}", bucket.name(), encode_path(path)),
        }
    }

    /// Construct string to sign
    ///
    /// ## Format
    ///
    /// ```text
    /// VERB + "\n" +
    /// Content-MD5 + "\n" +
    /// Content-Type + "\n" +
    /// Date +
    /// ("\n" + CanonicalizedHeader)* +
    /// "\n" + CanonicalizedResource
    /// ```
    ///
    /// Content-MD5 is never sent, its line stays empty.
    pub fn string_to_sign(&self) -> Result<String> {
        let mut s = String::new();
        write!(
            &mut s,
            "{}\n\n{}\n{}",
            self.method, self.content_type, self.timestamp
        )?;
        for (name, value) in &self.headers {
            write!(&mut s, "\n{name}:{value}")?;
        }
        write!(&mut s, "\n{}", self.resource)?;

        Ok(s)
    }
}

/// Strip every leading and trailing `/` from an object path.
pub fn trim_path(path: &str) -> &str {
    path.trim_matches('/')
}

fn encode_path(path: &str) -> String {
    utf8_percent_encode(trim_path(path), &OBJECT_KEY_ENCODE_SET).to_string()
}

/// Build a signed request for `path` inside `bucket`.
///
/// The credential's timestamp is refreshed first so the signed date and the
/// `Date` header are the same string. Extension headers go on the wire in
/// the order given, after `Host`, `Date`, `Content-Type` and `Authorization`.
///
/// The returned parts carry no body; the caller attaches one.
pub fn sign_request(
    access: &mut Credential,
    method: Method,
    bucket: &Bucket,
    path: &str,
    content_type: &str,
    headers: &[(String, String)],
) -> Result<http::request::Parts> {
    access.refresh_timestamp();

    let canonical = CanonicalRequest::new(
        method.clone(),
        bucket,
        path,
        content_type,
        access.timestamp(),
        headers,
    );
    let string_to_sign = canonical.string_to_sign()?;
    debug!("string to sign: {:?}", &string_to_sign);
    let signature = access.sign(&string_to_sign)?;

    let host = bucket.host();
    let url = format!("https://{host}/{}", encode_path(path));
    debug!("signed url: {url}");

    let (mut parts, _) = http::Request::builder()
        .method(method)
        .uri(url)
        .body(())?
        .into_parts();

    let hs = &mut parts.headers;
    hs.insert(HOST, HeaderValue::from_str(&host)?);
    hs.insert(DATE, HeaderValue::from_str(access.timestamp())?);
    // An empty content type is signed as an empty line and not sent at all.
    if !content_type.is_empty() {
        hs.insert(CONTENT_TYPE, HeaderValue::from_str(content_type)?);
    }
    hs.insert(AUTHORIZATION, {
        let mut value =
            HeaderValue::from_str(&format!("AWS {}:{}", access.access_key_id, signature))?;
        value.set_sensitive(true);

        value
    });
    for (name, value) in headers {
        hs.append(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }

    Ok(parts)
}
