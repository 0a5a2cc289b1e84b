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

//! Hash related utils.

use crate::Error;
use crate::Result;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// HMAC with SHA1 hash.
pub fn hmac_sha1(key: &[u8], content: &[u8]) -> Result<Vec<u8>> {
    let mut h = Hmac::<Sha1>::new_from_slice(key)
        .map_err(|e| Error::signing_failure("failed to initialize hmac-sha1").with_source(e))?;
    h.update(content);

    Ok(h.finalize().into_bytes().to_vec())
}

/// Base64 encoded HMAC with SHA1 hash.
///
/// Never returns an empty string: a digest that can't be computed is
/// reported as [`ErrorKind::SigningFailure`](crate::ErrorKind::SigningFailure).
pub fn base64_hmac_sha1(key: &[u8], content: &[u8]) -> Result<String> {
    Ok(base64_encode(&hmac_sha1(key, content)?))
}
