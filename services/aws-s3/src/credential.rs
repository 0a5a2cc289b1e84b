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

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex};

use bucketsign_core::hash::base64_hmac_sha1;
use bucketsign_core::time::{format_http_date, now, DateTime};
use bucketsign_core::utils::Redact;
use bucketsign_core::Result;

/// Credential holds the access key pair and the timestamp of the request
/// being signed.
///
/// The timestamp is rewritten before every signed operation, so a single
/// credential must not be shared by concurrent operations without external
/// locking. Use [`SharedCredential`] when that is needed.
#[derive(Clone)]
pub struct Credential {
    /// Access key id for s3.
    pub access_key_id: String,
    /// Secret access key for s3.
    pub secret_access_key: String,
    timestamp: String,
}

impl Credential {
    /// Create a new credential stamped with the current time.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        let mut cred = Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            timestamp: String::new(),
        };
        cred.refresh_timestamp();
        cred
    }

    /// The http date used by the latest signing operation.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Overwrite the timestamp with now.
    pub fn refresh_timestamp(&mut self) {
        self.refresh_timestamp_at(now());
    }

    /// Overwrite the timestamp with the given time.
    ///
    /// # Note
    ///
    /// Requests should always be signed with the current time. Only use this
    /// function for testing.
    pub fn refresh_timestamp_at(&mut self, time: DateTime) {
        self.timestamp = format_http_date(time);
    }

    /// Base64 encoded HMAC-SHA1 of `message` keyed by the secret access key.
    pub fn sign(&self, message: &str) -> Result<String> {
        base64_hmac_sha1(self.secret_access_key.as_bytes(), message.as_bytes())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

/// SharedCredential lets several threads sign with one key pair.
///
/// Refreshing the timestamp and signing happen under one lock, so a request
/// never carries a `Date` header that differs from the signed one.
#[derive(Clone, Debug)]
pub struct SharedCredential {
    inner: Arc<Mutex<Credential>>,
}

impl SharedCredential {
    /// Wrap a credential for shared use.
    pub fn new(cred: Credential) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cred)),
        }
    }

    /// Run `f` with exclusive access to the credential.
    pub fn with<R>(&self, f: impl FnOnce(&mut Credential) -> R) -> R {
        let mut cred = self.inner.lock().expect("lock poisoned");
        f(&mut cred)
    }
}

impl From<Credential> for SharedCredential {
    fn from(cred: Credential) -> Self {
        Self::new(cred)
    }
}
