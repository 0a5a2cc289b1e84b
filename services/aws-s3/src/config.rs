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

use bucketsign_core::utils::Redact;
use bucketsign_core::{Context, Error, Result};

use crate::constants::*;
use crate::{Credential, Region};

/// Config carries all the configuration for s3 operations.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// Trace every exchange, also enabled by env value [`BUCKETSIGN_DEBUG`].
    pub debug: bool,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set debug
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Load config from env, keeping every value already set.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AWS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx
            .env_var(AWS_REGION)
            .or_else(|| ctx.env_var(AWS_DEFAULT_REGION))
        {
            self.region.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BUCKETSIGN_DEBUG) {
            self.debug |= matches!(v.to_lowercase().as_str(), "on" | "true" | "1");
        }

        self
    }

    /// Build a credential from the configured key pair.
    pub fn credential(&self) -> Result<Credential> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(ak), Some(sk)) if !ak.is_empty() && !sk.is_empty() => {
                Ok(Credential::new(ak.as_str(), sk.as_str()))
            }
            _ => Err(Error::config_invalid(
                "access_key_id and secret_access_key are required",
            )),
        }
    }

    /// Resolve the configured region.
    pub fn region(&self) -> Result<Region> {
        self.region
            .as_deref()
            .ok_or_else(|| Error::config_invalid("region is required"))?
            .parse()
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("region", &self.region)
            .field("debug", &self.debug)
            .finish()
    }
}
