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

//! AWS S3 support with convenience APIs

pub use bucketsign_aws_s3::*;

#[cfg(feature = "default-context")]
use bucketsign_core::{Context, Error, OsEnv, Result};
#[cfg(feature = "default-context")]
use bucketsign_http_send_reqwest::ReqwestHttpSend;

/// Create a client configured from the process environment.
///
/// The returned [`Config`] carries the credential and region for the
/// caller to build its [`Credential`] and [`Bucket`]s. When debug is
/// enabled, both the exchange trace and the transport's connection level
/// tracing are turned on.
///
/// # Example
///
/// ```no_run
/// # fn main() -> bucketsign_core::Result<()> {
/// use bucketsign::aws::{default_client, Bucket};
///
/// let (client, config) = default_client()?;
/// let bucket = Bucket::new("my-bucket", config.region()?);
/// let mut access = config.credential()?;
/// client.delete_object("stale.txt", "text/plain", &bucket, &mut access)?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client() -> Result<(Client, Config)> {
    let ctx = Context::new().with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    log::debug!("loaded config: {config:?}");

    let http = ReqwestHttpSend::verbose(config.debug)
        .map_err(|e| Error::unexpected("failed to build http client").with_source(e))?;
    let client = Client::new(ctx.with_http_send(http)).with_debug(config.debug);

    Ok((client, config))
}
