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

//! Signing and object operations for AWS S3 with signature version 2.
//!
//! ## Example
//!
//! ```no_run
//! use bucketsign_aws_s3::{Acl, Bucket, Client, Credential, Region};
//! use bucketsign_core::Context;
//! use bucketsign_http_send_reqwest::ReqwestHttpSend;
//!
//! # fn main() -> bucketsign_core::Result<()> {
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! let client = Client::new(ctx);
//!
//! let mut access = Credential::new("access_key_id", "secret_access_key");
//! let bucket = Bucket::new("my-bucket", Region::EuWest1);
//!
//! client.upload_object("hello.txt", "text/plain", "docs/hello.txt", &bucket, Acl::PublicRead, &mut access)?;
//! let content = client.download_object("docs/hello.txt", "text/plain", &bucket, &mut access)?;
//! client.delete_object("docs/hello.txt", "text/plain", &bucket, &mut access)?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::X_AMZ_ACL;

mod acl;
pub use acl::Acl;
mod bucket;
pub use bucket::Bucket;
mod region;
pub use region::Region;

mod config;
pub use config::Config;
mod credential;
pub use credential::{Credential, SharedCredential};

mod sign_request;
pub use sign_request::{sign_request, trim_path, CanonicalRequest};

mod client;
pub use client::Client;
mod error_response;
