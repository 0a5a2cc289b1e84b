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

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bucketsign_core::{Body, Context, Error, Result};
use bytes::Bytes;
use http::Method;
use log::info;

use crate::constants::X_AMZ_ACL;
use crate::error_response::describe_failure;
use crate::sign_request::sign_request;
use crate::{Acl, Bucket, Credential};

/// Client runs object operations against s3.
///
/// Every operation is one blocking exchange: the request is signed, sent
/// through the [`Context`]'s http client, and its outcome is mapped to a
/// result. Nothing is retried.
///
/// Transport failures and non-success statuses are reported as
/// [`ErrorKind::InvalidFile`](bucketsign_core::ErrorKind::InvalidFile).
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    debug: bool,
}

impl Client {
    /// Create a new client sending requests through `ctx`.
    pub fn new(ctx: Context) -> Self {
        Self { ctx, debug: false }
    }

    /// Trace every exchange at `info` level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Delete object `name` from `bucket`.
    pub fn delete_object(
        &self,
        name: &str,
        content_type: &str,
        bucket: &Bucket,
        access: &mut Credential,
    ) -> Result<()> {
        let parts = sign_request(access, Method::DELETE, bucket, name, content_type, &[])?;
        self.send(parts, Body::Empty)?;
        Ok(())
    }

    /// Download object `name` from `bucket`, buffering the whole content.
    pub fn download_object(
        &self,
        name: &str,
        content_type: &str,
        bucket: &Bucket,
        access: &mut Credential,
    ) -> Result<Bytes> {
        let parts = sign_request(access, Method::GET, bucket, name, content_type, &[])?;
        self.send(parts, Body::Empty)
    }

    /// Upload the file at `file_path` as object `name`.
    ///
    /// Missing, unreadable and empty files are rejected before anything is
    /// signed or sent.
    pub fn upload_object(
        &self,
        file_path: impl AsRef<Path>,
        content_type: &str,
        name: &str,
        bucket: &Bucket,
        acl: Acl,
        access: &mut Credential,
    ) -> Result<()> {
        let file_path = file_path.as_ref();
        let size = match std::fs::metadata(file_path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => meta.len(),
            Ok(_) => {
                return Err(Error::invalid_file(format!(
                    "{} is empty or not a regular file",
                    file_path.display()
                )))
            }
            Err(err) => {
                return Err(Error::invalid_file(format!(
                    "failed to stat {}",
                    file_path.display()
                ))
                .with_source(err))
            }
        };
        let file = File::open(file_path).map_err(|err| {
            Error::invalid_file(format!("failed to open {}", file_path.display())).with_source(err)
        })?;

        self.put_object(
            Body::from_reader(BufReader::new(file), size),
            content_type,
            name,
            bucket,
            acl,
            access,
        )
    }

    /// Upload `body` as object `name`.
    ///
    /// The transport declares the body's length as the request content length.
    pub fn put_object(
        &self,
        body: Body,
        content_type: &str,
        name: &str,
        bucket: &Bucket,
        acl: Acl,
        access: &mut Credential,
    ) -> Result<()> {
        let mut headers = Vec::with_capacity(1);
        if let Some(v) = acl.header_value() {
            headers.push((X_AMZ_ACL.to_string(), v.to_string()));
        }

        let parts = sign_request(access, Method::PUT, bucket, name, content_type, &headers)?;
        self.send(parts, body)?;
        Ok(())
    }

    fn send(&self, parts: http::request::Parts, body: Body) -> Result<Bytes> {
        let method = parts.method.clone();
        let uri = parts.uri.clone();

        let resp = self
            .ctx
            .http_send(http::Request::from_parts(parts, body))
            .map_err(|err| {
                Error::invalid_file(format!("{method} {uri} failed in transport")).with_source(err)
            })?;

        let status = resp.status();
        if self.debug {
            info!("{method} {uri} -> {status}");
        }

        let body = resp.into_body();
        if !status.is_success() {
            return Err(Error::invalid_file(format!(
                "{method} {uri}: {}",
                describe_failure(status, &body)
            )));
        }

        Ok(body)
    }
}
