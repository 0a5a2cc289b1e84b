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

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use bucketsign_aws_s3::{Bucket, CanonicalRequest, Credential, Region};
use bucketsign_core::{Body, HttpSend};
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use percent_encoding::percent_decode_str;

/// How the mock service should fail.
#[derive(Debug, Clone, Copy)]
pub enum Fail {
    /// The exchange never completes.
    Transport,
    /// The service answers with this status.
    Status(StatusCode),
}

/// A request as seen by the mock service.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body_len: u64,
}

/// In memory s3 that checks signatures the way the real service does.
#[derive(Debug, Clone)]
pub struct MockS3 {
    secret: String,
    objects: Arc<Mutex<HashMap<String, Bytes>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    fail: Arc<Mutex<Option<Fail>>>,
}

impl MockS3 {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
            objects: Arc::default(),
            requests: Arc::default(),
            fail: Arc::default(),
        }
    }

    pub fn fail_with(&self, fail: Option<Fail>) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn object(&self, key: &str) -> Option<Bytes> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    /// The object key of a request, decoded from its uri path.
    fn key(req: &http::Request<Body>) -> String {
        percent_decode_str(req.uri().path().trim_start_matches('/'))
            .decode_utf8_lossy()
            .into_owned()
    }

    fn verify(&self, req: &http::Request<Body>) -> bool {
        let headers = req.headers();
        let value = |name: &str| {
            headers
                .get(name)
                .map(|v| v.to_str().unwrap().to_string())
                .unwrap_or_default()
        };

        let host = value("host");
        let bucket_name = host.split('.').next().unwrap_or_default();
        let amz_headers: Vec<(String, String)> = headers
            .iter()
            .filter(|(k, _)| k.as_str().starts_with("x-amz-"))
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap().to_string()))
            .collect();

        let canonical = CanonicalRequest::new(
            req.method().clone(),
            &Bucket::new(bucket_name, Region::UsEast1),
            &Self::key(req),
            &value("content-type"),
            &value("date"),
            &amz_headers,
        );
        let server = Credential::new("server", self.secret.as_str());
        let expected = server
            .sign(&canonical.string_to_sign().unwrap())
            .unwrap();

        value("authorization")
            .rsplit_once(':')
            .map(|(_, signature)| signature == expected)
            .unwrap_or(false)
    }
}

fn respond(status: StatusCode, body: impl Into<Bytes>) -> anyhow::Result<http::Response<Bytes>> {
    Ok(http::Response::builder().status(status).body(body.into())?)
}

fn error_document(code: &str) -> String {
    format!("<Error><Code>{code}</Code><Message>{code}</Message><RequestId>MOCK</RequestId></Error>")
}

impl HttpSend for MockS3 {
    fn http_send(&self, req: http::Request<Body>) -> anyhow::Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(Recorded {
            method: req.method().clone(),
            uri: req.uri().to_string(),
            headers: req.headers().clone(),
            body_len: req.body().len(),
        });

        match *self.fail.lock().unwrap() {
            Some(Fail::Transport) => return Err(anyhow!("connection reset by peer")),
            Some(Fail::Status(status)) => return respond(status, error_document("InternalError")),
            None => {}
        }

        if !self.verify(&req) {
            return respond(StatusCode::FORBIDDEN, error_document("SignatureDoesNotMatch"));
        }

        let key = Self::key(&req);
        let method = req.method().clone();
        let mut objects = self.objects.lock().unwrap();
        match method {
            Method::PUT => {
                let content = req.into_body().into_bytes()?;
                objects.insert(key, content);
                respond(StatusCode::OK, Bytes::new())
            }
            Method::GET => match objects.get(&key) {
                Some(content) => respond(StatusCode::OK, content.clone()),
                None => respond(StatusCode::NOT_FOUND, error_document("NoSuchKey")),
            },
            Method::DELETE => {
                objects.remove(&key);
                respond(StatusCode::NO_CONTENT, Bytes::new())
            }
            _ => respond(StatusCode::METHOD_NOT_ALLOWED, Bytes::new()),
        }
    }
}
