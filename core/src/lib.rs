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

//! Core components for signing and sending object storage requests.
//!
//! This crate provides the foundational types shared by the bucketsign
//! workspace. It carries no service specific logic.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Body**: The payload of an outgoing request, either in memory or pulled from a reader of known length
//! - **Error**: A single error type with a closed set of [`ErrorKind`]s
//!
//! ## Traits
//!
//! - [`HttpSend`]: For performing one blocking HTTP exchange
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`time`]: Date formatting used in signed requests
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod body;
pub use body::Body;
mod context;
pub use context::{Context, NoopEnv, NoopHttpSend};
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod http_send;
pub use http_send::HttpSend;
