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

/// Acl is the canned visibility applied to an uploaded object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Acl {
    /// Keep the bucket's default, no `x-amz-acl` header is sent.
    #[default]
    Default,
    /// Objects readable by everyone.
    PublicRead,
}

impl Acl {
    /// Value of the `x-amz-acl` header, `None` if the header must be omitted.
    pub fn header_value(self) -> Option<&'static str> {
        match self {
            Acl::Default => None,
            Acl::PublicRead => Some("public-read"),
        }
    }
}
