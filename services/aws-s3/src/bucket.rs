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

use crate::Region;

/// Bucket is a named storage container living in one region.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bucket {
    name: String,
    region: Region,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(name: impl Into<String>, region: Region) -> Self {
        Self {
            name: name.into(),
            region,
        }
    }

    /// Name of this bucket.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region of this bucket.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Virtual hosted style host: `{name}.{region endpoint}`.
    pub fn host(&self) -> String {
        format!("{}.{}", self.name, self.region.endpoint())
    }
}
