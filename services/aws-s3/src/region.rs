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

use std::fmt;
use std::str::FromStr;

use bucketsign_core::Error;

/// Region is one of the S3 deployments this crate knows how to reach.
///
/// The set is closed: every variant maps to exactly one region id and one
/// endpoint host suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// us-east-1
    UsEast1,
    /// us-east-2
    UsEast2,
    /// us-west-1
    UsWest1,
    /// us-west-2
    UsWest2,
    /// eu-west-1
    EuWest1,
    /// eu-central-1
    EuCentral1,
    /// ap-south-1
    ApSouth1,
    /// ap-southeast-1
    ApSoutheast1,
    /// ap-southeast-2
    ApSoutheast2,
    /// ap-northeast-1
    ApNortheast1,
    /// ap-northeast-2
    ApNortheast2,
    /// sa-east-1
    SaEast1,
}

/// (region, id, endpoint)
const REGIONS: [(Region, &str, &str); 12] = [
    (Region::UsEast1, "us-east-1", "s3.amazonaws.com"),
    (Region::UsEast2, "us-east-2", "s3.us-east-2.amazonaws.com"),
    (Region::UsWest1, "us-west-1", "s3-us-west-1.amazonaws.com"),
    (Region::UsWest2, "us-west-2", "s3-us-west-2.amazonaws.com"),
    (Region::EuWest1, "eu-west-1", "s3-eu-west-1.amazonaws.com"),
    (Region::EuCentral1, "eu-central-1", "s3.eu-central-1.amazonaws.com"),
    (Region::ApSouth1, "ap-south-1", "s3.ap-south-1.amazonaws.com"),
    (Region::ApSoutheast1, "ap-southeast-1", "s3-ap-southeast-1.amazonaws.com"),
    (Region::ApSoutheast2, "ap-southeast-2", "s3-ap-southeast-2.amazonaws.com"),
    (Region::ApNortheast1, "ap-northeast-1", "s3-ap-northeast-1.amazonaws.com"),
    (Region::ApNortheast2, "ap-northeast-2", "s3.ap-northeast-2.amazonaws.com"),
    (Region::SaEast1, "sa-east-1", "s3-sa-east-1.amazonaws.com"),
];

impl Region {
    /// All known regions.
    pub const ALL: [Region; 12] = [
        Region::UsEast1,
        Region::UsEast2,
        Region::UsWest1,
        Region::UsWest2,
        Region::EuWest1,
        Region::EuCentral1,
        Region::ApSouth1,
        Region::ApSoutheast1,
        Region::ApSoutheast2,
        Region::ApNortheast1,
        Region::ApNortheast2,
        Region::SaEast1,
    ];

    fn entry(self) -> (Region, &'static str, &'static str) {
        REGIONS[self as usize]
    }

    /// Region id, for example `us-east-1`.
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Endpoint host suffix, for example `s3-us-west-1.amazonaws.com`.
    pub fn endpoint(self) -> &'static str {
        self.entry().2
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGIONS
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(region, _, _)| *region)
            .ok_or_else(|| Error::config_invalid(format!("unknown region: {s}")))
    }
}
