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

use std::env;

use anyhow::Result;
use bucketsign_aws_s3::{Acl, Bucket, Client, Config};
use bucketsign_core::{Context, OsEnv};
use bucketsign_http_send_reqwest::ReqwestHttpSend;

fn main() -> Result<()> {
    env_logger::init();

    // Usage: s3_operations <bucket> <local file> <object name>
    let args: Vec<String> = env::args().collect();
    let [_, bucket, file, name] = args.as_slice() else {
        eprintln!("usage: s3_operations <bucket> <local file> <object name>");
        std::process::exit(2);
    };

    // Credentials and region come from AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY
    // and AWS_REGION.
    let env_ctx = Context::new().with_env(OsEnv);
    let config = Config::new().from_env(&env_ctx);

    let ctx = env_ctx.with_http_send(ReqwestHttpSend::verbose(config.debug)?);
    let client = Client::new(ctx).with_debug(config.debug);

    let bucket = Bucket::new(bucket.as_str(), config.region()?);
    let mut access = config.credential()?;
    println!("Using {:?} on {}", access, bucket.host());

    client.upload_object(file, "application/octet-stream", name, &bucket, Acl::Default, &mut access)?;
    println!("Uploaded {file} as {name}");

    let content = client.download_object(name, "application/octet-stream", &bucket, &mut access)?;
    println!("Downloaded {} bytes", content.len());

    client.delete_object(name, "application/octet-stream", &bucket, &mut access)?;
    println!("Deleted {name}");

    Ok(())
}
