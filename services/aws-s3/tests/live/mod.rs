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
use std::io::Write;

use bucketsign_aws_s3::{Acl, Bucket, Client, Config, Credential};
use bucketsign_core::{Context, ErrorKind, OsEnv, Result};
use bucketsign_http_send_reqwest::ReqwestHttpSend;
use log::warn;

fn init_client() -> Option<(Client, Bucket, Credential)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("BUCKETSIGN_AWS_S3_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);

    let bucket = Bucket::new(
        env::var("BUCKETSIGN_AWS_S3_BUCKET").expect("env BUCKETSIGN_AWS_S3_BUCKET must set"),
        config.region().expect("env AWS_REGION must set"),
    );
    let access = config
        .credential()
        .expect("env AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must set");
    let client = Client::new(ctx).with_debug(config.debug);

    Some((client, bucket, access))
}

#[test]
fn test_live_object_lifecycle() -> Result<()> {
    let Some((client, bucket, mut access)) = init_client() else {
        warn!("BUCKETSIGN_AWS_S3_TEST is not set, skipped");
        return Ok(());
    };

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"Hello, World!")?;
    file.flush()?;

    let name = "bucketsign-test/hello.txt";
    client.upload_object(file.path(), "text/plain", name, &bucket, Acl::Default, &mut access)?;

    let content = client.download_object(name, "text/plain", &bucket, &mut access)?;
    assert_eq!(content.as_ref(), b"Hello, World!");

    client.delete_object(name, "text/plain", &bucket, &mut access)?;
    Ok(())
}

#[test]
fn test_live_download_not_exist() -> Result<()> {
    let Some((client, bucket, mut access)) = init_client() else {
        warn!("BUCKETSIGN_AWS_S3_TEST is not set, skipped");
        return Ok(());
    };

    let err = client
        .download_object("bucketsign-test/not_exist_file", "", &bucket, &mut access)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFile);
    Ok(())
}
