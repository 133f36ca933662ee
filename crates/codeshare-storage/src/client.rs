use aws_sdk_s3::Client;

/// Build an S3 client for the given region.
///
/// With `endpoint_url` set the client talks to an S3-compatible service
/// (MinIO, LocalStack, ...) using path-style addressing.
pub async fn build_client(region: &str, endpoint_url: Option<&str>) -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await;

    let mut builder = aws_sdk_s3::config::Builder::from(&config);
    if let Some(endpoint) = endpoint_url {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}
