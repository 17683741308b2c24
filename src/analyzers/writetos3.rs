use serde::Serialize;

use crate::output::gzip;

/// Serializes a value to JSON and uploads it to an S3 bucket with `application/json` content type.
///
/// With `compress` set the body is gzip-encoded and tagged `Content-Encoding: gzip`.
pub async fn write_json_to_s3(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    value: &impl Serialize,
    compress: bool,
) -> anyhow::Result<()> {
    let body = serde_json::to_vec(value)?;

    let request = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/json");

    let request = if compress {
        request.body(gzip(&body)?.into()).content_encoding("gzip")
    } else {
        request.body(body.into())
    };

    request.send().await?;

    tracing::debug!(bucket, key, compress, "Uploaded JSON to S3");
    Ok(())
}
