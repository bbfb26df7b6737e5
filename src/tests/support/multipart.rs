use uuid::Uuid;

const BOUNDARY: &str = "----portfolio-test-boundary";

/// Builds a `multipart/form-data` body with one `file` part and an
/// optional `project_id` text part. Returns `(content_type, body)`.
pub fn multipart_body(
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
    project_id: Option<Uuid>,
) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    if let Some(id) = project_id {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"project_id\"\r\n\r\n{id}\r\n"
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
