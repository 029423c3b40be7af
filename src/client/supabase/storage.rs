//! Storage API endpoints.

use entity::backend::StoreError;
use url::Url;

use super::http::{HttpRequest, Method};

fn object_url(base_url: &str, prefix: &[&str], bucket: &str, path: &str) -> Result<Url, StoreError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| StoreError::Transport(format!("Invalid base URL {}: {}", base_url, e)))?;

    url.path_segments_mut()
        .map_err(|_| StoreError::Transport(format!("Base URL {} cannot hold a path", base_url)))?
        .pop_if_empty()
        .extend(["storage", "v1", "object"])
        .extend(prefix)
        .push(bucket)
        .extend(path.split('/').filter(|segment| !segment.is_empty()));

    Ok(url)
}

/// Upload request storing `bytes` under `path` of `bucket`.
pub fn upload_request(
    base_url: &str,
    bucket: &str,
    path: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<HttpRequest, StoreError> {
    let url = object_url(base_url, &[], bucket, path)?;

    Ok(HttpRequest::new(Method::Post, url).bytes(content_type, bytes))
}

/// Public URL of an object of a public bucket.
pub fn public_object_url(base_url: &str, bucket: &str, path: &str) -> Result<Url, StoreError> {
    object_url(base_url, &["public"], bucket, path)
}

#[cfg(test)]
mod tests {
    use super::{public_object_url, upload_request};
    use crate::client::supabase::http::{Body, Method};

    const BASE: &str = "https://project.supabase.co";

    /// Expect public URLs to compose bucket and relative path
    #[test]
    fn composes_public_url() {
        let url = public_object_url(BASE, "event-images", "1717581600000-poster.png").unwrap();

        assert_eq!(
            url.as_str(),
            "https://project.supabase.co/storage/v1/object/public/event-images/1717581600000-poster.png"
        );
    }

    /// Expect path segments to be percent-encoded but slashes kept
    #[test]
    fn encodes_path_segments() {
        let url = public_object_url(BASE, "event-images", "2025/my poster.png").unwrap();

        assert_eq!(
            url.path(),
            "/storage/v1/object/public/event-images/2025/my%20poster.png"
        );
    }

    /// Expect uploads to send the raw bytes with their content type
    #[test]
    fn upload_sends_bytes() {
        let request =
            upload_request(BASE, "event-images", "1-poster.png", "image/png", vec![1, 2, 3]).unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.path(), "/storage/v1/object/event-images/1-poster.png");
        assert_eq!(request.header_value("Content-Type"), Some("image/png"));
        assert_eq!(request.body, Some(Body::Bytes(vec![1, 2, 3])));
    }
}
