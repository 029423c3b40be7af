//! Image references of events to displayable URLs.

use crate::client::{config::Config, supabase::storage};

/// Resolves the stored image reference of an event to an `src` value.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageResolver {
    base_url: String,
    bucket: String,
    placeholder: String,
}

impl ImageResolver {
    /// Resolver for the configured project and bucket.
    ///
    /// `default_placeholder` is used unless the configuration overrides the placeholder.
    pub fn new(config: &Config, default_placeholder: &str) -> Self {
        Self {
            base_url: config.supabase_url.clone(),
            bucket: config.image_bucket.clone(),
            placeholder: config
                .placeholder_image
                .clone()
                .unwrap_or_else(|| default_placeholder.to_string()),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// - absent or blank: the placeholder
    /// - `http://` or `https://`: used as-is
    /// - anything else: a path in the image bucket
    pub fn resolve(&self, image: Option<&str>) -> String {
        let Some(image) = image.map(str::trim).filter(|image| !image.is_empty()) else {
            return self.placeholder.clone();
        };

        if image.starts_with("http://") || image.starts_with("https://") {
            return image.to_string();
        }

        storage::public_object_url(&self.base_url, &self.bucket, image)
            .map(String::from)
            .unwrap_or_else(|_| self.placeholder.clone())
    }
}
