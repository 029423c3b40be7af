//! Constant values shared by every test backend.
//!
//! None of these point at a real project; they only have to be stable so that URLs
//! composed in tests can be compared literally.

/// Base URL of the fake hosted project.
pub static TEST_SUPABASE_URL: &str = "https://test-project.supabase.co";

/// Anon API key of the fake hosted project.
pub static TEST_ANON_KEY: &str = "test-anon-key";

/// Storage bucket event images are uploaded to.
pub static TEST_IMAGE_BUCKET: &str = "event-images";

/// Placeholder image used when an event has no image.
pub static TEST_PLACEHOLDER_IMAGE: &str = "/assets/event-placeholder.svg";

/// Password given to accounts registered through fixtures.
pub static TEST_PASSWORD: &str = "correct horse battery staple";
