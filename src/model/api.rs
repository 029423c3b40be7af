use serde::Deserialize;

/// Error body returned by the hosted services.
///
/// The row API answers with `message`, the auth API with `msg` or
/// `error`/`error_description`, the storage API with `error` and `message`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorDto {
    /// The most descriptive message present in the body.
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
            .filter(|message| !message.trim().is_empty())
    }
}
