use entity::{comment, user};

/// A comment joined with its author's profile.
///
/// `author` is `None` when the comment has no author reference or the profile could not
/// be resolved; renderers fall back to a generic label.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentView {
    pub comment: comment::Model,
    pub author: Option<user::Model>,
}

impl CommentView {
    /// Display name of the author, if it resolved to a non-blank name.
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .map(|author| author.name.trim())
            .filter(|name| !name.is_empty())
    }
}
