/// Display strings extracted from a disc stub's sidecar XML.
///
/// Created transiently per prompt invocation; fields missing from the
/// sidecar stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StubMetadata {
    pub title: String,
    pub message: String,
}

impl StubMetadata {
    /// The title to display, falling back to `label` when the sidecar
    /// defined none.
    pub fn display_title<'a>(&'a self, label: &'a str) -> &'a str {
        if self.title.is_empty() {
            label
        } else {
            &self.title
        }
    }
}
