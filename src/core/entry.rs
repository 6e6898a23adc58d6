use serde::{Deserialize, Serialize};

/// One learnable item: a visible label and the URL it links to.
///
/// Matches the JSON objects served by the list endpoint. Unknown fields are
/// ignored and neither field is validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub url: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}
