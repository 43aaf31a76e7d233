use serde::{Deserialize, Serialize};

use super::domain::EntryId;

/// Opaque encoded file produced by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    #[serde(default)]
    pub id: EntryId,
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
    /// Encoded payload, never inspected by the workflow.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlReference {
    #[serde(default)]
    pub id: EntryId,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Proof bundle attached to an entry. A bundle with no files and no URLs is never stored;
/// see [`Evidence::bundle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default)]
    pub files: Vec<FileAttachment>,
    #[serde(default)]
    pub urls: Vec<UrlReference>,
}

impl Evidence {
    /// Build a bundle, collapsing an empty one to `None`.
    pub fn bundle(files: Vec<FileAttachment>, urls: Vec<UrlReference>) -> Option<Self> {
        Self { files, urls }.into_present()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.urls.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.files.len() + self.urls.len()
    }

    pub fn into_present(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// Collapse an attached-but-empty bundle in place.
pub(crate) fn normalize(slot: &mut Option<Evidence>) {
    if slot.as_ref().is_some_and(Evidence::is_empty) {
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bundle_collapses_to_none() {
        assert!(Evidence::bundle(Vec::new(), Vec::new()).is_none());

        let mut slot = Some(Evidence::default());
        normalize(&mut slot);
        assert!(slot.is_none());
    }

    #[test]
    fn bundle_with_urls_only_is_kept() {
        let evidence = Evidence::bundle(
            Vec::new(),
            vec![UrlReference {
                id: EntryId::generate(),
                url: "https://example.org/press".to_string(),
                description: None,
            }],
        )
        .expect("bundle present");
        assert_eq!(evidence.item_count(), 1);
    }
}
