use serde::{Deserialize, Serialize};

/// The subset of a People API `Person` requested with
/// `personFields=emailAddresses,names`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonProfile {
    #[serde(default)]
    pub names: Vec<PersonName>,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub metadata: FieldMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EmailAddress {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub metadata: FieldMetadata,
}

/// Per-field metadata attached by the People API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldMetadata {
    #[serde(default)]
    pub primary: bool,
}

impl PersonProfile {
    /// The address marked primary, else the first one listed.
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses
            .iter()
            .find(|e| e.metadata.primary)
            .or_else(|| self.email_addresses.first())
            .map(|e| e.value.as_str())
    }

    /// The name marked primary, else the first one listed.
    pub fn display_name(&self) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.metadata.primary)
            .or_else(|| self.names.first())
            .map(|n| n.display_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
}

/// Response body of `/maps`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileList {
    pub files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FileListPage {
    #[serde(default)]
    pub(super) files: Vec<DriveFile>,
    pub(super) next_page_token: Option<String>,
}
