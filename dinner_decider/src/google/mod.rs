mod config;
mod drive;
mod errors;
mod people;
mod types;

pub use config::GoogleApiConfig;
pub use errors::GoogleApiError;
pub use types::{DriveFile, EmailAddress, FieldMetadata, FileList, PersonName, PersonProfile};

pub(crate) use drive::list_map_files;
pub(crate) use people::fetch_profile;
