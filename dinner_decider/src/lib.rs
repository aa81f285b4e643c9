//! dinner_decider - Google sign-in, profile lookup and Drive map listing
//!
//! The crate holds the request-level operations behind the dinner decider
//! web server: starting and completing the OAuth2 authorization-code flow,
//! keeping access tokens in server-side sessions, and calling the People and
//! Drive APIs on the user's behalf. The HTTP surface lives in
//! `dinner_decider_axum`.

mod config;
mod context;
mod coordination;
mod google;
mod oauth2;
mod session;
mod storage;
mod utils;

pub use config::{AppConfig, ConfigError};
pub use context::AppContext;

pub use coordination::{
    CoordinationError, clear_state_cookie_core, handle_callback_core, list_maps_core, logout_core,
    render_callback_body, start_login_core,
};

pub use google::{
    DriveFile, EmailAddress, FieldMetadata, FileList, GoogleApiConfig, GoogleApiError,
    PersonName, PersonProfile,
};
pub use oauth2::{AuthResponse, OAuth2Config, OAuth2Error, TokenResponse};
pub use session::{SessionConfig, SessionError};
pub use storage::{
    CacheData, CacheStore, InMemoryCacheStore, SharedCacheStore, StorageError,
    memory_cache_store,
};
pub use utils::{UtilError, get_client};
