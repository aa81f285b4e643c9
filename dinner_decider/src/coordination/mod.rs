mod errors;
mod maps;
mod oauth2;

pub use errors::CoordinationError;
pub use maps::list_maps_core;
pub use oauth2::{
    clear_state_cookie_core, handle_callback_core, logout_core, render_callback_body,
    start_login_core,
};
