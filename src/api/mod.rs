pub mod handlers;
pub mod routes;
pub mod state;
pub mod upload;

pub use routes::configure_routes;
pub use state::{AppState, SessionCaches};
