//! cloud-ready - a minimal cloud-ready HTTP service.
//!
//! Exposes four stateless endpoints: a liveness probe (/health), a static
//! informational payload (/info), a JSON echo (/echo), and a deployment
//! verification probe (/cicd-test).

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
