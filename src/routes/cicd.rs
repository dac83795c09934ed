//! Deployment verification endpoint.

use crate::config::CICD_BODY;

/// CI/CD probe handler.
///
/// Returns a fixed plain-text body so a deployment pipeline can confirm the
/// newly rolled-out process is serving traffic.
pub async fn cicd_test() -> &'static str {
    CICD_BODY
}
