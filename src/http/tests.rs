use crate::app_context::{self, AppContext};
use crate::auth;
use crate::cli::tests::fake_args;
use crate::http::router;
use crate::storage::locations::InMemoryLocationsStorage;
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    test_server_with(app_context::init(&fake_args()))
}

/// Test server over a context the test keeps a handle on, for seeding and
/// inspecting the store directly.
pub fn test_server_with(app_context: AppContext<InMemoryLocationsStorage>) -> TestServer {
    let args = fake_args();
    auth::init(&args).expect("Failed to initialize auth.");
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
