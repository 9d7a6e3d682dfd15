//! Request handlers.

/// The greeting returned by the root route.
pub const GREETING: &str = "Hello, World!";

/// Handler for `GET /`.
///
/// Consults nothing from the request and has no side effects; every call
/// returns the identical response with implicit status 200.
pub async fn greeting() -> &'static str {
    GREETING
}
