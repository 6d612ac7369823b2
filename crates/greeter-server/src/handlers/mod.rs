//! HTTP route handlers for the greeter server.

use greeter_core::say_hello;

/// Root endpoint: responds with the fixed greeting.
pub async fn root() -> &'static str {
    say_hello()
}
