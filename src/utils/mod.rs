pub mod errors;
pub mod logging;
pub mod ratelimit;
pub mod signing;

pub use errors::summarize_body;
pub use logging::init_tracing;
pub use ratelimit::pause;
pub use signing::sign_request;
