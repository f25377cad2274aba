pub mod auth;
pub mod rate_limit;
pub mod request_id;

pub use auth::{hash_session_token, require_editor, require_user, AuthUser, SessionAuth};
pub use rate_limit::RateLimiter;
pub use request_id::RequestId;
