pub mod middleware;
pub mod request_id;

pub use middleware::{admin_auth_middleware, AdminUser};
pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};
