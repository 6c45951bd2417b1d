pub mod auth;

pub use auth::{authorize_admin, jwt_auth_middleware, AuthUser};
