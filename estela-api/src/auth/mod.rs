mod backend;
mod extractor;
mod router;

pub use backend::{AuthBackend, AuthSession};
pub use extractor::AuthUser;
pub use router::router;
