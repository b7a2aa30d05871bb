pub mod export;
pub mod provider;
pub mod session;

pub use provider::{ProviderClient, ProviderError};
pub use session::{Session, SessionStore, SharedSessionStore};
