pub mod config;
pub mod error;
pub mod id;
pub mod session;
pub mod tolerance;
pub mod traits;

pub use config::Config;
pub use error::{NurbsError, Result};
pub use id::ComponentId;
pub use session::KernelSession;
pub use tolerance::Tolerance;
