pub mod analysis;
pub mod session_store;

pub use analysis::AnalysisService;
pub use session_store::{InMemorySessionStore, SessionInfo, SessionLimits, SessionStore};
