pub mod offline;
pub mod scoring;
pub mod session;

pub use scoring::{HttpScoringClient, ScoringProvider};
pub use session::{RequestCoordinator, SessionClient, SessionSnapshot};
