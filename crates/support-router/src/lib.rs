//! Turn-based intent router with slot-filling and cross-turn state merge
//!
//! The router processes one turn to completion: classify the utterance,
//! merge the result into the session state, dispatch to the branch the
//! intent selects, and render the user-visible reply. Classification
//! failures never escape a turn; they degrade to a re-prompt on the general
//! branch.
//!
//! # Example
//!
//! ```rust,ignore
//! use support_router::{KeywordClassifier, Router};
//! use support_core::SessionState;
//! use support_tools::{BillingDesk, TechnicalDesk};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = Router::new(
//!         Arc::new(KeywordClassifier::new()),
//!         Arc::new(BillingDesk::new()),
//!         Arc::new(TechnicalDesk::new()),
//!     );
//!
//!     let mut state = SessionState::new();
//!     let reply = router.turn(&mut state, "My internet is down").await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

pub mod dispatch;
pub mod keyword;
pub mod merge;
pub mod session;

pub use dispatch::{DEFAULT_GREETING, RouteDecision, Router, route};
pub use keyword::KeywordClassifier;
pub use merge::merge;
pub use session::{InMemoryStore, Session, SessionManager, SessionStore};
