//! # mrulauncher engine
//!
//! Core of a most-recently-used command launcher: a recency-ordered store of
//! command names and a one-line input bar that completes against it.
//!
//! ## Architecture
//!
//! ```text
//! key events (display layer)
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Session    │  LogicalKey → Outcome
//! └──────┬───────┘
//!        │
//!   ┌────┴─────┐
//!   ▼          ▼
//! ┌──────┐  ┌───────────────┐
//! │ Bar  │  │ CommandStore  │  promote / reconcile
//! └──┬───┘  └──────┬────────┘
//!    │             │
//!    ▼             ▼
//! BarLayout     StoreFile (one name per line)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mru_engine::{LauncherConfig, LogicalKey, Outcome, Session};
//!
//! let mut session = Session::open(LauncherConfig::default());
//! session.handle_key(LogicalKey::Char(b'v'));
//! session.handle_key(LogicalKey::Cycle);
//! if let Outcome::Launch(plan) = session.handle_key(LogicalKey::Commit) {
//!     return Err(plan.exec());
//! }
//! ```

pub mod bar;
pub mod config;
pub mod diagnostic;
pub mod keys;
pub mod launch;
pub mod layout;
pub mod session;
pub mod store;

pub use bar::Bar;
pub use config::LauncherConfig;
pub use diagnostic::LauncherError;
pub use keys::LogicalKey;
pub use launch::LaunchPlan;
pub use layout::BarLayout;
pub use session::{Outcome, Session};
pub use store::{CommandStore, ReconcileReport, StoreFile};
