//! Interactive search screen
//!
//! A ratatui front end over [`SearchController`](crate::controller::SearchController).
//! Key presses edit the query state; whenever the controller issues a request
//! it runs as a local task and its outcome is fed back on arrival, so a slow
//! response never blocks typing and a stale one is dropped by the controller.
//!
//! ```text
//! ┌ Search ───────────────────────────────────────────┐
//! ├ Source ──────────────┬ Sort ──────────────────────┤
//! ├ Tags ────┬ Results ───────────────────────────────┤
//! │ [x] ros2 │ ros2-nav  [GitHub]                     │
//! │ [ ] lidar│ Navigation stack                       │
//! ├ Status ──┴────────────────────────────────────────┤
//! └ hints                                             ┘
//! ```

mod app;
mod error;
mod events;
mod state;
mod tag_filter;
mod theme;
pub mod widgets;

pub use app::SearchApp;
pub use error::{Result, UiError};
pub use events::EventResult;
pub use state::{AppState, Focus, Mode};
pub use theme::Theme;
