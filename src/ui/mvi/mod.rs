//! Model-View-Intent (MVI) primitives shared by every page component.
//!
//! ```text
//! PageEvent ──→ Intent ──→ Reducer ──→ State ──→ Effects
//!     ↑                                            │
//!     └──────────── Scheduler / Presenter ─────────┘
//! ```
//!
//! - **State**: plain data describing one component (carousel, lightbox, ...)
//! - **Intent**: a user action or a completed wait (timer tick, image load)
//! - **Reducer**: pure `(State, Intent) -> State`; timers and presentation
//!   changes are derived by the page controller by comparing states

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
