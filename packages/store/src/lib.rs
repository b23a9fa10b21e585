//! Client-side state for the FairPadel web app: domain models, configuration,
//! session persistence and the UI state machines. Nothing here depends on
//! Dioxus, so all of it is unit-tested on native targets.

pub mod banner;
pub mod cities;
pub mod config;
pub mod guard;
pub mod inscription;
pub mod models;
pub mod payment;
pub mod preferences;
pub mod proof;
pub mod session;
pub mod ui_state;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::ClientConfig;
pub use guard::{authorize, GuardDecision};
pub use session::{Session, SessionState, SessionStore};
pub use ui_state::{ModalKind, Toast, ToastKind, UiState};
