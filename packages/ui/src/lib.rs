//! Shared UI for the FairPadel web app: context providers, the route guard
//! and the interactive widgets (enrollment and payment dialogs, preference
//! toggles, city autocomplete, banner zones).
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`SessionProvider`] | Restores the session and provides the [`api::ApiClient`] context |
//! | [`UiProvider`] | Toasts and app-wide modal state |
//! | [`RouteGuard`] | Redirects anonymous users to login and users lacking a role home |
//! | [`InscriptionModal`] / [`PaymentModal`] | Enrollment and payment dialogs |
//! | [`NotificationPreferences`] | Optimistic email/SMS toggles |
//! | [`CityAutocomplete`] | City field with keyboard-navigable suggestions |
//! | [`BannerArea`] | Rotating ad zone with impression and click tracking |

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const FAIRPADEL_CSS: Asset = asset!("/assets/fairpadel.css");

pub mod browser;

mod session;
pub use session::{
    handle_unauthorized, make_session_store, sign_in, sign_out, use_api, use_config, use_session,
    SessionProvider,
};

mod feedback;
pub use feedback::{toast, use_ui, UiProvider};

mod guard;
pub use guard::RouteGuard;

mod error_fallback;
pub use error_fallback::ErrorFallback;

mod navbar;
pub use navbar::Navbar;

mod inscription_modal;
pub use inscription_modal::{format_guaranies, InscriptionModal};

mod payment_modal;
pub use payment_modal::PaymentModal;

mod preferences;
pub use preferences::NotificationPreferences;

mod city_autocomplete;
pub use city_autocomplete::CityAutocomplete;

mod banners;
pub use banners::BannerArea;
