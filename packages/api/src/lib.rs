//! # API crate: typed client for the FairPadel REST backend
//!
//! Every page and provider in the web app reaches the backend through this
//! crate. It owns transport concerns only: URL building, bearer auth, JSON
//! (de)serialization, multipart uploads and turning error bodies into
//! [`ApiError`]. Business rules (brackets, rankings, promotions, payment
//! confirmation) live on the server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, token, typed `get`/`post`/`patch`/`upload` helpers |
//! | [`error`] | [`ApiError`] and server error-message extraction |
//! | [`services`] | One module per resource (`auth`, `tournaments`, `inscripciones`, `banners`, ...) |
//!
//! ## Usage
//!
//! ```ignore
//! let api = ApiClient::new(&ClientConfig::from_env()?).with_token(Some(token));
//! let open = services::tournaments::list(&api, &Default::default()).await?;
//! ```

pub mod client;
pub mod error;
pub mod services;

pub use client::{ApiClient, Upload};
pub use error::ApiError;
pub use store::models;
pub use store::ClientConfig;
