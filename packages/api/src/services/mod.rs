//! One module per REST resource. Every function is a single HTTP call.

pub mod admin;
pub mod auth;
pub mod banners;
pub mod categorias;
pub mod circuitos;
pub mod inscripciones;
pub mod matches;
pub mod notifications;
pub mod rankings;
pub mod social;
pub mod subscriptions;
pub mod tournaments;
pub mod users;
