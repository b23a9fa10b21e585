//! `/social`: follows and direct messages.

use serde::Serialize;
use store::models::{Conversation, Message, PlayerSummary};

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct NewMessage<'a> {
    contenido: &'a str,
}

/// `POST /social/seguir/{userId}`
pub async fn follow(api: &ApiClient, user_id: i64) -> Result<(), ApiError> {
    api.post_empty(&format!("/social/seguir/{user_id}")).await
}

/// `DELETE /social/seguir/{userId}`
pub async fn unfollow(api: &ApiClient, user_id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/social/seguir/{user_id}")).await
}

/// `GET /social/seguidos`
pub async fn following(api: &ApiClient) -> Result<Vec<PlayerSummary>, ApiError> {
    api.get("/social/seguidos").await
}

/// `GET /social/conversaciones`
pub async fn conversations(api: &ApiClient) -> Result<Vec<Conversation>, ApiError> {
    api.get("/social/conversaciones").await
}

/// `GET /social/conversaciones/{id}/mensajes`
pub async fn messages(api: &ApiClient, conversation_id: i64) -> Result<Vec<Message>, ApiError> {
    api.get(&format!("/social/conversaciones/{conversation_id}/mensajes")).await
}

/// `POST /social/mensajes/{userId}`
pub async fn send_message(api: &ApiClient, user_id: i64, contenido: &str) -> Result<Message, ApiError> {
    api.post(&format!("/social/mensajes/{user_id}"), &NewMessage { contenido }).await
}
