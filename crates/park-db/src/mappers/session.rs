//! Session entity <-> model mapper

use park_core::entities::Session;

use crate::models::SessionModel;

impl From<SessionModel> for Session {
    fn from(model: SessionModel) -> Self {
        Session {
            user_id: model.user_id,
            refresh_token: model.refresh_token,
            created_at: model.created_at,
        }
    }
}
