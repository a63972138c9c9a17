//! User entity <-> model mapper

use park_core::entities::{Role, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            name: model.name,
            // An unrecognized role column degrades to least privilege
            role: Role::parse(&model.role).unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}
