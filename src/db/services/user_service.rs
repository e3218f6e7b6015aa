use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;

use crate::db::entities::{prelude::User, user};

/// The id/username pair backing the owner select on the admin survey form.
#[derive(FromQueryResult, Debug, Clone, Serialize)]
pub struct UserOption {
    pub id: i32,
    pub username: String,
}

pub async fn find_by_id(db: &DbConn, user_id: i32) -> Result<Option<user::Model>, DbErr> {
    User::find_by_id(user_id).one(db).await
}

pub async fn find_by_username(db: &DbConn, username: &str) -> Result<Option<user::Model>, DbErr> {
    User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
}

/// All users, reduced to what the owner select widget needs.
pub async fn options(db: &DbConn) -> Result<Vec<UserOption>, DbErr> {
    User::find()
        .select_only()
        .column(user::Column::Id)
        .column(user::Column::Username)
        .order_by_asc(user::Column::Username)
        .into_model::<UserOption>()
        .all(db)
        .await
}
