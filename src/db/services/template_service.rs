use sea_orm::{DbConn, DbErr, EntityTrait, FromQueryResult, QueryOrder, QuerySelect};
use serde::Serialize;

use crate::db::entities::{prelude::Template, template};

/// The id/name pair backing the template select on the survey form.
#[derive(FromQueryResult, Debug, Clone, Serialize)]
pub struct TemplateOption {
    pub id: i32,
    pub name: String,
}

/// All templates, reduced to what the select widget needs.
pub async fn options(db: &DbConn) -> Result<Vec<TemplateOption>, DbErr> {
    Template::find()
        .select_only()
        .column(template::Column::Id)
        .column(template::Column::Name)
        .order_by_asc(template::Column::Name)
        .into_model::<TemplateOption>()
        .all(db)
        .await
}
