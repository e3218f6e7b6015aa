use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::db::entities::survey::{ButtonPosition, PopupType, SurveyKind};
use crate::db::entities::{prelude::Survey, survey, user};
use crate::web::models::survey_models::SurveyPayload;

pub struct SurveyService;

impl SurveyService {
    /// All surveys with their owning user resolved. Admin list view only.
    pub async fn list_all(
        db: &DbConn,
    ) -> Result<Vec<(survey::Model, Option<user::Model>)>, DbErr> {
        Survey::find()
            .find_also_related(user::Entity)
            .order_by_asc(survey::Column::Id)
            .all(db)
            .await
    }

    /// Surveys owned by a single user. Non-admin list view.
    pub async fn list_owned_by(db: &DbConn, user_id: i32) -> Result<Vec<survey::Model>, DbErr> {
        Survey::find()
            .filter(survey::Column::UserId.eq(user_id))
            .order_by_asc(survey::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(db: &DbConn, survey_id: i32) -> Result<Option<survey::Model>, DbErr> {
        Survey::find_by_id(survey_id).one(db).await
    }

    pub async fn create(
        db: &DbConn,
        owner_id: i32,
        data: SurveyPayload,
    ) -> Result<survey::Model, DbErr> {
        let now = chrono::Utc::now();
        let new_survey = survey::ActiveModel {
            user_id: Set(owner_id),
            name: Set(data.name),
            url: Set(data.url),
            survey_url: Set(data.survey_url),
            kind: Set(data.kind.unwrap_or(SurveyKind::Iframe)),
            template_id: Set(data.template_id),
            is_enable: Set(data.is_enable.unwrap_or(false)),
            variables: Set(data.variables.unwrap_or_default()),
            button_text: Set(data.button_text),
            button_color: Set(data.button_color),
            button_bg_color: Set(data.button_bg_color),
            button_position: Set(data.button_position.unwrap_or(ButtonPosition::BottomRight)),
            show_when_hover_id: Set(data.show_when_hover_id),
            max_show_on_hover_times: Set(data.max_show_on_hover_times),
            popup_timeout: Set(data.popup_timeout),
            close_after_submit: Set(data.close_after_submit),
            header_img_url: Set(data.header_img_url),
            close_btn_title: Set(data.close_btn_title.unwrap_or_else(|| "Close".to_string())),
            popup_type: Set(data.popup_type.unwrap_or(PopupType::Modal)),
            backdrop_opacity: Set(data.backdrop_opacity.unwrap_or_else(|| "1".to_string())),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        new_survey.insert(db).await
    }

    /// Full-field update. The caller has already been authorized against
    /// `existing` and the owner is never changed here (`resolve_owner`
    /// decides it at the handler level).
    pub async fn update(
        db: &DbConn,
        existing: survey::Model,
        owner_id: i32,
        data: SurveyPayload,
    ) -> Result<survey::Model, DbErr> {
        let mut active: survey::ActiveModel = existing.into();
        active.user_id = Set(owner_id);
        active.name = Set(data.name);
        active.url = Set(data.url);
        active.survey_url = Set(data.survey_url);
        active.kind = Set(data.kind.unwrap_or(SurveyKind::Iframe));
        active.template_id = Set(data.template_id);
        active.is_enable = Set(data.is_enable.unwrap_or(false));
        active.variables = Set(data.variables.unwrap_or_default());
        active.button_text = Set(data.button_text);
        active.button_color = Set(data.button_color);
        active.button_bg_color = Set(data.button_bg_color);
        active.button_position = Set(data.button_position.unwrap_or(ButtonPosition::BottomRight));
        active.show_when_hover_id = Set(data.show_when_hover_id);
        active.max_show_on_hover_times = Set(data.max_show_on_hover_times);
        active.popup_timeout = Set(data.popup_timeout);
        active.close_after_submit = Set(data.close_after_submit);
        active.header_img_url = Set(data.header_img_url);
        active.close_btn_title = Set(data.close_btn_title.unwrap_or_else(|| "Close".to_string()));
        active.popup_type = Set(data.popup_type.unwrap_or(PopupType::Modal));
        active.backdrop_opacity = Set(data.backdrop_opacity.unwrap_or_else(|| "1".to_string()));
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(db).await
    }

    pub async fn delete(db: &DbConn, existing: survey::Model) -> Result<(), DbErr> {
        existing.delete(db).await?;
        Ok(())
    }
}
