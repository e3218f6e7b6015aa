use sea_orm::{FromJsonQueryResult, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text", enum_name = "survey_kind_enum")]
#[serde(rename_all = "lowercase")]
pub enum SurveyKind {
    #[sea_orm(string_value = "iframe")]
    Iframe,
    #[sea_orm(string_value = "template")]
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    rs_type = "String",
    db_type = "Text",
    enum_name = "button_position_enum"
)]
#[serde(rename_all = "snake_case")]
pub enum ButtonPosition {
    #[sea_orm(string_value = "top_left")]
    TopLeft,
    #[sea_orm(string_value = "top_right")]
    TopRight,
    #[sea_orm(string_value = "bottom_left")]
    BottomLeft,
    #[sea_orm(string_value = "bottom_right")]
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text", enum_name = "popup_type_enum")]
#[serde(rename_all = "snake_case")]
pub enum PopupType {
    #[sea_orm(string_value = "modal")]
    Modal,
    #[sea_orm(string_value = "slide_in")]
    SlideIn,
}

/// One user-defined key/description pair shown in the survey form's
/// editable variables table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyVariable {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SurveyVariables(pub Vec<SurveyVariable>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "surveys")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub url: String,
    pub survey_url: Option<String>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: SurveyKind,
    pub template_id: Option<i32>,
    pub is_enable: bool,
    #[sea_orm(column_type = "Json")]
    pub variables: SurveyVariables,
    pub button_text: Option<String>,
    pub button_color: Option<String>,
    pub button_bg_color: Option<String>,
    pub button_position: ButtonPosition,
    pub show_when_hover_id: Option<String>,
    pub max_show_on_hover_times: Option<i32>,
    pub popup_timeout: Option<i32>,
    pub close_after_submit: Option<i32>,
    pub header_img_url: Option<String>,
    pub close_btn_title: String,
    pub popup_type: PopupType,
    pub backdrop_opacity: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::template::Entity",
        from = "Column::TemplateId",
        to = "super::template::Column::Id",
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    Template,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
