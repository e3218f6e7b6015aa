//! SeaORM entities mapping the admin panel's database tables.
//!
//! Each entity lives in its own module (`survey.rs`, `template.rs`,
//! `user.rs`).

pub mod survey;
pub mod template;
pub mod user;

// Prelude module for easy importing of all entities and their related types
pub mod prelude {
    pub use super::survey::ActiveModel as SurveyActiveModel;
    pub use super::survey::Column as SurveyColumn;
    pub use super::survey::Entity as Survey;
    pub use super::survey::Model as SurveyModel;

    pub use super::template::ActiveModel as TemplateActiveModel;
    pub use super::template::Column as TemplateColumn;
    pub use super::template::Entity as Template;
    pub use super::template::Model as TemplateModel;

    pub use super::user::ActiveModel as UserActiveModel;
    pub use super::user::Column as UserColumn;
    pub use super::user::Entity as User;
    pub use super::user::Model as UserModel;
}
