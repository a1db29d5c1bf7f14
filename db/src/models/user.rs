use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
///
/// The primary key is the subject id issued by the external identity provider;
/// this service never mints user ids of its own.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Unique email address, the stable lookup key on login sync.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Platform-wide role, derived from the identity provider's role list on login.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "student")]
    Student,

    #[sea_orm(string_value = "instructor")]
    Instructor,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Course,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,

    #[sea_orm(has_many = "super::lesson_progress::Entity")]
    LessonProgress,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Synchronizes a local user record from identity-provider claims.
    ///
    /// Looks the user up by email: an existing record keeps its id and gets its
    /// name and role refreshed; otherwise a new record is inserted under the
    /// provider-issued id.
    pub async fn upsert(
        db: &DbConn,
        id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: Role,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        if let Some(existing) = Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await?
        {
            let user = ActiveModel {
                id: Set(existing.id.clone()),
                first_name: Set(first_name.to_owned()),
                last_name: Set(last_name.to_owned()),
                role: Set(role),
                updated_at: Set(now),
                ..Default::default()
            };
            return user.update(db).await;
        }

        let user = ActiveModel {
            id: Set(id.to_owned()),
            email: Set(email.to_owned()),
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            profile_image_url: Set(None),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
        };

        user.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }
}
