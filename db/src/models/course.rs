use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: Option<String>,
    pub instructor_id: String,
    pub thumbnail_url: Option<String>,
    pub status: Status,
    pub category: Option<String>,
    pub level: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Publication lifecycle of a course. Draft courses are visible only to their
/// owner; archived courses stay readable but refuse new enrollments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "course_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,

    #[sea_orm(string_value = "published")]
    Published,

    #[sea_orm(string_value = "archived")]
    Archived,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InstructorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Instructor,

    #[sea_orm(has_many = "super::module::Entity")]
    Module,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,

    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        instructor_id: &str,
        title: &str,
        description: Option<&str>,
        thumbnail_url: Option<&str>,
        category: Option<&str>,
        level: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let course = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.map(str::to_owned)),
            instructor_id: Set(instructor_id.to_owned()),
            thumbnail_url: Set(thumbnail_url.map(str::to_owned)),
            status: Set(Status::Draft),
            category: Set(category.map(str::to_owned)),
            level: Set(level.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        course.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Public catalog listing: published courses, newest first.
    pub async fn get_published(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Status.eq(Status::Published))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn get_by_instructor(db: &DbConn, instructor_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::InstructorId.eq(instructor_id))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    /// Applies a partial edit. `None` fields are left untouched.
    pub async fn edit(
        db: &DbConn,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        thumbnail_url: Option<&str>,
        status: Option<Status>,
        category: Option<&str>,
        level: Option<&str>,
    ) -> Result<Model, DbErr> {
        let mut course = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(title) = title {
            course.title = Set(title.to_owned());
        }
        if let Some(description) = description {
            course.description = Set(Some(description.to_owned()));
        }
        if let Some(thumbnail_url) = thumbnail_url {
            course.thumbnail_url = Set(Some(thumbnail_url.to_owned()));
        }
        if let Some(status) = status {
            course.status = Set(status);
        }
        if let Some(category) = category {
            course.category = Set(Some(category.to_owned()));
        }
        if let Some(level) = level {
            course.level = Set(Some(level.to_owned()));
        }

        course.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
