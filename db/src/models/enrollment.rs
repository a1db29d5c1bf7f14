use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student's participation in one course.
///
/// `progress_percentage` is a cached projection over `lesson_progress`; it is
/// only ever written by a full recompute, never nudged arithmetically.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: String,
    pub course_id: i64,

    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress_percentage: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, user_id: &str, course_id: i64) -> Result<Model, DbErr> {
        let enrollment = ActiveModel {
            user_id: Set(user_id.to_owned()),
            course_id: Set(course_id),
            enrolled_at: Set(Utc::now()),
            completed_at: Set(None),
            progress_percentage: Set(0),
            ..Default::default()
        };

        enrollment.insert(db).await
    }

    pub async fn find_by_user_and_course(
        db: &DbConn,
        user_id: &str,
        course_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(db)
            .await
    }

    pub async fn get_by_user(db: &DbConn, user_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::EnrolledAt)
            .all(db)
            .await
    }

    pub async fn get_by_course(db: &DbConn, course_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::EnrolledAt)
            .all(db)
            .await
    }

    /// Stores a freshly recomputed percentage together with the completion
    /// stamp the recompute decided on.
    pub async fn set_progress(
        db: &DbConn,
        id: i64,
        progress_percentage: i32,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Model, DbErr> {
        let enrollment = ActiveModel {
            id: Set(id),
            progress_percentage: Set(progress_percentage),
            completed_at: Set(completed_at),
            ..Default::default()
        };

        enrollment.update(db).await
    }
}
