use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student's hand-in for one assignment; one row per (user, assignment).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignment_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: String,
    pub assignment_id: i64,

    pub content: Option<String>,
    /// Opaque reference into object storage.
    pub file_url: Option<String>,
    pub submitted_at: DateTime<Utc>,

    /// 0-100 once the course's instructor has graded.
    pub grade: Option<i32>,
    pub feedback: Option<String>,
    pub graded_at: Option<DateTime<Utc>>,
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
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id",
        on_delete = "Cascade"
    )]
    Assignment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        user_id: &str,
        assignment_id: i64,
        content: Option<&str>,
        file_url: Option<&str>,
    ) -> Result<Model, DbErr> {
        let submission = ActiveModel {
            user_id: Set(user_id.to_owned()),
            assignment_id: Set(assignment_id),
            content: Set(content.map(str::to_owned)),
            file_url: Set(file_url.map(str::to_owned)),
            submitted_at: Set(Utc::now()),
            grade: Set(None),
            feedback: Set(None),
            graded_at: Set(None),
            ..Default::default()
        };

        submission.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_user_and_assignment(
        db: &DbConn,
        user_id: &str,
        assignment_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::AssignmentId.eq(assignment_id))
            .one(db)
            .await
    }

    pub async fn get_by_assignment(db: &DbConn, assignment_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_desc(Column::SubmittedAt)
            .all(db)
            .await
    }

    /// Records the instructor's verdict and stamps `graded_at`.
    pub async fn set_grade(
        db: &DbConn,
        id: i64,
        grade: i32,
        feedback: Option<&str>,
    ) -> Result<Model, DbErr> {
        let submission = ActiveModel {
            id: Set(id),
            grade: Set(Some(grade)),
            feedback: Set(feedback.map(str::to_owned)),
            graded_at: Set(Some(Utc::now())),
            ..Default::default()
        };

        submission.update(db).await
    }
}
