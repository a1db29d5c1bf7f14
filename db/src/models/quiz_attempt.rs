use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One scored submission of a quiz. Rows are append-only: history is kept in
/// full and an attempt is never updated after insert.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quiz_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: String,
    pub quiz_id: i64,

    /// Raw submitted map of question id -> answer text, kept for later review.
    pub answers: Json,
    pub score: i32,
    pub passed: bool,

    pub completed_at: DateTime<Utc>,
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
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id",
        on_delete = "Cascade"
    )]
    Quiz,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        user_id: &str,
        quiz_id: i64,
        answers: Json,
        score: i32,
        passed: bool,
    ) -> Result<Model, DbErr> {
        let attempt = ActiveModel {
            user_id: Set(user_id.to_owned()),
            quiz_id: Set(quiz_id),
            answers: Set(answers),
            score: Set(score),
            passed: Set(passed),
            completed_at: Set(Utc::now()),
            ..Default::default()
        };

        attempt.insert(db).await
    }

    pub async fn get_by_user_and_quiz(
        db: &DbConn,
        user_id: &str,
        quiz_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::QuizId.eq(quiz_id))
            .order_by_desc(Column::CompletedAt)
            .all(db)
            .await
    }
}
