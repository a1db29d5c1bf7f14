use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub lesson_id: i64,
    pub title: String,
    /// Threshold a score must meet or exceed to count as passed.
    pub pass_percentage: i32,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id",
        on_delete = "Cascade"
    )]
    Lesson,

    #[sea_orm(has_many = "super::quiz_question::Entity")]
    QuizQuestion,

    #[sea_orm(has_many = "super::quiz_attempt::Entity")]
    QuizAttempt,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::quiz_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizQuestion.def()
    }
}

impl Related<super::quiz_attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizAttempt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        lesson_id: i64,
        title: &str,
        pass_percentage: i32,
    ) -> Result<Model, DbErr> {
        let quiz = ActiveModel {
            lesson_id: Set(lesson_id),
            title: Set(title.to_owned()),
            pass_percentage: Set(pass_percentage),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        quiz.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_by_lesson(db: &DbConn, lesson_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::LessonId.eq(lesson_id))
            .all(db)
            .await
    }
}
