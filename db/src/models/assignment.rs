use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub lesson_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,

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

    #[sea_orm(has_many = "super::assignment_submission::Entity")]
    AssignmentSubmission,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::assignment_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignmentSubmission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        lesson_id: i64,
        title: &str,
        description: &str,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Model, DbErr> {
        let assignment = ActiveModel {
            lesson_id: Set(lesson_id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            due_date: Set(due_date),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        assignment.insert(db).await
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
