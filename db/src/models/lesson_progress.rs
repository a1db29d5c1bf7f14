use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-user, per-lesson completion fact; the ground truth the progress engine
/// derives percentages from.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lesson_progress")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: String,
    pub lesson_id: i64,

    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
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
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id",
        on_delete = "Cascade"
    )]
    Lesson,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_user_and_lesson(
        db: &DbConn,
        user_id: &str,
        lesson_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::LessonId.eq(lesson_id))
            .one(db)
            .await
    }

    /// Marks a lesson complete, inserting or refreshing the single row the
    /// unique (user, lesson) index allows. Re-marking is harmless.
    pub async fn upsert_completed(
        db: &DbConn,
        user_id: &str,
        lesson_id: i64,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        if let Some(existing) = Self::find_by_user_and_lesson(db, user_id, lesson_id).await? {
            let row = ActiveModel {
                id: Set(existing.id),
                completed: Set(true),
                completed_at: Set(Some(now)),
                ..Default::default()
            };
            return row.update(db).await;
        }

        let row = ActiveModel {
            user_id: Set(user_id.to_owned()),
            lesson_id: Set(lesson_id),
            completed: Set(true),
            completed_at: Set(Some(now)),
            ..Default::default()
        };

        row.insert(db).await
    }

    pub async fn get_completed_by_user(db: &DbConn, user_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Completed.eq(true))
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::Model as LessonProgressModel;
    use crate::models::{
        course::Model as CourseModel,
        lesson::Model as LessonModel,
        module::Model as ModuleModel,
        user::{Model as UserModel, Role},
    };
    use crate::test_utils::setup_test_db;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn upsert_is_single_row_per_user_lesson() {
        let db = setup_test_db().await;

        let instructor = UserModel::upsert(&db, "sub-i", "i@example.com", "Ina", "Struct", Role::Instructor)
            .await
            .unwrap();
        let student = UserModel::upsert(&db, "sub-s", "s@example.com", "Sam", "Learner", Role::Student)
            .await
            .unwrap();
        let course = CourseModel::create(&db, &instructor.id, "Rust 101", None, None, None, None)
            .await
            .unwrap();
        let module = ModuleModel::create(&db, course.id, "Basics", None, 0).await.unwrap();
        let lesson = LessonModel::create(&db, module.id, "Intro", None, None, None, 0)
            .await
            .unwrap();

        let first = LessonProgressModel::upsert_completed(&db, &student.id, lesson.id)
            .await
            .unwrap();
        let second = LessonProgressModel::upsert_completed(&db, &student.id, lesson.id)
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert!(second.completed);
        assert!(second.completed_at.is_some());

        let count = super::Entity::find().count(&db).await.unwrap();
        assert_eq!(count, 1);
    }
}
