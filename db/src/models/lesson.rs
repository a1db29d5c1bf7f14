use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub module_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Opaque playback URL; the server stores and returns it, nothing more.
    pub video_url: Option<String>,
    /// Runtime in seconds.
    pub duration: Option<i32>,
    pub order: i32,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id",
        on_delete = "Cascade"
    )]
    Module,

    #[sea_orm(has_many = "super::quiz::Entity")]
    Quiz,

    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,

    #[sea_orm(has_many = "super::lesson_progress::Entity")]
    LessonProgress,
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::lesson_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        module_id: i64,
        title: &str,
        description: Option<&str>,
        video_url: Option<&str>,
        duration: Option<i32>,
        order: i32,
    ) -> Result<Model, DbErr> {
        let lesson = ActiveModel {
            module_id: Set(module_id),
            title: Set(title.to_owned()),
            description: Set(description.map(str::to_owned)),
            video_url: Set(video_url.map(str::to_owned)),
            duration: Set(duration),
            order: Set(order),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        lesson.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_by_module(db: &DbConn, module_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ModuleId.eq(module_id))
            .order_by_asc(Column::Order)
            .all(db)
            .await
    }

    /// Every lesson of a course, across all its modules.
    ///
    /// This is the denominator of the progress recompute, so it must always
    /// reflect the course's current authoring state.
    pub async fn get_by_course(db: &DbConn, course_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .inner_join(super::module::Entity)
            .filter(super::module::Column::CourseId.eq(course_id))
            .order_by_asc(Column::ModuleId)
            .order_by_asc(Column::Order)
            .all(db)
            .await
    }

    pub async fn edit(
        db: &DbConn,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        duration: Option<i32>,
        order: Option<i32>,
    ) -> Result<Model, DbErr> {
        let mut lesson = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(title) = title {
            lesson.title = Set(title.to_owned());
        }
        if let Some(description) = description {
            lesson.description = Set(Some(description.to_owned()));
        }
        if let Some(duration) = duration {
            lesson.duration = Set(Some(duration));
        }
        if let Some(order) = order {
            lesson.order = Set(order);
        }

        lesson.update(db).await
    }

    /// Swaps in the playback URL handed back by the upload pipeline.
    pub async fn set_video_url(db: &DbConn, id: i64, video_url: &str) -> Result<Model, DbErr> {
        let lesson = ActiveModel {
            id: Set(id),
            video_url: Set(Some(video_url.to_owned())),
            ..Default::default()
        };

        lesson.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
