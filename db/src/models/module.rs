use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A titled, ordered section of a course; lessons hang off modules.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub order: i32,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,

    #[sea_orm(has_many = "super::lesson::Entity")]
    Lesson,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        course_id: i64,
        title: &str,
        description: Option<&str>,
        order: i32,
    ) -> Result<Model, DbErr> {
        let module = ActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_owned()),
            description: Set(description.map(str::to_owned)),
            order: Set(order),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        module.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_by_course(db: &DbConn, course_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Order)
            .all(db)
            .await
    }

    pub async fn edit(
        db: &DbConn,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        order: Option<i32>,
    ) -> Result<Model, DbErr> {
        let mut module = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(title) = title {
            module.title = Set(title.to_owned());
        }
        if let Some(description) = description {
            module.description = Set(Some(description.to_owned()));
        }
        if let Some(order) = order {
            module.order = Set(order);
        }

        module.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
