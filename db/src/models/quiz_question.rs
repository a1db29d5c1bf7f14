use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quiz_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub quiz_id: i64,
    pub question: String,
    pub question_type: QuestionType,
    /// Graded by exact, case-sensitive comparison against the submitted text.
    pub correct_answer: String,
    /// JSON array of option strings; None for true/false questions.
    pub options: Option<Json>,
    pub order: i32,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "quiz_question_type")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum QuestionType {
    #[sea_orm(string_value = "multiple_choice")]
    MultipleChoice,

    #[sea_orm(string_value = "true_false")]
    TrueFalse,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id",
        on_delete = "Cascade"
    )]
    Quiz,
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
        quiz_id: i64,
        question: &str,
        question_type: QuestionType,
        correct_answer: &str,
        options: Option<Json>,
        order: i32,
    ) -> Result<Model, DbErr> {
        let row = ActiveModel {
            quiz_id: Set(quiz_id),
            question: Set(question.to_owned()),
            question_type: Set(question_type),
            correct_answer: Set(correct_answer.to_owned()),
            options: Set(options),
            order: Set(order),
            ..Default::default()
        };

        row.insert(db).await
    }

    pub async fn get_by_quiz(db: &DbConn, quiz_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::QuizId.eq(quiz_id))
            .order_by_asc(Column::Order)
            .all(db)
            .await
    }
}
