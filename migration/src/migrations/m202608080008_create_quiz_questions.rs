use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608080008_create_quiz_questions"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("quiz_questions"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("quiz_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("question")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("question_type"))
                            .enumeration(
                                Alias::new("quiz_question_type"),
                                vec![Alias::new("multiple_choice"), Alias::new("true_false")],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("correct_answer")).string().not_null())
                    // JSON array of option strings; null for true/false questions.
                    .col(ColumnDef::new(Alias::new("options")).json().null())
                    .col(ColumnDef::new(Alias::new("order")).integer().not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("quiz_questions"), Alias::new("quiz_id"))
                            .to(Alias::new("quizzes"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("quiz_questions")).to_owned())
            .await
    }
}
