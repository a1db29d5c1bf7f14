use crate::seed::Seeder;
use db::models::user::{Model, Role};
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::{FirstName, LastName}};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Fixed instructor
        let _ = Model::upsert(
            db,
            "seed-instructor",
            "instructor@example.com",
            "Ina",
            "Struct",
            Role::Instructor,
        )
        .await;

        // Fixed student
        let _ = Model::upsert(
            db,
            "seed-student",
            "student@example.com",
            "Sam",
            "Learner",
            Role::Student,
        )
        .await;

        // Random students
        for _ in 0..10 {
            let id = Uuid::new_v4().to_string();
            let email: String = SafeEmail().fake();
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            let _ = Model::upsert(db, &id, &email, &first, &last, Role::Student).await;
        }
    }
}
