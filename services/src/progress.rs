//! Progress engine: keeps each enrollment's cached percentage consistent with
//! the underlying lesson-completion facts.
//!
//! The percentage is always rederived from the course's *current* lesson set,
//! so lessons added or removed after enrollment are reflected on the next
//! recompute. It is never adjusted incrementally.

use std::collections::HashSet;

use chrono::Utc;
use db::models::{
    enrollment::Model as EnrollmentModel, lesson::Model as LessonModel,
    lesson_progress::Model as LessonProgressModel, module::Model as ModuleModel,
};
use sea_orm::DbConn;

use crate::error::ServiceError;

/// Round-half-up percentage of `completed` over `total`. A course with no
/// lessons reports 0, not an error.
pub(crate) fn percentage(completed: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    ((100.0 * completed as f64) / total as f64).round() as i32
}

/// Marks a lesson complete for a user and refreshes the owning enrollment.
///
/// The lesson_progress row is recorded even when the user is not enrolled in
/// the lesson's course; only the percentage update is skipped in that case.
pub async fn record_lesson_completion(
    db: &DbConn,
    user_id: &str,
    lesson_id: i64,
) -> Result<LessonProgressModel, ServiceError> {
    let lesson = LessonModel::get_by_id(db, lesson_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Lesson not found".into()))?;

    let progress = LessonProgressModel::upsert_completed(db, user_id, lesson_id).await?;

    let module = ModuleModel::get_by_id(db, lesson.module_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Module not found".into()))?;

    if let Some(enrollment) =
        EnrollmentModel::find_by_user_and_course(db, user_id, module.course_id).await?
    {
        refresh_enrollment(db, &enrollment).await?;
    }

    Ok(progress)
}

/// Recomputes the cached percentage of every enrollment in a course.
///
/// Instructor-triggered repair after authoring changes (e.g. lessons deleted).
/// Idempotent: rerunning with no intervening writes yields identical rows.
pub async fn recalculate_course_progress(db: &DbConn, course_id: i64) -> Result<(), ServiceError> {
    let enrollments = EnrollmentModel::get_by_course(db, course_id).await?;
    tracing::info!(course_id, count = enrollments.len(), "recalculating course progress");

    for enrollment in &enrollments {
        refresh_enrollment(db, enrollment).await?;
    }

    Ok(())
}

/// Full recompute for one enrollment, persisting the result.
///
/// Crossing the 100% boundary owns the `completed_at` stamp: reaching 100 sets
/// it (keeping an earlier stamp if present), dropping below clears it.
async fn refresh_enrollment(
    db: &DbConn,
    enrollment: &EnrollmentModel,
) -> Result<(), ServiceError> {
    let pct = compute_percentage(db, &enrollment.user_id, enrollment.course_id).await?;

    let completed_at = if pct >= 100 {
        enrollment.completed_at.or_else(|| Some(Utc::now()))
    } else {
        None
    };

    EnrollmentModel::set_progress(db, enrollment.id, pct, completed_at).await?;
    Ok(())
}

/// Percentage of a course's current lessons the user has completed.
async fn compute_percentage(
    db: &DbConn,
    user_id: &str,
    course_id: i64,
) -> Result<i32, ServiceError> {
    let lessons = LessonModel::get_by_course(db, course_id).await?;
    if lessons.is_empty() {
        return Ok(0);
    }

    let lesson_ids: HashSet<i64> = lessons.iter().map(|l| l.id).collect();
    let completed = LessonProgressModel::get_completed_by_user(db, user_id)
        .await?
        .into_iter()
        .filter(|p| lesson_ids.contains(&p.lesson_id))
        .count();

    Ok(percentage(completed, lessons.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::{
        course::Model as CourseModel,
        enrollment::Model as EnrollmentModel,
        lesson::Model as LessonModel,
        module::Model as ModuleModel,
        user::{Model as UserModel, Role},
    };
    use db::test_utils::setup_test_db;
    use sea_orm::DbConn;

    struct Fixture {
        student: UserModel,
        course: CourseModel,
        lessons: Vec<LessonModel>,
    }

    async fn course_with_lessons(db: &DbConn, lesson_count: usize) -> Fixture {
        let instructor =
            UserModel::upsert(db, "sub-i", "i@example.com", "Ina", "Struct", Role::Instructor)
                .await
                .unwrap();
        let student =
            UserModel::upsert(db, "sub-s", "s@example.com", "Sam", "Learner", Role::Student)
                .await
                .unwrap();
        let course = CourseModel::create(db, &instructor.id, "Rust 101", None, None, None, None)
            .await
            .unwrap();
        let module = ModuleModel::create(db, course.id, "Basics", None, 0).await.unwrap();

        let mut lessons = Vec::new();
        for i in 0..lesson_count {
            let lesson = LessonModel::create(
                db,
                module.id,
                &format!("Lesson {}", i + 1),
                None,
                None,
                Some(600),
                i as i32,
            )
            .await
            .unwrap();
            lessons.push(lesson);
        }

        EnrollmentModel::create(db, &student.id, course.id).await.unwrap();

        Fixture { student, course, lessons }
    }

    async fn current_percentage(db: &DbConn, fixture: &Fixture) -> i32 {
        EnrollmentModel::find_by_user_and_course(db, &fixture.student.id, fixture.course.id)
            .await
            .unwrap()
            .unwrap()
            .progress_percentage
    }

    #[tokio::test]
    async fn percentage_tracks_completed_lessons() {
        let db = setup_test_db().await;
        let fixture = course_with_lessons(&db, 4).await;

        record_lesson_completion(&db, &fixture.student.id, fixture.lessons[0].id)
            .await
            .unwrap();
        record_lesson_completion(&db, &fixture.student.id, fixture.lessons[2].id)
            .await
            .unwrap();
        assert_eq!(current_percentage(&db, &fixture).await, 50);

        record_lesson_completion(&db, &fixture.student.id, fixture.lessons[1].id)
            .await
            .unwrap();
        assert_eq!(current_percentage(&db, &fixture).await, 75);
    }

    #[tokio::test]
    async fn recalculation_reflects_lessons_added_after_enrollment() {
        let db = setup_test_db().await;
        let fixture = course_with_lessons(&db, 4).await;

        for lesson in &fixture.lessons[..3] {
            record_lesson_completion(&db, &fixture.student.id, lesson.id)
                .await
                .unwrap();
        }
        assert_eq!(current_percentage(&db, &fixture).await, 75);

        // A fifth lesson lands after the fact; 3 of 5 complete is 60.
        let module = ModuleModel::get_by_course(&db, fixture.course.id).await.unwrap()[0].clone();
        LessonModel::create(&db, module.id, "Lesson 5", None, None, None, 4)
            .await
            .unwrap();

        recalculate_course_progress(&db, fixture.course.id).await.unwrap();
        assert_eq!(current_percentage(&db, &fixture).await, 60);

        // Rerunning with no new writes changes nothing.
        recalculate_course_progress(&db, fixture.course.id).await.unwrap();
        assert_eq!(current_percentage(&db, &fixture).await, 60);
    }

    #[tokio::test]
    async fn full_completion_stamps_and_clears_completed_at() {
        let db = setup_test_db().await;
        let fixture = course_with_lessons(&db, 2).await;

        for lesson in &fixture.lessons {
            record_lesson_completion(&db, &fixture.student.id, lesson.id)
                .await
                .unwrap();
        }

        let enrollment =
            EnrollmentModel::find_by_user_and_course(&db, &fixture.student.id, fixture.course.id)
                .await
                .unwrap()
                .unwrap();
        assert_eq!(enrollment.progress_percentage, 100);
        assert!(enrollment.completed_at.is_some());

        // New lesson drops the enrollment below 100; the stamp is withdrawn.
        let module = ModuleModel::get_by_course(&db, fixture.course.id).await.unwrap()[0].clone();
        LessonModel::create(&db, module.id, "Lesson 3", None, None, None, 2)
            .await
            .unwrap();
        recalculate_course_progress(&db, fixture.course.id).await.unwrap();

        let enrollment =
            EnrollmentModel::find_by_user_and_course(&db, &fixture.student.id, fixture.course.id)
                .await
                .unwrap()
                .unwrap();
        assert_eq!(enrollment.progress_percentage, 67);
        assert!(enrollment.completed_at.is_none());
    }

    #[tokio::test]
    async fn completion_without_enrollment_still_records_progress() {
        let db = setup_test_db().await;

        let instructor =
            UserModel::upsert(&db, "sub-i", "i@example.com", "Ina", "Struct", Role::Instructor)
                .await
                .unwrap();
        let outsider =
            UserModel::upsert(&db, "sub-o", "o@example.com", "Oli", "Outside", Role::Student)
                .await
                .unwrap();
        let course = CourseModel::create(&db, &instructor.id, "Rust 101", None, None, None, None)
            .await
            .unwrap();
        let module = ModuleModel::create(&db, course.id, "Basics", None, 0).await.unwrap();
        let lesson = LessonModel::create(&db, module.id, "Intro", None, None, None, 0)
            .await
            .unwrap();

        let progress = record_lesson_completion(&db, &outsider.id, lesson.id)
            .await
            .unwrap();
        assert!(progress.completed);
    }

    #[tokio::test]
    async fn unknown_lesson_is_not_found() {
        let db = setup_test_db().await;
        let fixture = course_with_lessons(&db, 1).await;

        let err = record_lesson_completion(&db, &fixture.student.id, 9999)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(0, 0), 0);
    }
}
