//! Aggregate metrics for instructor and student dashboards.

use std::collections::{HashMap, HashSet};

use db::models::{course, enrollment, lesson, lesson_progress, module, review};
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::error::ServiceError;
use crate::progress::percentage;

#[derive(Debug, Serialize, PartialEq)]
pub struct InstructorStats {
    /// Distinct students across all of the instructor's courses; a student
    /// enrolled in two of them counts once.
    pub total_students: usize,
    /// Percent of enrollments whose cached progress has reached 100.
    pub completion_rate: i32,
    /// Mean review rating to one decimal, or None with zero reviews. A missing
    /// mean is reported as missing, never as 0.0.
    pub average_rating: Option<f64>,
    pub total_reviews: usize,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct StudentStats {
    /// Hours of completed lesson video, unrounded, counting only lessons in
    /// courses the student is currently enrolled in.
    pub total_hours: f64,
    /// Mean of the student's enrollment percentages; 0 with none.
    pub average_progress: i32,
}

pub async fn instructor_stats(
    db: &DbConn,
    instructor_id: &str,
) -> Result<InstructorStats, ServiceError> {
    let enrollments = enrollment::Entity::find()
        .inner_join(course::Entity)
        .filter(course::Column::InstructorId.eq(instructor_id))
        .all(db)
        .await?;

    let total_students = enrollments
        .iter()
        .map(|e| e.user_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let completed = enrollments
        .iter()
        .filter(|e| e.progress_percentage >= 100)
        .count();
    let completion_rate = percentage(completed, enrollments.len());

    let ratings: Vec<i32> = review::Entity::find()
        .inner_join(course::Entity)
        .filter(course::Column::InstructorId.eq(instructor_id))
        .all(db)
        .await?
        .iter()
        .map(|r| r.rating)
        .collect();

    let total_reviews = ratings.len();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        let mean = ratings.iter().sum::<i32>() as f64 / ratings.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    };

    Ok(InstructorStats {
        total_students,
        completion_rate,
        average_rating,
        total_reviews,
    })
}

pub async fn student_stats(db: &DbConn, user_id: &str) -> Result<StudentStats, ServiceError> {
    let enrollments = enrollment::Entity::find()
        .filter(enrollment::Column::UserId.eq(user_id))
        .all(db)
        .await?;

    let average_progress = if enrollments.is_empty() {
        0
    } else {
        let total: i64 = enrollments.iter().map(|e| e.progress_percentage as i64).sum();
        ((total as f64) / enrollments.len() as f64).round() as i32
    };

    // Durations of lessons in currently-enrolled courses only; a progress row
    // surviving an unenroll must not count.
    let course_ids: Vec<i64> = enrollments.iter().map(|e| e.course_id).collect();
    let durations: HashMap<i64, i32> = if course_ids.is_empty() {
        HashMap::new()
    } else {
        lesson::Entity::find()
            .inner_join(module::Entity)
            .filter(module::Column::CourseId.is_in(course_ids))
            .all(db)
            .await?
            .into_iter()
            .filter_map(|l| l.duration.map(|d| (l.id, d)))
            .collect()
    };

    let completed_seconds: i64 = lesson_progress::Entity::find()
        .filter(lesson_progress::Column::UserId.eq(user_id))
        .filter(lesson_progress::Column::Completed.eq(true))
        .all(db)
        .await?
        .iter()
        .filter_map(|p| durations.get(&p.lesson_id))
        .map(|d| *d as i64)
        .sum();

    Ok(StudentStats {
        total_hours: completed_seconds as f64 / 3600.0,
        average_progress,
    })
}
