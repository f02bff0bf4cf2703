use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Task model for reading from database
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    /// Civil UTC time of insertion
    pub created_at: DateTime,
}

/// NewTask model for inserting new records.
/// `created_at` is stamped by the service, never taken from the request.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub created_at: DateTime,
}
