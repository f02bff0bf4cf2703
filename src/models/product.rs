use diesel::prelude::*;

/// Product model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Identifiable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub price: f64,
    pub quantity: i32,
    pub priority: String,
    pub status: String,
    pub due_date: Option<String>,
}

/// NewProduct model for inserting new records.
/// `status` is left to the column default.
#[derive(Debug, Insertable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub product_name: String,
    pub price: f64,
    pub quantity: i32,
    pub priority: String,
    pub due_date: Option<String>,
}
