use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable, Identifiable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Setting {
    pub id: i32,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Insertable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::settings)]
pub struct NewSetting {
    pub name: String,
    pub value: String,
}
