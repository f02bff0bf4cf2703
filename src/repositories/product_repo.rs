//! Product repository for async database operations.
//!
//! Provides CRUD operations for the products table using diesel_async.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewProduct, Product};

/// Product repository holding an async connection pool.
///
/// Cloning is cheap, the pool is reference counted.
#[derive(Clone)]
pub struct ProductRepository {
    pool: AsyncDbPool,
}

impl ProductRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a product; `status` comes from the column default.
    ///
    /// # Returns
    /// The created product with its generated id
    pub async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(products)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists all products in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .order(id.asc())
            .select(Product::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a product by its ID.
    ///
    /// # Returns
    /// `Some(Product)` if found, `None` otherwise
    pub async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .filter(id.eq(product_id))
            .select(Product::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Overwrites the status of one product.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn update_status(&self, product_id: i32, new_status: &str) -> Result<usize, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(products.filter(id.eq(product_id)))
            .set(status.eq(new_status))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a product from the database.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, product_id: i32) -> Result<usize, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(products.filter(id.eq(product_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Counts products whose status matches `wanted` exactly.
    pub async fn count_by_status(&self, wanted: &str) -> Result<i64, AppError> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .filter(status.eq(wanted))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::test_db;
    use crate::models::{COMPLETED_STATUS, DEFAULT_STATUS};

    fn widget(name: &str) -> NewProduct {
        NewProduct {
            product_name: name.to_string(),
            price: 9.5,
            quantity: 3,
            priority: "High".to_string(),
            due_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_default_status() {
        let db = test_db().await;
        let repo = ProductRepository::new(db.pool.clone());

        let product = repo.create(widget("Widget")).await.unwrap();
        assert!(product.id > 0);
        assert_eq!(product.product_name, "Widget");
        assert_eq!(product.status, DEFAULT_STATUS);
        assert_eq!(product.due_date, None);

        let found = repo.find_by_id(product.id).await.unwrap();
        assert_eq!(found, Some(product));
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let db = test_db().await;
        let repo = ProductRepository::new(db.pool.clone());

        for name in ["a", "b", "c"] {
            repo.create(widget(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.product_name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_update_status_only_touches_status() {
        let db = test_db().await;
        let repo = ProductRepository::new(db.pool.clone());
        let created = repo.create(widget("Widget")).await.unwrap();

        let affected = repo.update_status(created.id, COMPLETED_STATUS).await.unwrap();
        assert_eq!(affected, 1);

        let updated = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(updated.status, COMPLETED_STATUS);
        assert_eq!(updated.product_name, created.product_name);
        assert_eq!(updated.price, created.price);
        assert_eq!(updated.quantity, created.quantity);
        assert_eq!(updated.priority, created.priority);

        assert_eq!(repo.update_status(9999, COMPLETED_STATUS).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let db = test_db().await;
        let repo = ProductRepository::new(db.pool.clone());
        let created = repo.create(widget("Widget")).await.unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), 1);
        assert_eq!(repo.delete(created.id).await.unwrap(), 0);
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let db = test_db().await;
        let repo = ProductRepository::new(db.pool.clone());
        let first = repo.create(widget("first")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(widget("second")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_counts() {
        let db = test_db().await;
        let repo = ProductRepository::new(db.pool.clone());
        assert_eq!(repo.count_all().await.unwrap(), 0);

        let ids: Vec<i32> = {
            let mut ids = Vec::new();
            for name in ["a", "b", "c"] {
                ids.push(repo.create(widget(name)).await.unwrap().id);
            }
            ids
        };
        repo.update_status(ids[1], COMPLETED_STATUS).await.unwrap();
        repo.update_status(ids[2], "completed").await.unwrap();

        assert_eq!(repo.count_all().await.unwrap(), 3);
        assert_eq!(repo.count_by_status(COMPLETED_STATUS).await.unwrap(), 1);
    }
}
