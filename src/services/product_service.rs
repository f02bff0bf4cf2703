//! Product service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product};
use crate::repositories::ProductRepository;

/// Product service wrapping the `ProductRepository`.
#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    /// Creates a new product.
    ///
    /// # Returns
    /// The created product with generated id and default status
    pub async fn create_product(&self, new_product: NewProduct) -> AppResult<Product> {
        let product = self.repo.create(new_product).await?;
        tracing::debug!(product_id = product.id, "Product created");
        Ok(product)
    }

    /// Lists all products in insertion order.
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.repo.list_all().await
    }

    /// Gets a product by its ID.
    ///
    /// # Returns
    /// The product if found, or `NotFound` error
    pub async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found_by_id("product", id))
    }

    /// Sets the status of a product when one is given.
    ///
    /// Without a status nothing is written, but the product must still exist.
    ///
    /// # Errors
    /// `NotFound` if no product has this id
    pub async fn update_status(&self, id: i32, status: Option<&str>) -> AppResult<()> {
        match status {
            Some(status) => {
                if self.repo.update_status(id, status).await? == 0 {
                    return Err(AppError::not_found_by_id("product", id));
                }
                tracing::debug!(product_id = id, status, "Product status updated");
            }
            None => {
                self.get_product(id).await?;
            }
        }
        Ok(())
    }

    /// Deletes a product.
    ///
    /// # Errors
    /// `NotFound` if no product has this id, including one deleted earlier
    pub async fn delete_product(&self, id: i32) -> AppResult<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(AppError::not_found_by_id("product", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::test_db;
    use crate::models::{COMPLETED_STATUS, DEFAULT_PRIORITY, DEFAULT_STATUS};

    fn service(pool: crate::db::AsyncDbPool) -> ProductService {
        ProductService::new(ProductRepository::new(pool))
    }

    fn lamp() -> NewProduct {
        NewProduct {
            product_name: "Lamp".to_string(),
            price: 24.99,
            quantity: 4,
            priority: DEFAULT_PRIORITY.to_string(),
            due_date: Some("2024-12-01".to_string()),
        }
    }

    #[tokio::test]
    async fn test_update_status_persists() {
        let db = test_db().await;
        let service = service(db.pool.clone());
        let created = service.create_product(lamp()).await.unwrap();
        assert_eq!(created.status, DEFAULT_STATUS);

        service
            .update_status(created.id, Some(COMPLETED_STATUS))
            .await
            .unwrap();

        let updated = service.get_product(created.id).await.unwrap();
        assert_eq!(
            updated,
            Product {
                status: COMPLETED_STATUS.to_string(),
                ..created
            }
        );
    }

    #[tokio::test]
    async fn test_update_without_status_is_noop() {
        let db = test_db().await;
        let service = service(db.pool.clone());
        let created = service.create_product(lamp()).await.unwrap();

        service.update_status(created.id, None).await.unwrap();
        assert_eq!(service.get_product(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let db = test_db().await;
        let service = service(db.pool.clone());

        for status in [Some(COMPLETED_STATUS), None] {
            let result = service.update_status(42, status).await;
            assert!(matches!(result, Err(AppError::NotFound { .. })));
        }
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let db = test_db().await;
        let service = service(db.pool.clone());
        let created = service.create_product(lamp()).await.unwrap();

        service.delete_product(created.id).await.unwrap();
        let second = service.delete_product(created.id).await;
        assert!(matches!(
            second,
            Err(AppError::NotFound { ref entity, .. }) if entity == "product"
        ));
    }
}
