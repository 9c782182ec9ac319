//! Marketplace product catalog with farmer-gated CRUD.
//!
//! In-memory, seeded with a few demo listings. Farmers manage their own
//! products through the dashboard; update and delete enforce ownership.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use krishi_jyothi_core::{Price, ProductId, UserId};

use crate::models::{Identity, Product, ProductDraft, ValidationError};

/// Errors from product catalog operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// No product with this id exists.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The product belongs to a different farmer.
    #[error("product {0} belongs to another farmer")]
    NotOwner(ProductId),

    /// The submitted draft failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// The marketplace product listing.
#[derive(Debug)]
pub struct ProductCatalog {
    products: Mutex<Vec<Product>>,
}

impl ProductCatalog {
    /// Catalog seeded with the demo marketplace listings.
    #[must_use]
    pub fn with_demo_products() -> Self {
        let rajesh = (UserId::new(1), "Rajesh Patel");
        let products = vec![
            demo_product(
                1,
                "Organic Tomatoes",
                "Vine-ripened tomatoes grown without pesticides.",
                "Vegetables",
                60,
                "kg",
                25,
                true,
                rajesh,
            ),
            demo_product(
                2,
                "Fresh Spinach",
                "Tender spinach bunches, harvested this morning.",
                "Vegetables",
                40,
                "bunch",
                40,
                true,
                rajesh,
            ),
            demo_product(
                3,
                "Potatoes",
                "All-purpose potatoes from the winter harvest.",
                "Vegetables",
                35,
                "kg",
                120,
                false,
                rajesh,
            ),
            demo_product(
                4,
                "Alphonso Mangoes",
                "Sweet Ratnagiri Alphonso mangoes, tree-ripened.",
                "Fruits",
                450,
                "dozen",
                15,
                true,
                rajesh,
            ),
        ];

        Self {
            products: Mutex::new(products),
        }
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
        }
    }

    fn products(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All products, in listing order.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.products().clone()
    }

    /// Products listed by one farmer.
    #[must_use]
    pub fn list_by_farmer(&self, farmer_id: UserId) -> Vec<Product> {
        self.products()
            .iter()
            .filter(|product| product.farmer_id == farmer_id)
            .cloned()
            .collect()
    }

    /// Look up one product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.products()
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    /// List a new product for `farmer`.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::Invalid`] if the draft fails validation.
    pub fn create(&self, draft: &ProductDraft, farmer: &Identity) -> Result<Product, ProductError> {
        let price = draft.validate()?;
        let mut products = self.products();

        let next_id = products
            .iter()
            .map(|product| product.id)
            .max()
            .map_or(ProductId::new(1), ProductId::next);

        let product = build_product(next_id, draft, price, farmer);
        products.push(product.clone());
        tracing::info!(product = %product.id, farmer = %farmer.id, "Product listed");
        Ok(product)
    }

    /// Replace an existing product's details.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NotFound`] for an unknown id,
    /// [`ProductError::NotOwner`] if `farmer` did not list the product, and
    /// [`ProductError::Invalid`] if the draft fails validation.
    pub fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
        farmer: &Identity,
    ) -> Result<Product, ProductError> {
        let price = draft.validate()?;
        let mut products = self.products();

        let existing = products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(ProductError::NotFound(id))?;
        if existing.farmer_id != farmer.id {
            return Err(ProductError::NotOwner(id));
        }

        *existing = build_product(id, draft, price, farmer);
        Ok(existing.clone())
    }

    /// Delist a product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NotFound`] for an unknown id and
    /// [`ProductError::NotOwner`] if `farmer` did not list the product.
    pub fn delete(&self, id: ProductId, farmer: &Identity) -> Result<(), ProductError> {
        let mut products = self.products();

        let index = products
            .iter()
            .position(|product| product.id == id)
            .ok_or(ProductError::NotFound(id))?;
        let owner = products
            .get(index)
            .map(|product| product.farmer_id)
            .ok_or(ProductError::NotFound(id))?;
        if owner != farmer.id {
            return Err(ProductError::NotOwner(id));
        }

        products.remove(index);
        tracing::info!(product = %id, farmer = %farmer.id, "Product delisted");
        Ok(())
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::with_demo_products()
    }
}

fn build_product(id: ProductId, draft: &ProductDraft, price: Price, farmer: &Identity) -> Product {
    Product {
        id,
        name: draft.name.trim().to_string(),
        description: draft.description.trim().to_string(),
        category: draft.category.trim().to_string(),
        price,
        unit: draft.unit.trim().to_string(),
        stock: draft.stock,
        organic: draft.organic,
        image: draft
            .image
            .clone()
            .unwrap_or_else(|| "/placeholder.svg?height=300&width=300".to_string()),
        farmer_id: farmer.id,
        farmer_name: farmer.name.clone(),
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_product(
    id: i32,
    name: &str,
    description: &str,
    category: &str,
    rupees: u32,
    unit: &str,
    stock: u32,
    organic: bool,
    farmer: (UserId, &str),
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price: Price::from_rupees(rupees),
        unit: unit.to_string(),
        stock,
        organic,
        image: "/placeholder.svg?height=300&width=300".to_string(),
        farmer_id: farmer.0,
        farmer_name: farmer.1.to_string(),
    }
}
