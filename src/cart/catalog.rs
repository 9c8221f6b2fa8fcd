//! Static product catalog.
//!
//! An immutable ordered list of products, looked up by id from the cart.
//! The cart never stores product data itself; titles and prices are
//! resolved here at render time.

use serde::{Deserialize, Serialize};

/// One product in the catalog. Price is in the smallest currency unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: u64,
    pub image: String,
}

/// Immutable, ordered product list.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The demo catalog shipped with the terminal shell.
    pub fn builtin() -> Self {
        let product = |id: &str, title: &str, price: u64, image: &str| Product {
            id: id.to_string(),
            title: title.to_string(),
            price,
            image: image.to_string(),
        };

        Self::new(vec![
            product("coffee", "Roasted coffee beans", 89_000, "images/coffee.jpg"),
            product("tea", "Jasmine tea", 76_000, "images/tea.jpg"),
            product("choco", "Dark chocolate 70%", 65_000, "images/choco.jpg"),
            product("bakery", "Artisan bread", 42_000, "images/bakery.jpg"),
        ])
    }
}
