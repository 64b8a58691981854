//! Product-detail page: resolves the navigational product selector against
//! the catalog, renders the product, and wires the add action into the cart.

use cart::{
    format::{escape_html, format_naira},
    store::{CartStore, Storage},
};
use tracing::{info, warn};

/// Fixed display conversion rate for the secondary USD price.
const NAIRA_TO_USD: u64 = 1600;

#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// Line appended or merged and persisted; carries the transient notice
    /// text and the new badge count for the counter display.
    Added { name: &'static str, total_quantity: u64 },
    /// Unknown or missing key: the cart is left untouched.
    UnknownProduct,
}

/// Renders the detail page for the `product` selector. An unknown or absent
/// key renders the "not found" state.
pub fn render(key: Option<&str>) -> String {
    let Some(product) = key.and_then(catalog::get) else {
        warn!(key, "Invalid product key");
        return String::from(
            "<h2 id=\"product-name\">Product not found</h2>\n\
             <p id=\"product-description\">Use ?product=casio or gshock or navi, etc.</p>",
        );
    };

    let name = escape_html(product.name);
    format!(
        "<h2 id=\"product-name\">{name}</h2>\n\
         <img id=\"product-image\" src=\"{}\" alt=\"{name}\">\n\
         <p id=\"product-description\">{}</p>\n\
         <p>₦<span id=\"product-price-naira\">{}</span> \
         ($<span id=\"product-price-usd\">{:.2}</span>)</p>\n\
         <button id=\"add-to-cart-btn\">Add to Cart</button>",
        product.image,
        escape_html(product.description),
        format_naira(product.price_naira),
        product.price_naira as f64 / NAIRA_TO_USD as f64,
    )
}

/// The add action: load fresh, merge the product in, persist. Returns the
/// notice and badge count, or reports the key as unknown without touching
/// the store.
pub fn add_to_cart<S: Storage>(store: &CartStore<S>, key: &str) -> AddOutcome {
    let Some(product) = catalog::get(key) else {
        warn!(key, "Cannot add: product not found");
        return AddOutcome::UnknownProduct;
    };

    let mut cart = store.load();
    cart.add_or_merge(key, product.name, product.price_naira);
    store.save(&cart);

    info!(key, total_quantity = cart.total_quantity(), "Added to cart");
    AddOutcome::Added { name: product.name, total_quantity: cart.total_quantity() }
}

#[cfg(test)]
mod tests {
    use cart::store::{CartStore, MemoryStore};

    use super::{AddOutcome, add_to_cart, render};

    #[test]
    fn test_render_known_product() {
        let page = render(Some("casio"));
        assert!(page.contains("Casio Classic"));
        assert!(page.contains("₦<span id=\"product-price-naira\">55,000</span>"));
        assert!(page.contains("($<span id=\"product-price-usd\">34.38</span>)"));
    }

    #[test]
    fn test_render_unknown_product() {
        for key in [None, Some("seiko")] {
            let page = render(key);
            assert!(page.contains("Product not found"));
            assert!(!page.contains("add-to-cart-btn"));
        }
    }

    #[test]
    fn test_add_merges_and_counts() {
        let store = CartStore::new(MemoryStore::default());

        assert_eq!(
            add_to_cart(&store, "casio"),
            AddOutcome::Added { name: "Casio Classic", total_quantity: 1 }
        );
        assert_eq!(
            add_to_cart(&store, "casio"),
            AddOutcome::Added { name: "Casio Classic", total_quantity: 2 }
        );

        let cart = store.load();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_unknown_key_leaves_store_untouched() {
        let store = CartStore::new(MemoryStore::default());

        assert_eq!(add_to_cart(&store, "seiko"), AddOutcome::UnknownProduct);
        assert!(store.load().is_empty());
    }
}
