//! Cart page: full re-render of the persisted cart with per-line controls,
//! the `(action, index)` edit protocol, and the checkout hand-off.

use cart::{
    checkout::{self, CheckoutOutcome},
    format::{escape_html, format_naira},
    model::{Cart, Command},
    store::{CartStore, Storage},
};

/// Renders the whole cart; no incremental diffing, carts are small. The
/// checkout control is disabled while the cart is empty.
pub fn render(cart: &Cart) -> String {
    if cart.is_empty() {
        return String::from(
            "<div id=\"cart-items\"><p>Your cart is empty.</p></div>\n\
             <p>Total: ₦<span id=\"cart-total\">0</span></p>\n\
             <button id=\"checkout-btn\" disabled>Checkout</button>",
        );
    }

    let mut page = String::from("<div id=\"cart-items\">\n");

    for (idx, line) in cart.lines().iter().enumerate() {
        page.push_str(&format!(
            "<div class=\"cart-item\">\
             <p><strong>{}</strong></p>\
             <p>₦{} × {} = ₦{}</p>\
             <div class=\"cart-actions\">\
             <button data-action=\"dec\" data-idx=\"{idx}\">-</button>\
             <button data-action=\"inc\" data-idx=\"{idx}\">+</button>\
             <button data-action=\"remove\" data-idx=\"{idx}\">Remove</button>\
             </div></div>\n",
            escape_html(&line.name),
            format_naira(line.unit_price),
            line.quantity,
            format_naira(line.subtotal()),
        ));
    }

    page.push_str(&format!(
        "</div>\n<p>Total: ₦<span id=\"cart-total\">{}</span></p>\n\
         <button id=\"checkout-btn\">Checkout</button>",
        format_naira(cart.total())
    ));
    page
}

/// One atomic edit step: load, apply, persist. The returned cart is exactly
/// what was persisted, so the caller's re-render never shows intermediate
/// state. A rejected command (bad index) skips the write.
pub fn edit<S: Storage>(store: &CartStore<S>, command: Command) -> Cart {
    let mut cart = store.load();
    if cart.apply(command) {
        store.save(&cart);
    }
    cart
}

/// Checkout re-reads the store rather than using any in-memory copy, to pick
/// up edits made in the other page context since this page rendered.
pub fn checkout_flow<S: Storage>(store: &CartStore<S>, wa_number: &str) -> CheckoutOutcome {
    let cart = store.load();
    checkout::checkout(&cart, wa_number)
}
