//! Order hand-off: the cart serialized as a human-readable message, embedded
//! in a WhatsApp URL for the merchant number.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{
    format::format_naira,
    model::{Cart, DEFAULT_NAME},
};

pub const MESSAGING_DOMAIN: &str = "https://wa.me";

/// Everything `encodeURIComponent` escapes: non-alphanumerics except
/// `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// What the checkout action produced. The presentation layer decides how to
/// surface `EmptyCart` (modal, toast, log); the core only reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to purchase; no hand-off URL is built.
    EmptyCart,
    Ready { message: String, url: String },
}

/// Deterministic order text: greeting, one line per cart entry in cart
/// order, the total, and blank buyer fields. Same cart, same text.
pub fn order_message(cart: &Cart) -> String {
    let mut message = String::from("Hi, I would like to purchase:\n");

    for line in cart.lines() {
        let name = if line.name.is_empty() { DEFAULT_NAME } else { &line.name };
        message.push_str(&format!(
            "- {name} x{} (₦{})\n",
            line.quantity,
            format_naira(line.subtotal())
        ));
    }

    message.push_str(&format!("Total: ₦{}\n\nName:\nPhone:", format_naira(cart.total())));
    message
}

pub fn handoff_url(wa_number: &str, message: &str) -> String {
    format!(
        "{MESSAGING_DOMAIN}/{}?text={}",
        utf8_percent_encode(wa_number, COMPONENT),
        utf8_percent_encode(message, COMPONENT)
    )
}

/// Builds the hand-off for `cart`, which the caller should re-`load` fresh
/// immediately beforehand to pick up edits from the other page context.
pub fn checkout(cart: &Cart, wa_number: &str) -> CheckoutOutcome {
    if cart.is_empty() {
        return CheckoutOutcome::EmptyCart;
    }

    let message = order_message(cart);
    let url = handoff_url(wa_number, &message);

    CheckoutOutcome::Ready { message, url }
}
