use anyhow::Result;
use cart::{
    checkout::CheckoutOutcome,
    model::Command,
    store::{CartStore, LocalStore},
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod cart_page;
mod config;
mod detail;

use config::Config;
use detail::AddOutcome;

/// Each invocation is one page load; invocations share the persisted cart
/// under the configured data directory.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    page: Page,
}

#[derive(Subcommand)]
enum Page {
    /// Product detail page.
    Detail {
        /// Catalog key, the `?product=` selector.
        product: Option<String>,

        /// Add one of the product to the cart.
        #[arg(long)]
        add: bool,
    },

    /// Cart page, optionally applying one edit or checking out.
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Increase the quantity of the line at INDEX.
    Inc { index: usize },

    /// Decrease the quantity of the line at INDEX, never below 1.
    Dec { index: usize },

    /// Remove the line at INDEX.
    Remove { index: usize },

    /// Build the WhatsApp order hand-off.
    Checkout,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config = Config::load();
    let store = CartStore::new(LocalStore::open(&config.data_dir)?);

    match args.page {
        Page::Detail { product, add } => {
            let key = product.as_deref();
            println!("{}", detail::render(key));

            if add {
                match key.map_or(AddOutcome::UnknownProduct, |key| {
                    detail::add_to_cart(&store, key)
                }) {
                    AddOutcome::Added { name, total_quantity } => {
                        println!("\n{name} added to cart");
                        println!("Cart count: {total_quantity}");
                    }
                    AddOutcome::UnknownProduct => println!("\nCannot add: product not found."),
                }
            }
        }

        Page::Cart { action } => match action {
            None => println!("{}", cart_page::render(&store.load())),
            Some(CartAction::Inc { index }) => {
                println!("{}", cart_page::render(&cart_page::edit(&store, Command::Increment(index))));
            }
            Some(CartAction::Dec { index }) => {
                println!("{}", cart_page::render(&cart_page::edit(&store, Command::Decrement(index))));
            }
            Some(CartAction::Remove { index }) => {
                println!("{}", cart_page::render(&cart_page::edit(&store, Command::Remove(index))));
            }
            Some(CartAction::Checkout) => match cart_page::checkout_flow(&store, &config.wa_number) {
                CheckoutOutcome::EmptyCart => println!("Your cart is empty."),
                CheckoutOutcome::Ready { message, url } => {
                    println!("{message}\n");
                    println!("Open to complete your order:\n{url}");
                }
            },
        },
    }

    Ok(())
}
