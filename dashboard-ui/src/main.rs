//! Sentiment Dashboard
//!
//! Browser dashboard for customer-service sentiment built with Leptos (WASM).
//!
//! # Features
//!
//! - Attendant and client rankings, paginated
//! - Sentiment distribution pie chart
//! - Monthly sentiment evolution bar chart
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Every component fetches its own data from the sentiment backend over HTTP;
//! nothing is shared between components.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
