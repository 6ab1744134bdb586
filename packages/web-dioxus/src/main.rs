//! Training Brochure Review - Dioxus Fullstack Web Application
//!
//! A single-form app: upload a PDF training-program brochure, review the
//! fields the extraction backend found, then export them to a Google
//! Form, a backend draft, or a UI.Vision CSV.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

#[cfg(feature = "server")]
mod api;
mod app;
mod components;
mod export;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
