//! # QuickCart
//!
//! Core of a shopping-list app: users sign in, search the store catalog,
//! build shopping lists and walk them in aisle order. Admins manage the
//! catalog.
//!
//! ## Components
//!
//! - **[model]**: records ([`Product`](model::Product), [`ShoppingList`](model::ShoppingList),
//!   [`User`](model::User)) and their create/update payloads.
//! - **[route]**: orders list items by floor, aisle and row.
//! - **[search]**: catalog suggestions.
//! - **Collections** ([`product_actor`], [`user_actor`], [`list_actor`]) and
//!   their typed [`clients`], built on `docstore`.
//! - **[identity]**: the authentication collaborator.
//! - **[session]**: per-user state and every user-facing operation.
//! - **[lifecycle]**: starts and stops the collections.
//! - **[config]**: environment configuration.
//!
//! ## Quick Start
//!
//! The binary in `main.rs` runs a full session against in-process
//! collections: registration, catalog setup, a list, its route and a save.

pub mod clients;
pub mod config;
pub mod identity;
pub mod lifecycle;
pub mod list_actor;
pub mod model;
pub mod product_actor;
pub mod route;
pub mod search;
pub mod session;
pub mod user_actor;
