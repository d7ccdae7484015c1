//! Users Admin Core
//!
//! Client-side core of a users admin screen: a REST store client for the `/users`
//! resource, draft validation, and a list view model with search and pagination.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod validation;
pub mod view_model;

pub use client::{HttpUserStore, UserStore};
pub use config::Config;
pub use errors::AppError;
pub use models::{Page, Status, User, UserDraft};
pub use view_model::{PaginationInfo, Reconcile, UserListViewModel, ViewState, PAGE_SIZE};
