//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the pane UI, transforming view models into
//! ANSI-styled output through composable rendering components, with theme
//! support and filter-match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, CardListView, DetailsView, EmptyState, FooterInfo, HeaderInfo, InputInfo, PageView,
    PaginationView, UiViewModel,
};
