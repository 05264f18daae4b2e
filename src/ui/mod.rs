//! View layer: view models, intents, components, themes.
//!
//! The view layer sits outside the store core. It reads state through
//! [`crate::app::Store::state`], turns raw user input into actions via the
//! intent constructors, and repaints the two shelves after every dispatch.
//!
//! ```text
//! BookshelfState → ShelfViewModel → components → ANSI output
//! raw input      → intent          → Action     → dispatch
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable shelf state
//! - [`tabs`]: Expanded-shelf tab state
//! - [`intent`]: Raw input to typed actions
//! - [`render`]: Top-level render pass
//! - [`components`]: Composable section renderers
//! - [`theme`]: Color schemes and ANSI helpers

pub mod components;
pub mod intent;
pub mod render;
pub mod tabs;
pub mod theme;
pub mod viewmodel;

pub use intent::BookForm;
pub use render::render;
pub use tabs::Tab;
pub use theme::Theme;
pub use viewmodel::{BookCard, ShelfViewModel};
