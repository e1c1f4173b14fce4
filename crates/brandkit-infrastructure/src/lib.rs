pub mod card_store;
pub mod config_service;
pub mod image_store;
pub mod logo_store;
pub mod palette_store;
pub mod paths;
pub mod state_storage;
pub mod token_store;

mod status;

#[cfg(test)]
mod test_support;

pub use crate::card_store::CardStore;
pub use crate::config_service::ConfigService;
pub use crate::image_store::ImageStore;
pub use crate::logo_store::LogoStore;
pub use crate::palette_store::PaletteStore;
pub use crate::paths::BrandkitPaths;
pub use crate::state_storage::{JsonStateStorage, StateFile};
pub use crate::token_store::TokenStore;
