pub mod contact;
pub mod fetcher;

pub use crate::domain::model::{Card, CardBundle, CardLink, CardTemplate};
pub use crate::domain::ports::{CardBackend, ConfigProvider, PublicCardResponse};
pub use crate::utils::error::Result;
