pub mod html;
pub mod page;
pub mod registry;
pub mod templates;

pub use page::{render_card_page, render_home_page, render_not_found_page, PageMetadata};
pub use registry::{resolve, resolve_renderer, TemplateRenderer, TemplateVariant};
pub use templates::CardView;
