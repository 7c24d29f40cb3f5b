mod dirs;
mod settings;
mod validation;

pub use dirs::Directories;
pub use settings::{Config, SearchConfig, WidgetConfig};
pub use validation::warn_unknown_fields;

pub(crate) use settings::PLACEHOLDER;
