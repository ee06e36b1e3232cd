pub mod catalog;
pub mod common;
pub mod descriptor;
pub mod layout;
pub mod manifest;
pub mod report;
pub mod run_config;
pub mod template;

pub use crate::domain::DomainError;
pub use catalog::Catalog;
pub use descriptor::ComponentDescriptor;
pub use layout::ComponentLayout;
pub use run_config::RunConfig;
pub use template::{TemplateAsset, TemplateContext};
