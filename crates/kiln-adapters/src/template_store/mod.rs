//! Template store adapters.

mod file;
mod memory;

pub use file::FileTemplateStore;
pub use memory::InMemoryTemplateStore;
