pub mod capability;
pub mod category;
pub mod entry;
pub mod manifest;
pub mod mode;

pub use capability::*;
pub use category::*;
pub use entry::*;
pub use manifest::*;
pub use mode::*;
