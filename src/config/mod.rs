//! Configuration module

mod site;

pub use site::AdminConfig;
pub use site::BlogConfig;
pub use site::PostsConfig;
