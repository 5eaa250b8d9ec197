pub mod client;
pub mod gateway;
pub mod types;

pub use client::HttpGateway;
pub use gateway::{GatewayError, PlatformGateway};
pub use types::Quest;
