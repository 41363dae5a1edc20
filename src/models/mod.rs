pub mod access;
pub mod claims;
pub mod token;

pub use access::{AccessCheckResponse, Role};
pub use claims::{Claims, VideoGrants};
pub use token::{TokenRequest, TokenResponse};
