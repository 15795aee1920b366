pub mod animator;
pub mod camera;
pub mod constants;
pub mod error;
pub mod form;
pub mod keys;
pub mod model;
pub mod pick;
pub mod region;
pub mod session;
pub mod welcome;

pub use animator::*;
pub use camera::*;
pub use constants::*;
pub use error::*;
pub use form::*;
pub use keys::*;
pub use model::*;
pub use pick::*;
pub use region::*;
pub use session::*;
pub use welcome::*;
