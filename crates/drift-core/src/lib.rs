pub mod actor;
pub mod constants;
pub mod dance;
pub mod error;
pub mod field;
pub mod follower;
pub mod layout;
pub mod parallax;
pub mod pointer;
pub mod render;
pub mod scene;
pub mod spring;

pub use actor::*;
pub use error::ConfigError;
pub use field::*;
pub use follower::FollowerRing;
pub use pointer::*;
pub use render::*;
pub use scene::*;
pub use spring::*;
