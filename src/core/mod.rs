pub mod animator;
pub mod bezier;
pub mod config;
pub mod constants;
pub mod frame_rate;
pub mod lifecycle;
pub mod signal;

pub use animator::*;
pub use bezier::*;
pub use config::*;
pub use frame_rate::*;
pub use lifecycle::*;
pub use signal::*;
