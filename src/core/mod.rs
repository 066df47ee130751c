pub mod amplitude;
pub mod coin;
pub mod walker;

pub use amplitude::Amplitude;
pub use coin::Matrix2x2;
pub use walker::WalkState;
