pub mod ball;
pub mod clock;
pub mod constants;
pub mod error;
pub mod pattern;
pub mod pool;
pub mod settings;
pub mod spawn;

pub use ball::*;
pub use clock::*;
pub use constants::*;
pub use error::*;
pub use pattern::*;
pub use pool::*;
pub use settings::*;
pub use spawn::*;
