pub mod decimal;
pub mod format;
pub mod stoch;

pub use decimal::*;
pub use format::*;
pub use stoch::*;
