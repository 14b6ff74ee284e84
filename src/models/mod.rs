pub mod feature;
pub mod notification;

pub use feature::*;
pub use notification::*;
