pub mod island;
pub mod panels;
pub mod workspace;

pub use island::*;
pub use panels::*;
pub use workspace::*;
