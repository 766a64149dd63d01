mod input;
mod recording;
pub use input::*;
pub use recording::*;
