pub use cards::*;
pub use draw::*;
pub use errors::*;
pub use game::*;
pub use generator::*;
pub use sampler::*;
pub use template::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod draw;
mod errors;
mod game;
mod generator;
mod sampler;
mod template;
mod visualization;
