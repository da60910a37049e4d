pub mod board;
pub mod position;
pub mod types;
pub mod zobrist;

pub use board::*;
pub use position::*;
pub use types::*;
pub use zobrist::*;
