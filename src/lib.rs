// Motor Xadrez - Regras e Busca Alpha-Beta

pub mod core;
pub mod error;
pub mod moves;
pub mod search;

pub use core::*;
pub use error::{ConfigError, FenError, SearchError};
