//! Tipos de erro do motor.
//!
//! Geração de lances, avaliação e busca são funções totais: os únicos erros
//! vêm da leitura de posições FEN, de configurações inválidas e de falhas nos
//! workers da busca paralela.

use thiserror::Error;

/// Erros ao ler uma string FEN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("Invalid FEN: expected 4 to 6 fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("Invalid FEN: expected 8 ranks, found {found}")]
    WrongRankCount { found: usize },

    #[error("Invalid FEN: rank {rank} does not describe 8 squares")]
    BadRankWidth { rank: usize },

    #[error("Invalid piece: {0}")]
    InvalidPiece(char),

    #[error("Invalid turn: {0}")]
    InvalidSideToMove(String),

    #[error("Invalid castling: {0}")]
    InvalidCastling(char),

    #[error("Invalid en passant square: {0}")]
    InvalidEnPassant(String),
}

/// Erros de validação de `SearchConfig`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search needs at least one worker thread")]
    NoThreads,

    #[error("maximum depth must be at least 1")]
    ZeroDepth,

    #[error("transposition table capacity must be positive")]
    ZeroTableCapacity,
}

/// Erros da busca paralela na raiz.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("a root search worker panicked")]
    WorkerPanicked,

    #[error("root task queue closed before dispatch")]
    TaskQueueClosed,
}
