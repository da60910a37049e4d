// Zobrist hashing para a tabela de transposição
use crate::core::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

// Semente fixa: o mesmo hash em todas as execuções e em todas as threads
const ZOBRIST_SEED: u64 = 0x6c61_6e63_655f_7a62;

pub struct ZobristKeys {
    pub pieces: [[[u64; 64]; 6]; 2],  // [color][piece_type][square]
    pub castling: [u64; 16],          // Para direitos de roque
    pub en_passant: [u64; 8],         // Para en passant por coluna
    pub side_to_move: u64,            // Para quem joga
}

impl ZobristKeys {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut keys = ZobristKeys {
            pieces: [[[0; 64]; 6]; 2],
            castling: [0; 16],
            en_passant: [0; 8],
            side_to_move: 0,
        };

        for color in keys.pieces.iter_mut() {
            for piece in color.iter_mut() {
                for square in piece.iter_mut() {
                    *square = rng.gen();
                }
            }
        }

        // Índice 0 (sem direitos) fica a zero
        for key in keys.castling.iter_mut().skip(1) {
            *key = rng.gen();
        }

        for key in keys.en_passant.iter_mut() {
            *key = rng.gen();
        }

        keys.side_to_move = rng.gen();

        keys
    }

    #[inline]
    pub fn piece(&self, piece: Piece, square: Square) -> u64 {
        self.pieces[piece.color.index()][piece.kind.index()][square as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

static ZOBRIST_KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// Instância global das chaves Zobrist (inicializada na primeira chamada).
#[inline]
pub fn zobrist_keys() -> &'static ZobristKeys {
    ZOBRIST_KEYS.get_or_init(ZobristKeys::new)
}
