// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use crate::core::{Bitboard, Move, Position, Square};

/// Gera a tabela de ataques de cavalo para todas as 64 casas.
const fn generate_knight_attacks_table() -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let mut attack_bb = 0u64;
        let file = (square % 8) as i8;
        let rank = (square / 8) as i8;

        // Os oito saltos em L (coluna, fila)
        let jumps: [(i8, i8); 8] = [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
        let mut i = 0;

        while i < jumps.len() {
            let f = file + jumps[i].0;
            let r = rank + jumps[i].1;

            // Verifica se o salto está dentro do tabuleiro
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                attack_bb |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

/// Tabela pré-calculada de ataques de cavalo para cada casa do tabuleiro.
static KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks_table();

/// Obtém o bitboard de ataque para um cavalo numa dada casa usando lookup table.
#[inline]
pub fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

/// Gera os lances pseudo-legais do cavalo em `from_sq`.
pub fn generate_knight_moves(pos: &Position, from_sq: Square, moves: &mut Vec<Move>) {
    let Some(knight) = pos.board.piece_at(from_sq) else { return };
    let our_pieces = pos.board.pieces(knight.color);
    let mut valid_moves = knight_attacks(from_sq) & !our_pieces;

    while valid_moves != 0 {
        let to_sq = valid_moves.trailing_zeros() as Square;
        moves.push(Move::new(from_sq, to_sq));
        valid_moves &= valid_moves - 1;
    }
}
