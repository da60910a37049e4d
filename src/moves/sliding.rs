// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Bispos, Torres e Damas)
// por ray casting sobre os bitboards.

use crate::core::{Bitboard, Move, PieceKind, Position, Square};

// Direções (coluna, fila)
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Percorre um raio até à borda ou até à primeira peça (incluída no resultado).
#[inline]
fn ray_attacks(square: Square, occupancy: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = 0u64;
    let file = (square % 8) as i8;
    let rank = (square / 8) as i8;

    for &(df, dr) in directions {
        let mut f = file + df;
        let mut r = rank + dr;
        while (0..8).contains(&f) && (0..8).contains(&r) {
            let bb = 1u64 << (r * 8 + f);
            attacks |= bb;
            // Qualquer peça bloqueia o raio
            if occupancy & bb != 0 {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &BISHOP_DIRECTIONS)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &ROOK_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Função genérica para gerar lances de Bispos, Torres e Damas a partir de `from_sq`.
pub fn generate_sliding_moves(pos: &Position, from_sq: Square, moves: &mut Vec<Move>) {
    let Some(piece) = pos.board.piece_at(from_sq) else { return };
    let our_pieces = pos.board.pieces(piece.color);
    let all_pieces = pos.board.occupied();

    let attacks = match piece.kind {
        PieceKind::Bishop => bishop_attacks(from_sq, all_pieces),
        PieceKind::Rook => rook_attacks(from_sq, all_pieces),
        PieceKind::Queen => queen_attacks(from_sq, all_pieces),
        _ => 0, // Não deve acontecer para esta função
    };

    // Filtra movimentos válidos (exclui nossas próprias peças)
    let mut valid_moves = attacks & !our_pieces;

    while valid_moves != 0 {
        let to_sq = valid_moves.trailing_zeros() as Square;
        moves.push(Move::new(from_sq, to_sq));
        valid_moves &= valid_moves - 1;
    }
}
