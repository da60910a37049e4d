// Ficheiro: src/moves/attacks.rs
// Descrição: Deteção de ataques e de xeque.

use crate::core::*;
use super::king::king_attacks;
use super::knight::knight_attacks;
use super::pawn::pawn_attacks;
use super::sliding::{bishop_attacks, rook_attacks};

/// Verifica se uma casa é atacada por peças da cor indicada.
///
/// Procura a partir da casa alvo: um peão de `by` ataca `square` exatamente
/// quando um peão da cor contrária em `square` atacaria a casa desse peão, e o
/// mesmo vale para cavalos, reis e raios das peças deslizantes.
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    let attacking_pieces = board.pieces(by);

    // Early exit: se não há peças atacantes, não há ataques
    if attacking_pieces == 0 {
        return false;
    }

    // Peões (mais comuns, verificar primeiro)
    if pawn_attacks(!by, square) & board.pawns & attacking_pieces != 0 {
        return true;
    }

    if knight_attacks(square) & board.knights & attacking_pieces != 0 {
        return true;
    }

    if king_attacks(square) & board.kings & attacking_pieces != 0 {
        return true;
    }

    // Peças deslizantes (mais lento, verificar por último)
    let occupied = board.occupied();
    let diagonal = (board.bishops | board.queens) & attacking_pieces;
    if diagonal != 0 && bishop_attacks(square, occupied) & diagonal != 0 {
        return true;
    }

    let straight = (board.rooks | board.queens) & attacking_pieces;
    straight != 0 && rook_attacks(square, occupied) & straight != 0
}

/// Verifica se o rei de `side` está em xeque.
/// Sem rei no tabuleiro a resposta é sempre "em xeque".
pub fn in_check(board: &Board, side: Color) -> bool {
    match board.king_square(side) {
        Some(king_sq) => is_square_attacked(board, king_sq, !side),
        None => true,
    }
}
