// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances de cada peça e
// a filtragem de legalidade.

pub mod attacks;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod perft;
pub mod sliding;

pub use attacks::{in_check, is_square_attacked};
pub use perft::{perft, perft_divide};

use crate::core::*;

/// Lances pseudo-legais da peça em `square` (vazio se a casa estiver vazia).
pub fn pseudo_legal_moves(pos: &Position, square: Square) -> Vec<Move> {
    let mut moves = Vec::with_capacity(28);
    pseudo_legal_moves_into(pos, square, &mut moves);
    moves
}

fn pseudo_legal_moves_into(pos: &Position, square: Square, moves: &mut Vec<Move>) {
    let Some(piece) = pos.board.piece_at(square) else { return };
    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(pos, square, moves),
        PieceKind::Knight => knight::generate_knight_moves(pos, square, moves),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            sliding::generate_sliding_moves(pos, square, moves)
        }
        PieceKind::King => king::generate_king_moves(pos, square, moves),
    }
}

/// Gera todos os lances pseudo-legais do jogador atual, por ordem de casa.
pub fn generate_all_moves(pos: &Position) -> Vec<Move> {
    // Pre-aloca com capacidade estimada para reduzir realocações
    let mut moves = Vec::with_capacity(64);
    let mut ours = pos.board.pieces(pos.side_to_move);
    while ours != 0 {
        let square = ours.trailing_zeros() as Square;
        pseudo_legal_moves_into(pos, square, &mut moves);
        ours &= ours - 1;
    }
    moves
}

/// Verifica se um lance pseudo-legal não deixa o próprio rei em xeque.
#[inline]
pub fn is_legal_move(pos: &Position, mv: Move) -> bool {
    let next = pos.apply_move(mv);
    !in_check(&next.board, pos.side_to_move)
}

/// Gera apenas movimentos legais (filtra movimentos que deixam o rei em xeque).
/// A ordem é a de geração; a busca reordena.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut moves = generate_all_moves(pos);
    moves.retain(|&mv| is_legal_move(pos, mv));
    moves
}

/// Verifica se a posição atual é xeque-mate
pub fn is_checkmate(pos: &Position) -> bool {
    in_check(&pos.board, pos.side_to_move) && legal_moves(pos).is_empty()
}

/// Verifica se a posição atual é empate por afogamento
pub fn is_stalemate(pos: &Position) -> bool {
    !in_check(&pos.board, pos.side_to_move) && legal_moves(pos).is_empty()
}
