// Ficheiro: src/moves/perft.rs
// Descrição: Perft (contagem de folhas da árvore de lances legais) para validar o gerador.

use crate::core::{Move, Position};
use super::legal_moves;
use rayon::prelude::*;

/// Número de folhas da árvore de lances legais até `depth`.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(pos);

    // Bulk counting no último ply
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft(&pos.apply_move(mv), depth - 1))
        .sum()
}

/// Perft dividido pelos lances da raiz, calculado em paralelo (um lance por tarefa rayon).
/// A ordem do resultado é a ordem de geração.
pub fn perft_divide(pos: &Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = legal_moves(pos);
    moves
        .par_iter()
        .map(|&mv| (mv, perft(&pos.apply_move(mv), depth - 1)))
        .collect()
}
