use crate::core::*;
use crate::moves::{generate_all_moves, is_legal_move};
use crate::search::evaluation::evaluate_relative;
use crate::search::move_ordering::{is_capture, order_moves};
use super::{NodeCounter, Score, Depth};

/// Busca Quiescente - explora capturas além da profundidade limite
pub fn quiescence_search(
    pos: &Position,
    mut alpha: Score,
    beta: Score,
    qs_depth: Depth,
    counter: &mut NodeCounter,
) -> Score {
    // Stand-pat: avaliação estática
    let stand_pat = evaluate_relative(pos);

    if counter.exhausted() {
        return stand_pat;
    }
    counter.tick();

    // Limite de profundidade quiescente
    if qs_depth == 0 {
        return stand_pat;
    }

    // Beta cutoff
    if stand_pat >= beta {
        return beta;
    }

    // Melhora alpha
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut captures = generate_captures(pos);
    if captures.is_empty() {
        return alpha;
    }

    order_moves(pos, &mut captures, None);

    for mv in captures {
        let child = pos.apply_move(mv);
        let score = -quiescence_search(&child, -beta, -alpha, qs_depth - 1, counter);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Capturas legais (en passant incluído).
fn generate_captures(pos: &Position) -> Vec<Move> {
    let mut moves = generate_all_moves(pos);
    moves.retain(|&mv| is_capture(pos, mv) && is_legal_move(pos, mv));
    moves
}
