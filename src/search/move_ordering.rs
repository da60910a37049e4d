use crate::core::*;

const PROMOTION_BONUS: i32 = 900;

/// Ordena movimentos para maximizar podas Alpha-Beta.
/// `hint` (melhor lance de uma iteração anterior) vai sempre à frente.
/// Ordenação estável: empates mantêm a ordem de geração.
#[inline]
pub fn order_moves(pos: &Position, moves: &mut [Move], hint: Option<Move>) {
    moves.sort_by_cached_key(|&mv| {
        let score = if Some(mv) == hint { i32::MAX } else { score_move(pos, mv) };
        std::cmp::Reverse(score)
    });
}

/// Pontua movimento para ordenação (quanto maior, melhor).
/// MVV-LVA (Most Valuable Victim - Least Valuable Attacker): vítima * 100 - atacante.
#[inline]
pub fn score_move(pos: &Position, mv: Move) -> i32 {
    let mut score = 0;

    if let Some(victim_sq) = pos.captured_square(mv) {
        let victim = pos.board.piece_at(victim_sq).map_or(0, |p| p.kind.value());
        let attacker = pos.board.piece_at(mv.from).map_or(0, |p| p.kind.value());
        score += victim * 100 - attacker;
    }

    // Promoções
    if mv.promotion.is_some() {
        score += PROMOTION_BONUS;
    }

    score
}

/// Verifica se o lance captura alguma peça (en passant incluído).
#[inline]
pub fn is_capture(pos: &Position, mv: Move) -> bool {
    pos.captured_square(mv).is_some()
}
