// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei (incluindo roques).

use crate::core::*;
use super::attacks::is_square_attacked;

/// Gera a tabela de ataques de rei para todas as 64 casas.
const fn generate_king_attacks_table() -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let king_pos = 1u64 << square;
        let mut attack_bb = 0u64;
        let s = square as i8;

        // Movimentos de um passo em todas as 8 direções.
        if s % 8 > 0 { attack_bb |= king_pos >> 1; } // Esquerda
        if s % 8 < 7 { attack_bb |= king_pos << 1; } // Direita
        if s / 8 > 0 { attack_bb |= king_pos >> 8; } // Baixo
        if s / 8 < 7 { attack_bb |= king_pos << 8; } // Cima
        if s % 8 > 0 && s / 8 > 0 { attack_bb |= king_pos >> 9; } // Baixo-Esquerda
        if s % 8 < 7 && s / 8 > 0 { attack_bb |= king_pos >> 7; } // Baixo-Direita
        if s % 8 > 0 && s / 8 < 7 { attack_bb |= king_pos << 7; } // Cima-Esquerda
        if s % 8 < 7 && s / 8 < 7 { attack_bb |= king_pos << 9; } // Cima-Direita

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

/// Tabela pré-calculada de ataques de rei para cada casa do tabuleiro.
static KING_ATTACKS: [Bitboard; 64] = generate_king_attacks_table();

/// Obtém o bitboard de ataque para um rei numa dada casa usando lookup table.
#[inline]
pub fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

/// Casas que têm de estar vazias entre o rei e a torre.
const fn castle_path(color: Color, side: CastleSide) -> Bitboard {
    let rank_shift = color.back_rank() * 8;
    let files: Bitboard = match side {
        CastleSide::KingSide => 0b0110_0000,  // f, g
        CastleSide::QueenSide => 0b0000_1110, // b, c, d
    };
    files << rank_shift
}

/// Verifica as condições de um roque para o rei de `color` na casa inicial.
fn can_castle(pos: &Position, color: Color, side: CastleSide) -> bool {
    if !pos.castling.has(color, side) {
        return false;
    }

    let board = &pos.board;
    let rook = Piece::new(PieceKind::Rook, color);
    if board.piece_bb(rook) & (1u64 << side.rook_from(color)) == 0 {
        return false;
    }

    if board.occupied() & castle_path(color, side) != 0 {
        return false;
    }

    // Origem, casa de passagem e destino do rei não podem estar atacadas
    let start = king_home(color);
    let dest = side.king_to(color);
    let transit = (start + dest) / 2;
    let enemy = !color;
    !is_square_attacked(board, start, enemy)
        && !is_square_attacked(board, transit, enemy)
        && !is_square_attacked(board, dest, enemy)
}

/// Gera os lances pseudo-legais do rei em `from_sq`.
pub fn generate_king_moves(pos: &Position, from_sq: Square, moves: &mut Vec<Move>) {
    let Some(king) = pos.board.piece_at(from_sq) else { return };
    let color = king.color;
    let our_pieces = pos.board.pieces(color);
    let mut valid_moves = king_attacks(from_sq) & !our_pieces;

    while valid_moves != 0 {
        let to_sq = valid_moves.trailing_zeros() as Square;
        moves.push(Move::new(from_sq, to_sq));
        valid_moves &= valid_moves - 1;
    }

    // Lógica de roque
    if from_sq == king_home(color) {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if can_castle(pos, color, side) {
                moves.push(Move::castling(color, side));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str) -> Vec<Move> {
        let pos = Position::from_fen(fen).unwrap();
        let from = pos.board.king_square(pos.side_to_move).unwrap();
        let mut moves = Vec::new();
        generate_king_moves(&pos, from, &mut moves);
        moves.into_iter().filter(|m| m.is_castling()).collect()
    }

    #[test]
    fn both_castles_when_path_is_clear() {
        let found = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(found, vec![
            Move::castling(Color::White, CastleSide::KingSide),
            Move::castling(Color::White, CastleSide::QueenSide),
        ]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").len(), 2);
    }

    #[test]
    fn no_castle_without_right_or_rook() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/4K2R w KQ - 0 1").len(), 1);
    }

    #[test]
    fn no_castle_through_occupied_or_attacked_squares() {
        // b1 ocupado bloqueia só o roque grande
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQ - 0 1"),
            vec![Move::castling(Color::White, CastleSide::KingSide)]
        );
        // Torre preta em f8 ataca f1 (casa de passagem)
        assert_eq!(
            castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"),
            vec![Move::castling(Color::White, CastleSide::QueenSide)]
        );
        // Rei em xeque não roca
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        // b1 atacado não impede o roque grande (o rei não passa por lá)
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").len(), 1);
    }

    #[test]
    fn king_table_edges() {
        assert_eq!(king_attacks(0).count_ones(), 3);
        assert_eq!(king_attacks(36).count_ones(), 8);
    }
}
