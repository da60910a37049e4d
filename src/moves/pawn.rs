// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões (avanços, capturas, en passant e promoções).

use crate::core::*;

/// Gera a tabela de ataques de peão de uma cor para as 64 casas.
const fn generate_pawn_attacks_table(white: bool) -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let file = (square % 8) as i8;
        let rank = (square / 8) as i8;
        let forward = if white { 1 } else { -1 };
        let r = rank + forward;
        let mut attack_bb = 0u64;

        if r >= 0 && r < 8 {
            if file > 0 { attack_bb |= 1u64 << (r * 8 + file - 1); }
            if file < 7 { attack_bb |= 1u64 << (r * 8 + file + 1); }
        }

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

// Tabelas de ataques de peão
static WHITE_PAWN_ATTACKS: [Bitboard; 64] = generate_pawn_attacks_table(true);
static BLACK_PAWN_ATTACKS: [Bitboard; 64] = generate_pawn_attacks_table(false);

/// Casas atacadas por um peão da cor `color` em `square`.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

/// Empurra o lance, expandindo para as quatro promoções na última fila.
#[inline]
fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square, color: Color) {
    if rank_of(to) == color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::with_promotion(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Gera os lances pseudo-legais do peão em `from_sq`.
pub fn generate_pawn_moves(pos: &Position, from_sq: Square, moves: &mut Vec<Move>) {
    let Some(pawn) = pos.board.piece_at(from_sq) else { return };
    let color = pawn.color;
    let all_pieces = pos.board.occupied();
    let enemy_pieces = pos.board.pieces(!color);

    // Peão na última fila não tem avanço (só acontece em posições construídas)
    if rank_of(from_sq) == color.promotion_rank() {
        return;
    }

    // Avanço simples e duplo
    let one = if color == Color::White { from_sq + 8 } else { from_sq - 8 };
    if all_pieces & (1u64 << one) == 0 {
        push_pawn_move(moves, from_sq, one, color);

        if rank_of(from_sq) == color.pawn_home_rank() {
            let two = if color == Color::White { from_sq + 16 } else { from_sq - 16 };
            if all_pieces & (1u64 << two) == 0 {
                moves.push(Move::new(from_sq, two));
            }
        }
    }

    // Capturas diagonais
    let attacks = pawn_attacks(color, from_sq);
    let mut captures = attacks & enemy_pieces;
    while captures != 0 {
        let to_sq = captures.trailing_zeros() as Square;
        push_pawn_move(moves, from_sq, to_sq, color);
        captures &= captures - 1;
    }

    // En passant: a casa alvo está vazia, por isso não entra nas capturas acima
    if let Some(ep) = pos.en_passant {
        if attacks & (1u64 << ep) != 0 && all_pieces & (1u64 << ep) == 0 {
            moves.push(Move::new(from_sq, ep));
        }
    }
}
