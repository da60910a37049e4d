use crate::core::*;

// Tabelas posicionais do ponto de vista das brancas, escritas de a8 (índice 0) a h1 (índice 63).
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

const CENTER: Bitboard = 0x0000_0018_1800_0000; // d4, e4, d5, e5
const CENTER_BONUS: i32 = 10;
const DEVELOPMENT_BONUS: i32 = 10;

// Casas iniciais de cavalos e bispos
const WHITE_MINOR_HOMES: Bitboard = 0x0000_0000_0000_0066; // b1, c1, f1, g1
const BLACK_MINOR_HOMES: Bitboard = 0x6600_0000_0000_0000; // b8, c8, f8, g8

/// Índice na tabela posicional (espelhada verticalmente para as pretas).
#[inline]
fn table_index(sq: Square, color: Color) -> usize {
    let rank = match color {
        Color::White => 7 - rank_of(sq),
        Color::Black => rank_of(sq),
    };
    (rank * 8 + file_of(sq)) as usize
}

fn table_score(mut bb: Bitboard, table: &[i32; 64], color: Color) -> i32 {
    let mut score = 0;
    while bb != 0 {
        let sq = bb.trailing_zeros() as Square;
        score += table[table_index(sq, color)];
        bb &= bb - 1;
    }
    score
}

/// Avaliação estática em centipawns, positiva a favor das brancas.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let sign = color.sign();
        let ours = board.pieces(color);

        // Material
        for kind in PieceKind::ALL {
            score += sign * kind.value() * board.piece_count(color, kind) as i32;
        }

        // Tabelas de peões e cavalos
        score += sign * table_score(board.pawns & ours, &PAWN_TABLE, color);
        score += sign * table_score(board.knights & ours, &KNIGHT_TABLE, color);

        // Controle do centro
        score += sign * CENTER_BONUS * (ours & CENTER).count_ones() as i32;

        // Desenvolvimento: peças menores fora das casas iniciais
        let homes = if color == Color::White { WHITE_MINOR_HOMES } else { BLACK_MINOR_HOMES };
        let developed = (board.knights | board.bishops) & ours & !homes;
        score += sign * DEVELOPMENT_BONUS * developed.count_ones() as i32;
    }

    score
}

/// Avaliação do ponto de vista de quem joga.
#[inline]
pub fn evaluate_relative(pos: &Position) -> i32 {
    pos.side_to_move.sign() * evaluate(&pos.board)
}
