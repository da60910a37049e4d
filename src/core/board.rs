// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board (colocação das peças) e os seus métodos principais.

use super::types::*;
use super::zobrist::zobrist_keys;
use crate::error::FenError;

// A struct principal do tabuleiro, usando Bitboards.
// Só guarda a colocação das peças: vez de jogar, roques e en passant vivem em `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // Bitboards para cada tipo de peça.
    pub pawns: Bitboard,
    pub knights: Bitboard,
    pub bishops: Bitboard,
    pub rooks: Bitboard,
    pub queens: Bitboard,
    pub kings: Bitboard,

    // Bitboards para as peças de cada cor.
    pub white_pieces: Bitboard,
    pub black_pieces: Bitboard,

    // Hash Zobrist incremental da colocação (peça, casa)
    pub zobrist_hash: u64,
}

impl Board {
    /// Tabuleiro vazio.
    pub const fn empty() -> Self {
        Board {
            pawns: 0, knights: 0, bishops: 0, rooks: 0, queens: 0, kings: 0,
            white_pieces: 0, black_pieces: 0,
            zobrist_hash: 0,
        }
    }

    /// Cria um novo tabuleiro na posição inicial padrão usando bitboards.
    pub fn new() -> Self {
        const WHITE_PAWNS: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_11111111_00000000;
        const WHITE_ROOKS: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_10000001;
        const WHITE_KNIGHTS: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_01000010;
        const WHITE_BISHOPS: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_00100100;
        const WHITE_QUEEN: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_00001000;
        const WHITE_KING: Bitboard = 0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_00010000;

        const BLACK_PAWNS: Bitboard = 0b00000000_11111111_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_ROOKS: Bitboard = 0b10000001_00000000_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_KNIGHTS: Bitboard = 0b01000010_00000000_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_BISHOPS: Bitboard = 0b00100100_00000000_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_QUEEN: Bitboard = 0b00001000_00000000_00000000_00000000_00000000_00000000_00000000_00000000;
        const BLACK_KING: Bitboard = 0b00010000_00000000_00000000_00000000_00000000_00000000_00000000_00000000;

        let mut board = Board {
            pawns: WHITE_PAWNS | BLACK_PAWNS,
            knights: WHITE_KNIGHTS | BLACK_KNIGHTS,
            bishops: WHITE_BISHOPS | BLACK_BISHOPS,
            rooks: WHITE_ROOKS | BLACK_ROOKS,
            queens: WHITE_QUEEN | BLACK_QUEEN,
            kings: WHITE_KING | BLACK_KING,
            white_pieces: WHITE_PAWNS | WHITE_ROOKS | WHITE_KNIGHTS | WHITE_BISHOPS | WHITE_QUEEN | WHITE_KING,
            black_pieces: BLACK_PAWNS | BLACK_ROOKS | BLACK_KNIGHTS | BLACK_BISHOPS | BLACK_QUEEN | BLACK_KING,
            zobrist_hash: 0,
        };

        board.zobrist_hash = board.compute_zobrist_hash();
        board
    }

    /// Lê o primeiro campo de uma FEN (colocação das peças).
    pub fn from_fen_placement(placement: &str) -> Result<Self, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRankCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx as u8;
            let mut file = 0u8;
            for ch in row.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    // Casas vazias
                    file = match file.checked_add(digit as u8) {
                        Some(next) if next <= 8 => next,
                        _ => return Err(FenError::BadRankWidth { rank: rank as usize + 1 }),
                    };
                } else {
                    let piece = Piece::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                    if file > 7 {
                        return Err(FenError::BadRankWidth { rank: rank as usize + 1 });
                    }
                    board.put_piece(square_at(file, rank), piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth { rank: rank as usize + 1 });
            }
        }

        Ok(board)
    }

    /// Campo de colocação no formato FEN.
    pub fn fen_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(square_at(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white_pieces | self.black_pieces
    }

    #[inline]
    pub fn pieces(&self, color: Color) -> Bitboard {
        if color == Color::White { self.white_pieces } else { self.black_pieces }
    }

    #[inline]
    pub fn kind_bb(&self, kind: PieceKind) -> Bitboard {
        match kind {
            PieceKind::Pawn => self.pawns,
            PieceKind::Knight => self.knights,
            PieceKind::Bishop => self.bishops,
            PieceKind::Rook => self.rooks,
            PieceKind::Queen => self.queens,
            PieceKind::King => self.kings,
        }
    }

    #[inline]
    fn kind_bb_mut(&mut self, kind: PieceKind) -> &mut Bitboard {
        match kind {
            PieceKind::Pawn => &mut self.pawns,
            PieceKind::Knight => &mut self.knights,
            PieceKind::Bishop => &mut self.bishops,
            PieceKind::Rook => &mut self.rooks,
            PieceKind::Queen => &mut self.queens,
            PieceKind::King => &mut self.kings,
        }
    }

    /// Bitboard das peças de um tipo e cor.
    #[inline]
    pub fn piece_bb(&self, piece: Piece) -> Bitboard {
        self.kind_bb(piece.kind) & self.pieces(piece.color)
    }

    /// Identifica a peça numa casa.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let bb = 1u64 << sq;
        let color = if self.white_pieces & bb != 0 {
            Color::White
        } else if self.black_pieces & bb != 0 {
            Color::Black
        } else {
            return None;
        };

        let kind = if (self.pawns & bb) != 0 { PieceKind::Pawn }
            else if (self.knights & bb) != 0 { PieceKind::Knight }
            else if (self.bishops & bb) != 0 { PieceKind::Bishop }
            else if (self.rooks & bb) != 0 { PieceKind::Rook }
            else if (self.queens & bb) != 0 { PieceKind::Queen }
            else { PieceKind::King };

        Some(Piece::new(kind, color))
    }

    /// Coloca uma peça numa casa vazia, atualizando o hash.
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        let bb = 1u64 << sq;
        *self.kind_bb_mut(piece.kind) |= bb;
        if piece.color == Color::White {
            self.white_pieces |= bb;
        } else {
            self.black_pieces |= bb;
        }
        self.zobrist_hash ^= zobrist_keys().piece(piece, sq);
    }

    /// Retira a peça de uma casa (se houver), atualizando o hash.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        let bb = 1u64 << sq;
        *self.kind_bb_mut(piece.kind) &= !bb;
        self.white_pieces &= !bb;
        self.black_pieces &= !bb;
        self.zobrist_hash ^= zobrist_keys().piece(piece, sq);
        Some(piece)
    }

    /// Casa do rei de uma cor (None se não existir).
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king_bb = self.kings & self.pieces(color);
        if king_bb == 0 {
            None
        } else {
            Some(king_bb.trailing_zeros() as Square)
        }
    }

    /// Retorna o número de peças de cada tipo para avaliação
    pub fn piece_count(&self, color: Color, piece_kind: PieceKind) -> u32 {
        (self.pieces(color) & self.kind_bb(piece_kind)).count_ones()
    }

    /// Calcula o hash Zobrist da colocação do zero.
    pub fn compute_zobrist_hash(&self) -> u64 {
        let keys = zobrist_keys();
        let mut hash = 0u64;
        let mut occupied = self.occupied();
        while occupied != 0 {
            let sq = occupied.trailing_zeros() as Square;
            occupied &= occupied - 1;
            if let Some(piece) = self.piece_at(sq) {
                hash ^= keys.piece(piece, sq);
            }
        }
        hash
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_matches_fen_placement() {
        let parsed = Board::from_fen_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
        assert_eq!(parsed, Board::new());
        assert_eq!(Board::new().fen_placement(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    }

    #[test]
    fn incremental_hash_tracks_put_and_remove() {
        let mut board = Board::new();
        let pawn = board.remove_piece(12).unwrap();
        assert_eq!(pawn, Piece::new(PieceKind::Pawn, Color::White));
        board.put_piece(28, pawn);
        assert_eq!(board.zobrist_hash, board.compute_zobrist_hash());
        assert_ne!(board.zobrist_hash, Board::new().zobrist_hash);
        assert_eq!(board.remove_piece(12), None);
    }

    #[test]
    fn bad_placement_is_rejected() {
        assert_eq!(
            Board::from_fen_placement("8/8/8/8/8/8/8"),
            Err(FenError::WrongRankCount { found: 7 })
        );
        assert_eq!(
            Board::from_fen_placement("9/8/8/8/8/8/8/8"),
            Err(FenError::BadRankWidth { rank: 8 })
        );
        // Dígitos demais numa fila não podem dar a volta ao contador
        let long_row = format!("{}/8/8/8/8/8/8/8", "9".repeat(30));
        assert_eq!(
            Board::from_fen_placement(&long_row),
            Err(FenError::BadRankWidth { rank: 8 })
        );
        assert_eq!(
            Board::from_fen_placement("44p3/8/8/8/8/8/8/8"),
            Err(FenError::BadRankWidth { rank: 8 })
        );
        assert_eq!(
            Board::from_fen_placement("x7/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPiece('x'))
        );
    }

    #[test]
    fn missing_king_has_no_square() {
        let board = Board::from_fen_placement("8/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(board.king_square(Color::White), Some(4));
        assert_eq!(board.king_square(Color::Black), None);
    }
}
