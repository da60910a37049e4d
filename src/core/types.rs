// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;

// Um Bitboard é um inteiro de 64 bits sem sinal. Cada bit representa uma casa.
// Bit 0 = a1, Bit 1 = b1, ..., Bit 63 = h8.
pub type Bitboard = u64;

/// Índice de casa (0 = a1, 7 = h1, 56 = a8, 63 = h8).
pub type Square = u8;

#[inline]
pub const fn file_of(sq: Square) -> u8 {
    sq % 8
}

#[inline]
pub const fn rank_of(sq: Square) -> u8 {
    sq / 8
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Converte uma casa para notação algébrica ("e4").
pub fn to_algebraic(sq: Square) -> String {
    let file = (file_of(sq) + b'a') as char;
    let rank = (rank_of(sq) + b'1') as char;
    format!("{}{}", file, rank)
}

/// Lê uma casa em notação algébrica ("e3" -> 20).
pub fn parse_square(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a')?;
    let rank = bytes[1].checked_sub(b'1')?;
    if file > 7 || rank > 7 {
        return None;
    }
    Some(square_at(file, rank))
}

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// +1 para as brancas, -1 para as pretas (converte scores absolutos).
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Fila inicial dos peões desta cor.
    #[inline]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Fila de promoção desta cor.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Fila da primeira linha (rei e torres).
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Ordem de geração das promoções.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub const fn value(&self) -> i32 {
        match self {
            PieceKind::Pawn   => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook   => 500,
            PieceKind::Queen  => 900,
            PieceKind::King   => 20000, // Valor alto para evitar trocas
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Letra FEN da peça (maiúscula = brancas).
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White { c.to_ascii_uppercase() } else { c }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

/// Lado do roque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Casa da torre antes do roque.
    pub const fn rook_from(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        };
        square_at(file, color.back_rank())
    }

    /// Casa da torre depois do roque.
    pub const fn rook_to(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        };
        square_at(file, color.back_rank())
    }

    /// Casa de destino do rei.
    pub const fn king_to(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        };
        square_at(file, color.back_rank())
    }
}

/// Casa inicial do rei de cada cor.
pub const fn king_home(color: Color) -> Square {
    square_at(4, color.back_rank())
}

/// Direitos de roque. Bits: 0=K, 1=Q, 2=k, 3=q
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => 0b0001,
            (Color::White, CastleSide::QueenSide) => 0b0010,
            (Color::Black, CastleSide::KingSide) => 0b0100,
            (Color::Black, CastleSide::QueenSide) => 0b1000,
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    /// Só usado na leitura de FEN: durante o jogo os direitos apenas diminuem.
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit(color, side);
    }

    #[inline]
    pub fn clear(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit(color, side);
    }

    #[inline]
    pub fn clear_color(&mut self, color: Color) {
        self.clear(color, CastleSide::KingSide);
        self.clear(color, CastleSide::QueenSide);
    }

    /// Remove o direito associado a uma torre na sua casa inicial.
    pub fn clear_for_corner(&mut self, sq: Square) {
        for color in [Color::White, Color::Black] {
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                if side.rook_from(color) == sq {
                    self.clear(color, side);
                }
            }
        }
    }

    /// Índice 0..16 usado pelas chaves Zobrist.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        let flags = [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ];
        for (color, side, ch) in flags {
            if self.has(color, side) {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

// Struct para representar um lance no jogo.
// En passant não é marcado: deduz-se do peão, da casa alvo e do destino vazio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to, promotion: None, castle: None }
    }

    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move { from, to, promotion: Some(kind), castle: None }
    }

    pub const fn castling(color: Color, side: CastleSide) -> Self {
        Move {
            from: king_home(color),
            to: side.king_to(color),
            promotion: None,
            castle: Some(side),
        }
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        self.castle.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = to_algebraic(self.from);
        let to = to_algebraic(self.to);
        if let Some(p) = self.promotion {
            write!(f, "{}{}{}", from, to, p.to_char())
        } else {
            write!(f, "{}{}", from, to)
        }
    }
}

// ============================================================================
// COPY-MAKE / MAKE-UNMAKE
// ============================================================================

/// Estado necessário para desfazer um lance aplicado com `make_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    pub moved_piece: Option<Piece>,
    pub captured_piece: Option<Piece>,
    pub captured_square: Square,
    pub old_castling_rights: CastlingRights,
    pub old_en_passant_target: Option<Square>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_round_trip_on_corners() {
        assert_eq!(to_algebraic(0), "a1");
        assert_eq!(to_algebraic(63), "h8");
        assert_eq!(parse_square("e3"), Some(20));
        assert_eq!(parse_square("i9"), None);
        assert_eq!(parse_square("e"), None);
    }

    #[test]
    fn castling_rights_only_clear_what_is_asked() {
        let mut rights = CastlingRights::ALL;
        rights.clear_for_corner(7);
        assert!(!rights.has(Color::White, CastleSide::KingSide));
        assert!(rights.has(Color::White, CastleSide::QueenSide));
        rights.clear_color(Color::Black);
        assert_eq!(rights.to_string(), "Q");
    }

    #[test]
    fn move_display_uses_long_algebraic() {
        assert_eq!(Move::new(12, 28).to_string(), "e2e4");
        assert_eq!(Move::with_promotion(52, 60, PieceKind::Queen).to_string(), "e7e8q");
        assert_eq!(Move::castling(Color::Black, CastleSide::QueenSide).to_string(), "e8c8");
    }
}
