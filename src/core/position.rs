// Ficheiro: src/core/position.rs
// Descrição: Estado completo de um nó de busca (tabuleiro, vez, roques, en passant)
// e a aplicação de lances (copy-make e make/unmake).

use super::board::Board;
use super::types::*;
use super::zobrist::zobrist_keys;
use crate::error::FenError;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Posição de jogo. É `Copy`: cada ramo da busca recebe a sua própria cópia.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl Position {
    /// Posição inicial padrão.
    pub fn new() -> Self {
        Position {
            board: Board::new(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
        }
    }

    /// Cria uma posição a partir de uma string FEN.
    /// Os contadores de lances (campos 5 e 6) são opcionais e ignorados.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 || parts.len() > 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let board = Board::from_fen_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if parts[2] != "-" {
            for ch in parts[2].chars() {
                match ch {
                    'K' => castling.grant(Color::White, CastleSide::KingSide),
                    'Q' => castling.grant(Color::White, CastleSide::QueenSide),
                    'k' => castling.grant(Color::Black, CastleSide::KingSide),
                    'q' => castling.grant(Color::Black, CastleSide::QueenSide),
                    _ => return Err(FenError::InvalidCastling(ch)),
                }
            }
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant(parts[3].to_string());
            let sq = parse_square(parts[3]).ok_or_else(invalid)?;
            // Só a casa saltada por um avanço duplo do adversário, vazia e com o peão à frente
            let (target_rank, pawn_sq) = match side_to_move {
                Color::White => (5, sq.wrapping_sub(8)),
                Color::Black => (2, sq.wrapping_add(8)),
            };
            if rank_of(sq) != target_rank
                || board.piece_at(sq).is_some()
                || board.piece_at(pawn_sq) != Some(Piece::new(PieceKind::Pawn, !side_to_move))
            {
                return Err(invalid());
            }
            Some(sq)
        };

        Ok(Position { board, side_to_move, castling, en_passant })
    }

    /// FEN da posição (contadores fixos em "0 1").
    pub fn to_fen(&self) -> String {
        let side = if self.side_to_move == Color::White { "w" } else { "b" };
        let ep = self.en_passant.map(to_algebraic).unwrap_or_else(|| "-".to_string());
        format!("{} {} {} {} 0 1", self.board.fen_placement(), side, self.castling, ep)
    }

    /// Hash Zobrist da posição: colocação + vez + roques + coluna de en passant.
    pub fn hash(&self) -> u64 {
        let keys = zobrist_keys();
        let mut hash = self.board.zobrist_hash;
        hash ^= keys.castling[self.castling.bits() as usize];
        if let Some(ep) = self.en_passant {
            hash ^= keys.en_passant[file_of(ep) as usize];
        }
        if self.side_to_move == Color::Black {
            hash ^= keys.side_to_move;
        }
        hash
    }

    /// Verifica se o lance é uma captura en passant (peão na diagonal para a casa alvo vazia).
    pub fn is_en_passant(&self, mv: Move) -> bool {
        self.en_passant == Some(mv.to)
            && file_of(mv.from) != file_of(mv.to)
            && self.board.piece_at(mv.to).is_none()
            && (self.board.pawns & (1u64 << mv.from)) != 0
    }

    /// Casa da peça capturada pelo lance, se houver.
    pub fn captured_square(&self, mv: Move) -> Option<Square> {
        if mv.is_castling() {
            return None;
        }
        if self.is_en_passant(mv) {
            return Some(square_at(file_of(mv.to), rank_of(mv.from)));
        }
        self.board.piece_at(mv.to).map(|_| mv.to)
    }

    /// Executa um lance, devolvendo a nova posição (o original não é alterado).
    pub fn apply_move(&self, mv: Move) -> Position {
        let mut next = *self;
        next.make_move(mv);
        next
    }

    /// Executa um lance no próprio estado e devolve a informação para o desfazer.
    pub fn make_move(&mut self, mv: Move) -> UndoInfo {
        let us = self.side_to_move;
        let mut undo = UndoInfo {
            moved_piece: None,
            captured_piece: None,
            captured_square: mv.to,
            old_castling_rights: self.castling,
            old_en_passant_target: self.en_passant,
        };

        // Reset en passant target
        let ep_before = self.en_passant;
        self.en_passant = None;

        if let Some(side) = mv.castle {
            // Rei e torre mudam juntos
            undo.moved_piece = self.board.remove_piece(mv.from);
            if let Some(king) = undo.moved_piece {
                self.board.put_piece(mv.to, king);
            }
            if let Some(rook) = self.board.remove_piece(side.rook_from(us)) {
                self.board.put_piece(side.rook_to(us), rook);
            }
            self.castling.clear_color(us);
        } else if let Some(moved) = self.board.remove_piece(mv.from) {
            undo.moved_piece = Some(moved);

            let is_en_passant = moved.kind == PieceKind::Pawn
                && ep_before == Some(mv.to)
                && file_of(mv.from) != file_of(mv.to)
                && self.board.piece_at(mv.to).is_none();

            if is_en_passant {
                // O peão capturado está ao lado do destino, não no destino
                undo.captured_square = square_at(file_of(mv.to), rank_of(mv.from));
            }
            undo.captured_piece = self.board.remove_piece(undo.captured_square);

            let placed = match mv.promotion {
                Some(kind) => Piece::new(kind, us),
                None => moved,
            };
            self.board.put_piece(mv.to, placed);

            match moved.kind {
                PieceKind::Pawn => {
                    // Avanço duplo a partir da fila inicial abre en passant
                    if rank_of(mv.from) == us.pawn_home_rank() && mv.to.abs_diff(mv.from) == 16 {
                        self.en_passant = Some((mv.from + mv.to) / 2);
                    }
                }
                PieceKind::King => self.castling.clear_color(us),
                PieceKind::Rook => self.castling.clear_for_corner(mv.from),
                _ => {}
            }

            // Torre capturada no seu canto leva o direito consigo
            if undo.captured_piece.is_some() {
                self.castling.clear_for_corner(undo.captured_square);
            }
        }

        self.side_to_move = !us;
        undo
    }

    /// Desfaz um lance aplicado com `make_move`.
    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        let us = !self.side_to_move;

        if let Some(side) = mv.castle {
            if let Some(rook) = self.board.remove_piece(side.rook_to(us)) {
                self.board.put_piece(side.rook_from(us), rook);
            }
            self.board.remove_piece(mv.to);
        } else {
            self.board.remove_piece(mv.to);
        }

        if let Some(moved) = undo.moved_piece {
            self.board.put_piece(mv.from, moved);
        }
        if let Some(captured) = undo.captured_piece {
            self.board.put_piece(undo.captured_square, captured);
        }

        self.castling = undo.old_castling_rights;
        self.en_passant = undo.old_en_passant_target;
        self.side_to_move = us;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
