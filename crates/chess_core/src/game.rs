//! Standard chess as a [`Rules`] implementation, backed by `cozy-chess`.
//!
//! `cozy-chess` boards are copy-make, so undo is a stack of prior boards.
//! The position hashes of the current line are kept for repetition draws.

use cozy_chess::{Board, Color, File, GameStatus, Move, Piece, Square};

use crate::error::GameError;
use crate::rules::Rules;
use crate::types::{PieceKind, Side};

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// Boards before each applied move, with the move that left them.
    undo_stack: Vec<(Board, Move)>,
    /// Hashes of every position in the current line, the current one last.
    history: Vec<u64>,
}

impl Game {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let board = Board::from_fen(fen, false).map_err(|e| GameError::Fen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    pub fn from_board(board: Board) -> Self {
        let history = vec![board.hash()];
        Self {
            board,
            undo_stack: Vec::new(),
            history,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Number of moves applied since construction.
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    /// Formats a move in standard UCI notation (castling as `e1g1`).
    pub fn move_to_uci(&self, mv: Move) -> String {
        let castles = self.board.piece_on(mv.from) == Some(Piece::King)
            && self.board.colors(self.board.side_to_move()).has(mv.to);
        if !castles {
            return mv.to_string();
        }
        let file = if mv.to.file() as usize > mv.from.file() as usize {
            File::G
        } else {
            File::C
        };
        Move {
            from: mv.from,
            to: Square::new(file, mv.from.rank()),
            promotion: None,
        }
        .to_string()
    }

    /// Resolves a UCI move string against the legal moves of this position.
    pub fn parse_move(&self, uci: &str) -> Result<Move, GameError> {
        self.legal_moves()
            .into_iter()
            .find(|&mv| self.move_to_uci(mv) == uci || mv.to_string() == uci)
            .ok_or_else(|| GameError::IllegalMove {
                mv: uci.to_string(),
                fen: self.fen(),
            })
    }

    /// Plays a sequence of UCI moves, stopping at the first illegal one.
    pub fn play_uci(&mut self, moves: &[&str]) -> Result<(), GameError> {
        for uci in moves {
            let mv = self.parse_move(uci)?;
            self.apply(mv);
        }
        Ok(())
    }

    fn repetitions(&self) -> usize {
        let current = self.board.hash();
        self.history.iter().filter(|&&h| h == current).count()
    }

    /// Bare kings, or a single minor piece against a bare king.
    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        let minors = b.pieces(Piece::Knight) | b.pieces(Piece::Bishop);
        heavy.is_empty() && minors.len() <= 1
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

fn to_cozy_piece(kind: PieceKind) -> Piece {
    match kind {
        PieceKind::Pawn => Piece::Pawn,
        PieceKind::Knight => Piece::Knight,
        PieceKind::Bishop => Piece::Bishop,
        PieceKind::Rook => Piece::Rook,
        PieceKind::Queen => Piece::Queen,
        PieceKind::King => Piece::King,
    }
}

fn to_cozy_color(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}

impl Rules for Game {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn apply(&mut self, mv: Move) {
        self.undo_stack.push((self.board.clone(), mv));
        self.board.play_unchecked(mv);
        self.history.push(self.board.hash());
    }

    fn undo(&mut self, mv: Move) {
        let Some((prev, played)) = self.undo_stack.pop() else {
            panic!("undo of {mv} with no applied move");
        };
        debug_assert_eq!(played, mv, "undo out of LIFO order");
        self.board = prev;
        self.history.pop();
    }

    fn is_checkmate(&self) -> bool {
        self.board.status() == GameStatus::Won
    }

    fn is_draw(&self) -> bool {
        match self.board.status() {
            GameStatus::Drawn => true,
            GameStatus::Won => false,
            GameStatus::Ongoing => {
                self.board.halfmove_clock() >= 100
                    || self.repetitions() >= 3
                    || self.is_insufficient_material()
            }
        }
    }

    fn white_to_move(&self) -> bool {
        self.board.side_to_move() == Color::White
    }

    fn piece_count(&self, kind: PieceKind, side: Side) -> u32 {
        self.board
            .colored_pieces(to_cozy_color(side), to_cozy_piece(kind))
            .len()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
