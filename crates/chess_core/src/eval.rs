//! Material evaluation and terminal classification.
//!
//! Two sign conventions live side by side and are kept as separate
//! functions:
//! - [`absolute`]: White material minus Black material. Alpha-beta leaves.
//! - [`side_relative`]: material from the point of view of the side that
//!   just moved, i.e. the side *not* to move. Shallow search.

use serde::{Deserialize, Serialize};

use crate::rules::Rules;
use crate::types::{PieceKind, Score, Side, MATE_SCORE};

/// Weight of each piece kind in centipawns, indexed by `PieceKind::idx()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Score; 6]", into = "[Score; 6]")]
pub struct PieceValueTable([Score; 6]);

impl PieceValueTable {
    /// Order: Pawn, Knight, Bishop, Rook, Queen, King.
    pub const DEFAULT: PieceValueTable = PieceValueTable([100, 300, 300, 500, 900, 100_000]);

    /// Builds a table, rejecting non-positive weights and kings that do not
    /// outweigh everything else a side could ever hold.
    pub fn new(values: [Score; 6]) -> Result<Self, String> {
        if let Some(kind) = PieceKind::ALL.iter().find(|k| values[k.idx()] <= 0) {
            return Err(format!("{kind:?} value must be positive"));
        }
        let king = values[PieceKind::King.idx()] as i64;
        let queen = values[PieceKind::Queen.idx()] as i64;
        if king < queen * 100 || king <= Self::max_non_king_material(&values) {
            return Err(format!("King value {king} does not dominate the other pieces"));
        }
        Ok(Self(values))
    }

    #[inline]
    pub fn value(&self, kind: PieceKind) -> Score {
        self.0[kind.idx()]
    }

    pub fn values(&self) -> [Score; 6] {
        self.0
    }

    /// Most non-king material one side can hold: the starting officers
    /// plus all eight pawns promoted to the dearest non-king piece.
    fn max_non_king_material(values: &[Score; 6]) -> i64 {
        let v = |k: PieceKind| values[k.idx()] as i64;
        let officers = v(PieceKind::Queen)
            + 2 * (v(PieceKind::Rook) + v(PieceKind::Bishop) + v(PieceKind::Knight));
        let dearest = PieceKind::ALL[..5].iter().map(|&k| v(k)).max().unwrap_or(0);
        officers + 8 * dearest
    }
}

impl Default for PieceValueTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<[Score; 6]> for PieceValueTable {
    type Error = String;

    fn try_from(values: [Score; 6]) -> Result<Self, String> {
        Self::new(values)
    }
}

impl From<PieceValueTable> for [Score; 6] {
    fn from(table: PieceValueTable) -> Self {
        table.0
    }
}

/// Sum of piece weights for one side. Saturates instead of overflowing.
pub fn material<R: Rules>(pos: &R, table: &PieceValueTable, side: Side) -> Score {
    PieceKind::ALL.iter().fold(0, |acc: Score, &kind| {
        let count = Score::try_from(pos.piece_count(kind, side)).unwrap_or(Score::MAX);
        acc.saturating_add(count.saturating_mul(table.value(kind)))
    })
}

/// White material minus Black material.
pub fn absolute<R: Rules>(pos: &R, table: &PieceValueTable) -> Score {
    material(pos, table, Side::White).saturating_sub(material(pos, table, Side::Black))
}

/// Material balance for the side that just moved: positive when the side
/// *not* on move is ahead.
pub fn side_relative<R: Rules>(pos: &R, table: &PieceValueTable) -> Score {
    let balance = absolute(pos, table);
    if pos.white_to_move() {
        balance.saturating_neg()
    } else {
        balance
    }
}

/// Checkmate term in the absolute convention: the mated side to move gets
/// the unfavourable extreme, 0 when the position is not mate.
pub fn mate_term<R: Rules>(pos: &R) -> Score {
    if !pos.is_checkmate() {
        0
    } else if pos.white_to_move() {
        -MATE_SCORE
    } else {
        MATE_SCORE
    }
}

/// Absolute leaf score used by alpha-beta: material plus the mate term.
pub fn leaf_score<R: Rules>(pos: &R, table: &PieceValueTable) -> Score {
    absolute(pos, table).saturating_add(mate_term(pos))
}

/// Rating of a drawn position for the side that just moved: take the draw
/// when behind, avoid it when level or ahead.
pub fn draw_score<R: Rules>(pos: &R, table: &PieceValueTable) -> Score {
    if side_relative(pos, table) < 0 {
        MATE_SCORE
    } else {
        -MATE_SCORE
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
