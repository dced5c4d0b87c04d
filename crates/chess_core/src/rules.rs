//! The narrow interface the search consumes from a rules engine.
//!
//! Searches never own a position. They borrow one mutably and explore it
//! through [`Rules::play`], which applies a move and hands back an
//! [`Applied`] guard that undoes it when dropped. Pruning breaks, early
//! returns and unwinding all release the guard, so apply/undo nest strictly
//! LIFO without the search having to remember it.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use crate::types::{PieceKind, Side};

/// Rules engine for a two-player perfect-information board game.
pub trait Rules {
    /// An opaque legal transition. The null move is expressed as
    /// `Option::<Self::Move>::None` wherever a move may be absent.
    type Move: Copy + Eq + Debug;

    /// Legal moves for the side to move, in the engine's native order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply `mv`. Must be paired with exactly one later [`Rules::undo`].
    fn apply(&mut self, mv: Self::Move);

    /// Revert the most recently applied move, which must be `mv`.
    fn undo(&mut self, mv: Self::Move);

    /// The side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// The game is drawn in this position (stalemate, repetition, ...).
    fn is_draw(&self) -> bool;

    fn white_to_move(&self) -> bool;

    fn piece_count(&self, kind: PieceKind, side: Side) -> u32;

    fn side_to_move(&self) -> Side {
        Side::from_white(self.white_to_move())
    }

    /// Apply `mv` for the lifetime of the returned guard.
    fn play(&mut self, mv: Self::Move) -> Applied<'_, Self>
    where
        Self: Sized,
    {
        Applied::new(self, mv)
    }
}

/// A move applied to a borrowed position; undone on drop.
pub struct Applied<'a, R: Rules> {
    rules: &'a mut R,
    mv: R::Move,
}

impl<'a, R: Rules> Applied<'a, R> {
    pub fn new(rules: &'a mut R, mv: R::Move) -> Self {
        rules.apply(mv);
        Self { rules, mv }
    }

    /// The move this guard holds applied.
    pub fn mv(&self) -> R::Move {
        self.mv
    }
}

impl<R: Rules> Deref for Applied<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rules
    }
}

impl<R: Rules> DerefMut for Applied<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.rules
    }
}

impl<R: Rules> Drop for Applied<'_, R> {
    fn drop(&mut self) {
        self.rules.undo(self.mv);
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
