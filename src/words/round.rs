//! Round generation.
//!
//! Each round shows one spelling on the host screen and asks players to
//! find another spelling of the same set. The round also carries a full
//! labelled snapshot of the board (`decoys`), in cell index order.

use serde::{Deserialize, Serialize};

use super::pool::WordPool;
use crate::board::{Board, Owner};
use crate::core::{CellIndex, GameRng, Side};

/// Client-facing label for a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellLabel {
    #[serde(rename = "btnAnswer")]
    Unclaimed,
    #[serde(rename = "btnBlue")]
    SideA,
    #[serde(rename = "btnRed")]
    SideB,
}

impl From<Owner> for CellLabel {
    fn from(owner: Owner) -> Self {
        match owner {
            Owner::Unclaimed => CellLabel::Unclaimed,
            Owner::Claimed(Side::A) => CellLabel::SideA,
            Owner::Claimed(Side::B) => CellLabel::SideB,
        }
    }
}

/// One entry of the board snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCell {
    pub label: CellLabel,
    pub index: CellIndex,
}

/// Payload of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub round_number: u32,
    /// Spelling shown on the host screen.
    pub display_word: String,
    /// Spelling a player has to find.
    pub correct_answer: String,
    /// Board snapshot; `decoys[i].index == i`.
    pub decoys: Vec<LabeledCell>,
}

/// Label every cell of `board` in index order.
#[must_use]
pub fn snapshot(board: &Board) -> Vec<LabeledCell> {
    board
        .iter()
        .map(|(index, owner)| LabeledCell {
            label: owner.into(),
            index,
        })
        .collect()
}

/// Build the payload for `round_number`.
///
/// The word set is `pool.for_round(round_number)`. Its spellings are
/// shuffled (Fisher-Yates); the first becomes the display word and the
/// second the correct answer, so the two always differ.
#[must_use]
pub fn next_round(pool: &WordPool, round_number: u32, board: &Board, rng: &mut GameRng) -> Round {
    let mut words: Vec<&String> = pool.for_round(round_number).words().iter().collect();
    rng.shuffle(&mut words);

    Round {
        round_number,
        display_word: words[0].clone(),
        correct_answer: words[1].clone(),
        decoys: snapshot(board),
    }
}
