use serde::{Deserialize, Serialize};

use crate::domain::card::RankOrdering;

/// Режим оценки руки.
///
/// `low` – выбирать худшую (младшую) комбинацию вместо лучшей.
/// Руки, построенные с разным `ace_low`, между собой не сравниваются.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EvalMode {
    pub low: bool,
    pub ace_low: bool,
    pub ignore_straights: bool,
    pub ignore_flushes: bool,
}

impl EvalMode {
    /// Обычная старшая рука.
    pub const HIGH: EvalMode = EvalMode {
        low: false,
        ace_low: false,
        ignore_straights: false,
        ignore_flushes: false,
    };

    /// Ace-to-five low: туз младший, стриты и флеши не считаются.
    pub const ACE_TO_FIVE_LOW: EvalMode = EvalMode {
        low: true,
        ace_low: true,
        ignore_straights: true,
        ignore_flushes: true,
    };

    pub fn ordering(&self) -> RankOrdering {
        if self.ace_low {
            RankOrdering::AceLow
        } else {
            RankOrdering::AceHigh
        }
    }
}
