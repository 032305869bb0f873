use serde::{Deserialize, Serialize};

/// Upper bound of the rubric: six single-choice categories worth 15 points each.
pub const MAX_TOTAL_SCORE: u32 = 90;
pub const EXCELLENT_MIN_SCORE: u32 = 81;
pub const APPROVED_MIN_SCORE: u32 = 61;
pub const APPROVED_WITH_RESERVE_MIN_SCORE: u32 = 36;

/// Final qualification outcome for a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Excellent,
    Approved,
    ApprovedWithReserve,
    NotApproved,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Excellent => "EXCELLENT",
            Decision::Approved => "APPROVED",
            Decision::ApprovedWithReserve => "APPROVED_WITH_RESERVE",
            Decision::NotApproved => "NOT_APPROVED",
        }
    }

    pub const fn is_approved(self) -> bool {
        !matches!(self, Decision::NotApproved)
    }

    pub fn summary(self, total: u32) -> String {
        match self {
            Decision::Excellent => {
                format!("excellent supplier ({total} of {MAX_TOTAL_SCORE} points)")
            }
            Decision::Approved => format!("supplier approved ({total} of {MAX_TOTAL_SCORE} points)"),
            Decision::ApprovedWithReserve => format!(
                "supplier approved with reserve ({total} points, {APPROVED_MIN_SCORE} needed for full approval)"
            ),
            Decision::NotApproved => format!(
                "supplier not approved ({total} points, minimum {APPROVED_WITH_RESERVE_MIN_SCORE})"
            ),
        }
    }
}

/// Map a total score onto the decision bands. Totals above the rubric maximum stay excellent.
pub fn classify(total: u32) -> Decision {
    if total >= EXCELLENT_MIN_SCORE {
        Decision::Excellent
    } else if total >= APPROVED_MIN_SCORE {
        Decision::Approved
    } else if total >= APPROVED_WITH_RESERVE_MIN_SCORE {
        Decision::ApprovedWithReserve
    } else {
        Decision::NotApproved
    }
}
