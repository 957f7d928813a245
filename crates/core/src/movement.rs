//! Movement policies
//!
//! Each player/gravity movement resolves to one of three branches:
//!
//! - `Apply`: replace the active piece with the candidate
//! - `Blocked`: leave the pieces untouched
//! - `LockAndAdvance`: lock the active piece, clear rows, promote the next piece
//!
//! The trigger conditions are deliberately not uniform across movements:
//!
//! | Movement | Apply | Blocked | LockAndAdvance |
//! |----------|-------|---------|----------------|
//! | Left/Right | no side hit, no piece hit | exactly one of side/piece hit | side hit **and** piece hit |
//! | Down | no bottom hit, no piece hit | never | bottom or piece hit |
//! | Rotate | no hit of any kind | any hit | never |

use crate::awareness::Awareness;
use crate::piece::Piece;
use crate::rotation::rotated;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    Down,
    Rotate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Apply,
    Blocked,
    LockAndAdvance,
}

impl Movement {
    /// Candidate position of `piece` after this movement.
    pub fn transform(&self, piece: &Piece) -> Piece {
        match self {
            Movement::Left => piece.shifted(0, -1),
            Movement::Right => piece.shifted(0, 1),
            Movement::Down => piece.shifted(1, 0),
            Movement::Rotate => rotated(piece).unwrap_or_else(|| piece.clone()),
        }
    }

    pub fn policy(&self, awareness: &Awareness) -> MoveOutcome {
        let hit_piece = awareness.will_hit_another_piece;
        match self {
            Movement::Left => side_policy(awareness.will_hit_left_side, hit_piece),
            Movement::Right => side_policy(awareness.will_hit_right_side, hit_piece),
            Movement::Down => {
                if awareness.will_hit_bottom || hit_piece {
                    MoveOutcome::LockAndAdvance
                } else {
                    MoveOutcome::Apply
                }
            }
            // Rotation never locks the piece.
            Movement::Rotate => {
                if awareness.hits_anything() {
                    MoveOutcome::Blocked
                } else {
                    MoveOutcome::Apply
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::Left => "left",
            Movement::Right => "right",
            Movement::Down => "down",
            Movement::Rotate => "rotate",
        }
    }
}

fn side_policy(hit_side: bool, hit_piece: bool) -> MoveOutcome {
    match (hit_side, hit_piece) {
        (false, false) => MoveOutcome::Apply,
        (true, false) | (false, true) => MoveOutcome::Blocked,
        (true, true) => MoveOutcome::LockAndAdvance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::spawn_piece;
    use crate::types::{Color, PieceType};

    fn awareness(bottom: bool, left: bool, right: bool, piece: bool) -> Awareness {
        let p = spawn_piece(PieceType::Square, Color::GRAY);
        Awareness {
            active: p.clone(),
            candidate: p,
            will_hit_bottom: bottom,
            will_hit_left_side: left,
            will_hit_right_side: right,
            will_hit_another_piece: piece,
        }
    }

    #[test]
    fn test_side_moves() {
        use MoveOutcome::*;
        let cases = [
            (awareness(false, false, false, false), Apply, Apply),
            (awareness(false, true, false, false), Blocked, Apply),
            (awareness(false, false, true, false), Apply, Blocked),
            (awareness(false, false, false, true), Blocked, Blocked),
            (awareness(false, true, false, true), LockAndAdvance, Blocked),
            (awareness(false, false, true, true), Blocked, LockAndAdvance),
            // bottom is irrelevant for sideways moves
            (awareness(true, false, false, false), Apply, Apply),
        ];
        for (a, left, right) in cases {
            assert_eq!(Movement::Left.policy(&a), left, "{a:?}");
            assert_eq!(Movement::Right.policy(&a), right, "{a:?}");
        }
    }

    #[test]
    fn test_down_locks_on_bottom_or_piece() {
        assert_eq!(
            Movement::Down.policy(&awareness(false, false, false, false)),
            MoveOutcome::Apply
        );
        assert_eq!(
            Movement::Down.policy(&awareness(true, false, false, false)),
            MoveOutcome::LockAndAdvance
        );
        assert_eq!(
            Movement::Down.policy(&awareness(false, false, false, true)),
            MoveOutcome::LockAndAdvance
        );
        // side flags cannot come from a downward shift, and are ignored
        assert_eq!(
            Movement::Down.policy(&awareness(false, true, true, false)),
            MoveOutcome::Apply
        );
    }

    #[test]
    fn test_rotate_never_locks() {
        for bits in 0u8..16 {
            let a = awareness(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let outcome = Movement::Rotate.policy(&a);
            assert_ne!(outcome, MoveOutcome::LockAndAdvance);
            assert_eq!(outcome == MoveOutcome::Apply, bits == 0);
        }
    }

    #[test]
    fn test_transforms() {
        let piece = spawn_piece(PieceType::UppercaseI, Color::GRAY);
        assert!(Movement::Left.transform(&piece).occupies(1, 5));
        assert!(Movement::Right.transform(&piece).occupies(1, 7));
        assert!(Movement::Down.transform(&piece).occupies(5, 6));
        assert!(Movement::Rotate.transform(&piece).occupies(1, 9));
    }
}
