// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard projection.
//!
//! The leaderboard is never stored: every read merges the live user into the
//! static roster for the user's current rank and sorts the result.

use crate::models::{CommunityMember, User};

/// ID given to the current user when the roster has no entry for them.
pub const CURRENT_USER_ID: u32 = 99;
/// Name shown for the current user.
pub const CURRENT_USER_NAME: &str = "Tu";
/// Avatar initial for the current user.
pub const CURRENT_USER_AVATAR: &str = "T";

/// Merge `user` into `roster` and sort descending by points.
///
/// The first roster entry marked as the current user is replaced in place
/// with live points; any further marked entries are dropped. Without one, a
/// synthetic entry is appended. The sort is stable, so ties keep roster order.
pub fn project(roster: &[CommunityMember], user: &User) -> Vec<CommunityMember> {
    let mut board: Vec<CommunityMember> = Vec::with_capacity(roster.len() + 1);
    let mut placed = false;

    for member in roster {
        if member.is_current_user {
            if placed {
                continue;
            }
            placed = true;
            board.push(CommunityMember {
                points: user.points,
                rank: user.rank,
                is_current_user: true,
                ..member.clone()
            });
        } else {
            board.push(member.clone());
        }
    }

    if !placed {
        board.push(CommunityMember {
            id: CURRENT_USER_ID,
            name: CURRENT_USER_NAME.to_string(),
            points: user.points,
            rank: user.rank,
            avatar: CURRENT_USER_AVATAR.to_string(),
            is_current_user: true,
        });
    }

    board.sort_by(|a, b| b.points.cmp(&a.points));
    board
}

/// 1-based position of the current user in a projected board.
pub fn position(board: &[CommunityMember]) -> Option<usize> {
    board.iter().position(|m| m.is_current_user).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rank, SeedProfile};

    fn member(id: u32, name: &str, points: i64, rank: Rank) -> CommunityMember {
        CommunityMember {
            id,
            name: name.to_string(),
            points,
            rank,
            avatar: name[..1].to_string(),
            is_current_user: false,
        }
    }

    fn user_with_points(points: i64) -> User {
        User::from_seed(&SeedProfile {
            points,
            ..SeedProfile::default()
        })
    }

    #[test]
    fn test_appends_when_absent() {
        let roster = vec![
            member(1, "Emma", 680, Rank::Bronze),
            member(2, "Luis", 620, Rank::Bronze),
        ];
        let board = project(&roster, &user_with_points(650));

        assert_eq!(board.len(), 3);
        assert_eq!(board[1].id, CURRENT_USER_ID);
        assert_eq!(board[1].name, CURRENT_USER_NAME);
        assert_eq!(position(&board), Some(2));
    }

    #[test]
    fn test_replaces_marked_entry() {
        let mut you = member(3, "Tu", 1150, Rank::Silver);
        you.is_current_user = true;
        let roster = vec![member(1, "Maria", 1420, Rank::Silver), you];

        let board = project(&roster, &user_with_points(1450));

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].id, 3);
        assert_eq!(board[0].points, 1450);
        assert_eq!(position(&board), Some(1));
    }

    #[test]
    fn test_duplicate_markers_collapse_to_one() {
        let mut a = member(3, "Tu", 1, Rank::Silver);
        a.is_current_user = true;
        let mut b = member(4, "Tu", 2, Rank::Silver);
        b.is_current_user = true;

        let board = project(&[a, b], &user_with_points(900));

        assert_eq!(board.iter().filter(|m| m.is_current_user).count(), 1);
        assert_eq!(board[0].id, 3);
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let roster = vec![
            member(1, "Ana", 500, Rank::Bronze),
            member(2, "Bea", 500, Rank::Bronze),
            member(3, "Cam", 600, Rank::Bronze),
        ];
        let board = project(&roster, &user_with_points(500));
        let ids: Vec<u32> = board.iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![3, 1, 2, CURRENT_USER_ID]);
    }

    #[test]
    fn test_empty_roster_yields_only_user() {
        let board = project(&[], &user_with_points(100));
        assert_eq!(board.len(), 1);
        assert!(board[0].is_current_user);
    }
}
