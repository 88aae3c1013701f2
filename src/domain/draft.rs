//! Snake-draft core: pick ordering, draft-order assignment, and the
//! turn-validation pipeline used by the draft endpoints.
//!
//! Everything here is pure. The whole pick schedule is a function of two
//! integers (picks made so far, number of teams), so nothing beyond the
//! per-team `draft_order` permutation is ever persisted.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::league::{League, LeagueStatus};
use crate::domain::player::Player;
use crate::domain::team::Team;

/// Returns the 0-based index of the team holding overall pick `pick_number`,
/// into a team list sorted by ascending `draft_order`.
///
/// Round 0 runs forward through teams `0..n-1`, round 1 backward `n-1..0`,
/// and so on: the team picking last in one round picks first in the next.
///
/// # Preconditions
/// `pick_number >= 1` and `team_count >= 1`; callers must guard both.
pub fn snake_order(pick_number: u64, team_count: usize) -> usize {
    debug_assert!(pick_number >= 1, "pick numbers are 1-based");
    debug_assert!(team_count >= 1, "team count must be positive");

    let n = team_count as u64;
    let round = (pick_number - 1) / n;
    let position = ((pick_number - 1) % n) as usize;

    if round % 2 == 0 {
        position
    } else {
        team_count - 1 - position
    }
}

/// Index of the team expected to make the next pick, given how many players
/// have been drafted so far.
pub fn current_pick_index(drafted_count: u64, team_count: usize) -> usize {
    snake_order(drafted_count + 1, team_count)
}

/// Produces the `draft_order` values `1..=team_count` for teams taken in
/// creation order. With `randomized` set, the sequence is permuted with a
/// Fisher-Yates shuffle driven by the supplied RNG; otherwise it is the
/// identity order.
///
/// The RNG is injected so tests can seed a [`rand::rngs::StdRng`] and assert
/// exact assignments.
pub fn draft_order_sequence<R: Rng>(team_count: usize, randomized: bool, rng: &mut R) -> Vec<i32> {
    let mut order: Vec<i32> = (1..=team_count as i32).collect();
    if randomized {
        order.shuffle(rng);
    }
    order
}

/// Validates a pick submission against the current draft state.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. the league must be drafting (`InvalidState`);
/// 2. the player must still be undrafted (`Conflict`);
/// 3. the caller must be a member of the submitting team (`Forbidden`);
/// 4. the team must hold the current pick slot per [`snake_order`] over
///    `ordered_teams` (`Conflict`).
///
/// Entity existence (league, player, team all in the same league) is the
/// caller's lookup concern and precedes these checks. This function reads
/// state and never mutates it.
pub fn validate_pick(
    league: &League,
    player: &Player,
    team: &Team,
    user_id: Uuid,
    ordered_teams: &[Team],
    drafted_count: u64,
) -> DomainResult<()> {
    if league.status != LeagueStatus::Draft {
        return Err(DomainError::invalid_state("League is not in draft mode"));
    }

    if player.drafted_by.is_some() {
        return Err(DomainError::conflict("Player already drafted"));
    }

    if !team.is_member(user_id) {
        return Err(DomainError::forbidden("You are not a member of this team"));
    }

    if ordered_teams.is_empty() {
        return Err(DomainError::validation("League has no teams"));
    }

    let expected = current_pick_index(drafted_count, ordered_teams.len());
    if ordered_teams[expected].id != team.id {
        return Err(DomainError::conflict("It is not your turn to pick"));
    }

    Ok(())
}
