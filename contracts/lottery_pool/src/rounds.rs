use soroban_sdk::Env;

use crate::error::Error;
use crate::storage::Store;
use crate::types::{Round, RoundStatus, MIN_PARTICIPANTS};

pub struct Rounds;

impl Rounds {
    /// The zeroed Open round stored at initialization and after every
    /// terminal transition. Deadline stays unset until the first
    /// contribution arrives.
    pub fn open_next(env: &Env, next_id: u64) -> Round {
        let round = Round {
            id: next_id,
            status: RoundStatus::Open,
            opened_at: 0,
            closes_at: 0,
            drawn_at: 0,
            participant_count: 0,
            winner: None,
            total_normalized_value: 0,
            total_entries: 0,
            fee_owed: 0,
            prize_claimed: false,
            contribution_count: 0,
        };
        Store::set_round(env, &round);
        Store::set_current_round(env, next_id);
        round
    }

    /// Gate a contribution against the round's status, deadline and
    /// capacity. The deadline is evaluated lazily, here.
    pub fn ensure_accepting(round: &Round, now: u64, capacity: u32) -> Result<(), Error> {
        if round.status != RoundStatus::Open {
            return Err(Error::RoundNotOpen);
        }
        if round.closes_at != 0 && now >= round.closes_at {
            return Err(Error::RoundExpired);
        }
        if round.participant_count >= capacity {
            return Err(Error::RoundFull);
        }
        Ok(())
    }

    /// The first contribution fixes the round's window.
    pub fn fix_deadline(round: &mut Round, now: u64, duration: u64) {
        if round.closes_at == 0 {
            round.opened_at = now;
            round.closes_at = now + duration;
        }
    }

    /// Reaching capacity closes the round to further contributions.
    pub fn fill_if_at_capacity(round: &mut Round, capacity: u32) -> bool {
        if round.participant_count >= capacity {
            round.status = RoundStatus::Drawing;
            return true;
        }
        false
    }

    /// Move an expired Open round to Drawing; a round whose deadline was
    /// never fixed cannot expire. Errors unless the round ends up Drawing.
    pub fn ensure_drawing(round: &mut Round, now: u64) -> Result<(), Error> {
        if round.winner.is_some() {
            return Err(Error::AlreadyDrawn);
        }
        if round.status == RoundStatus::Open && round.closes_at != 0 && now >= round.closes_at {
            round.status = RoundStatus::Drawing;
        }
        if round.status != RoundStatus::Drawing {
            return Err(Error::NotDrawable);
        }
        Ok(())
    }

    /// A Drawing round below the participation floor cancels instead of
    /// drawing.
    pub fn below_participation_floor(round: &Round) -> bool {
        round.participant_count < MIN_PARTICIPANTS
    }

    /// Gate an explicit keeper cancellation: Open, past its deadline, and
    /// under the participation floor.
    pub fn ensure_cancellable(round: &Round, now: u64) -> Result<(), Error> {
        if round.status != RoundStatus::Open {
            return Err(Error::RoundNotOpen);
        }
        if round.closes_at == 0 || now < round.closes_at {
            return Err(Error::DeadlineNotReached);
        }
        if round.participant_count >= MIN_PARTICIPANTS {
            return Err(Error::TooManyParticipants);
        }
        Ok(())
    }
}
