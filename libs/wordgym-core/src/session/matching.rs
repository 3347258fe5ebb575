//! Tile-matching session: the two-player memory game and the single-player
//! pair-matching exercise share this machine.

use serde::{Deserialize, Serialize};

use crate::deck::Tile;
use crate::error::{CoreError, Result};
use crate::session::SessionPhase;
use crate::types::Player;

/// Outcome of a single flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FlipOutcome {
    /// First tile of a pair turned face up.
    Flipped,
    /// Second tile turned; the pair is pending and must be resolved after
    /// the reveal pause. `matched` tells the caller what resolution will do.
    PairPending { matched: bool },
}

/// Outcome of resolving a pending pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ResolveOutcome {
    /// Pair matched: tiles stay up, the current player scored.
    Matched { word_id: i64, completed: bool },
    /// Pair did not match: tiles turned back down, turn passed.
    Mismatched { next_player: usize },
}

/// State machine for one matching session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSession {
    tiles: Vec<Tile>,
    players: Vec<Player>,
    current_player: usize,
    flipped: Vec<usize>,
    phase: SessionPhase,
}

impl MatchSession {
    /// Create a session over a built deck. The session stays in
    /// `NotStarted` until `begin` validates the players.
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self {
            tiles,
            players: Vec::new(),
            current_player: 0,
            flipped: Vec::new(),
            phase: SessionPhase::NotStarted,
        }
    }

    /// Start the session with one or two players.
    ///
    /// Two-player mode requires mutually distinct colors; every player
    /// needs a non-empty name.
    pub fn begin(&mut self, players: Vec<Player>) -> Result<()> {
        if self.phase != SessionPhase::NotStarted {
            return Err(CoreError::SessionCompleted);
        }
        if players.is_empty() || players.len() > 2 {
            return Err(CoreError::InvalidPlayerCount {
                count: players.len(),
            });
        }
        if players.iter().any(|p| p.name.trim().is_empty()) {
            return Err(CoreError::EmptyPlayerName);
        }
        if players.len() == 2 && players[0].color == players[1].color {
            return Err(CoreError::DuplicateColors);
        }

        self.players = players;
        self.current_player = 0;
        self.phase = if self.tiles.is_empty() {
            // An empty deck has nothing left to match.
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress
        };
        Ok(())
    }

    /// Flip the tile at `index`.
    ///
    /// Rejected while a pair is pending (the third-flip gate), on matched
    /// or already-flipped tiles, and outside `InProgress`.
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome> {
        match self.phase {
            SessionPhase::NotStarted => return Err(CoreError::NotStarted),
            SessionPhase::Completed => return Err(CoreError::SessionCompleted),
            SessionPhase::AwaitingResolution => {
                return Err(CoreError::FlipRejected { index })
            }
            SessionPhase::InProgress => {}
        }

        let tile = self
            .tiles
            .get(index)
            .ok_or(CoreError::FlipRejected { index })?;
        if tile.flipped || tile.matched {
            return Err(CoreError::FlipRejected { index });
        }

        self.tiles[index].flipped = true;
        self.flipped.push(index);

        if self.flipped.len() < 2 {
            return Ok(FlipOutcome::Flipped);
        }

        self.phase = SessionPhase::AwaitingResolution;
        let matched = self.pending_pair_matches();
        Ok(FlipOutcome::PairPending { matched })
    }

    /// Resolve the pending pair after the reveal pause.
    pub fn resolve(&mut self) -> Result<ResolveOutcome> {
        if self.phase != SessionPhase::AwaitingResolution {
            return Err(CoreError::NothingToResolve);
        }

        let (first, second) = (self.flipped[0], self.flipped[1]);
        let outcome = if self.pending_pair_matches() {
            let word_id = self.tiles[first].word_id;
            self.tiles[first].matched = true;
            self.tiles[second].matched = true;
            self.players[self.current_player].score += 1;

            let completed = self.tiles.iter().all(|t| t.matched);
            self.phase = if completed {
                SessionPhase::Completed
            } else {
                SessionPhase::InProgress
            };
            ResolveOutcome::Matched { word_id, completed }
        } else {
            self.tiles[first].flipped = false;
            self.tiles[second].flipped = false;
            if self.players.len() == 2 {
                self.current_player = 1 - self.current_player;
            }
            self.phase = SessionPhase::InProgress;
            ResolveOutcome::Mismatched {
                next_player: self.current_player,
            }
        };

        self.flipped.clear();
        Ok(outcome)
    }

    fn pending_pair_matches(&self) -> bool {
        let a = &self.tiles[self.flipped[0]];
        let b = &self.tiles[self.flipped[1]];
        a.word_id == b.word_id && a.kind != b.kind
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Matched pair count; always equals the players' score sum.
    pub fn matched_pairs(&self) -> u32 {
        self.tiles.iter().filter(|t| t.matched).count() as u32 / 2
    }

    /// The winning player of a completed two-player game; `None` while the
    /// game is running, for single-player sessions, and on a tie.
    pub fn winner(&self) -> Option<&Player> {
        if self.phase != SessionPhase::Completed || self.players.len() < 2 {
            return None;
        }
        let (a, b) = (&self.players[0], &self.players[1]);
        match a.score.cmp(&b.score) {
            std::cmp::Ordering::Greater => Some(a),
            std::cmp::Ordering::Less => Some(b),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Tile, TileKind};
    use crate::types::{Player, PlayerColor};

    // A fixed four-pair deck laid out word/translation alternating, so
    // tests can address pairs deterministically.
    fn deck(pairs: i64) -> Vec<Tile> {
        (0..pairs)
            .flat_map(|id| {
                [
                    Tile {
                        word_id: id,
                        kind: TileKind::Word,
                        content: format!("word-{}", id),
                        flipped: false,
                        matched: false,
                    },
                    Tile {
                        word_id: id,
                        kind: TileKind::Translation,
                        content: format!("translation-{}", id),
                        flipped: false,
                        matched: false,
                    },
                ]
            })
            .collect()
    }

    fn two_players() -> Vec<Player> {
        vec![
            Player::new("Ayşe", PlayerColor::Red),
            Player::new("Mehmet", PlayerColor::Blue),
        ]
    }

    fn started(pairs: i64) -> MatchSession {
        let mut session = MatchSession::new(deck(pairs));
        session.begin(two_players()).unwrap();
        session
    }

    #[test]
    fn begin_rejects_duplicate_colors() {
        let mut session = MatchSession::new(deck(2));
        let players = vec![
            Player::new("Ayşe", PlayerColor::Red),
            Player::new("Mehmet", PlayerColor::Red),
        ];
        assert!(matches!(
            session.begin(players),
            Err(CoreError::DuplicateColors)
        ));
        assert_eq!(session.phase(), SessionPhase::NotStarted);
    }

    #[test]
    fn begin_rejects_empty_names() {
        let mut session = MatchSession::new(deck(2));
        let players = vec![
            Player::new("  ", PlayerColor::Red),
            Player::new("Mehmet", PlayerColor::Blue),
        ];
        assert!(matches!(
            session.begin(players),
            Err(CoreError::EmptyPlayerName)
        ));
    }

    #[test]
    fn flip_before_begin_is_rejected() {
        let mut session = MatchSession::new(deck(2));
        assert!(matches!(session.flip(0), Err(CoreError::NotStarted)));
    }

    #[test]
    fn third_flip_is_rejected_until_resolution() {
        let mut session = started(3);
        assert!(matches!(session.flip(0), Ok(FlipOutcome::Flipped)));
        assert!(matches!(session.flip(2), Ok(FlipOutcome::PairPending { .. })));
        assert!(matches!(session.flip(4), Err(CoreError::FlipRejected { index: 4 })));

        session.resolve().unwrap();
        assert!(session.flip(4).is_ok());
    }

    #[test]
    fn matched_pair_credits_current_player_and_stays_on_turn() {
        let mut session = started(2);
        session.flip(0).unwrap();
        let outcome = session.flip(1).unwrap();
        assert_eq!(outcome, FlipOutcome::PairPending { matched: true });

        let resolved = session.resolve().unwrap();
        assert_eq!(
            resolved,
            ResolveOutcome::Matched {
                word_id: 0,
                completed: false
            }
        );
        assert_eq!(session.players()[0].score, 1);
        assert_eq!(session.current_player(), 0);
        assert!(session.tiles()[0].matched && session.tiles()[1].matched);
    }

    #[test]
    fn mismatch_unflips_and_passes_the_turn() {
        let mut session = started(2);
        session.flip(0).unwrap();
        session.flip(2).unwrap();

        let resolved = session.resolve().unwrap();
        assert_eq!(resolved, ResolveOutcome::Mismatched { next_player: 1 });
        assert!(!session.tiles()[0].flipped && !session.tiles()[2].flipped);
        assert_eq!(session.players()[0].score, 0);
        assert_eq!(session.current_player(), 1);
    }

    #[test]
    fn score_sum_tracks_matched_pairs() {
        let mut session = started(3);
        for pair in 0..2 {
            session.flip(pair * 2).unwrap();
            session.flip(pair * 2 + 1).unwrap();
            session.resolve().unwrap();
        }
        let total: u32 = session.players().iter().map(|p| p.score).sum();
        assert_eq!(total, session.matched_pairs());
        assert_eq!(total, 2);
    }

    #[test]
    fn completing_all_pairs_reports_the_winner() {
        // Six pairs, split 4-2 between the players: player 0 resolves the
        // first four pairs, a mismatch passes the turn, player 1 the rest.
        let mut session = started(6);
        for pair in 0..4 {
            session.flip(pair * 2).unwrap();
            session.flip(pair * 2 + 1).unwrap();
            session.resolve().unwrap();
        }
        session.flip(8).unwrap();
        session.flip(11).unwrap();
        session.resolve().unwrap(); // mismatch, player 1's turn

        for pair in 4..6 {
            session.flip(pair * 2).unwrap();
            session.flip(pair * 2 + 1).unwrap();
            session.resolve().unwrap();
        }

        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.players()[0].score, 4);
        assert_eq!(session.players()[1].score, 2);
        assert_eq!(session.winner().unwrap().name, "Ayşe");
    }

    #[test]
    fn completed_session_is_terminal() {
        let mut session = started(1);
        session.flip(0).unwrap();
        session.flip(1).unwrap();
        session.resolve().unwrap();

        assert_eq!(session.phase(), SessionPhase::Completed);
        assert!(matches!(session.flip(0), Err(CoreError::SessionCompleted)));
        assert!(matches!(session.resolve(), Err(CoreError::NothingToResolve)));
        // Matched tiles never revert.
        assert!(session.tiles().iter().all(|t| t.matched));
    }

    #[test]
    fn tie_has_no_winner() {
        // Player 0 takes the first three pairs, mismatches to pass the
        // turn, player 1 takes the remaining three: 3-3.
        let mut session = started(6);
        for pair in 0..3 {
            session.flip(pair * 2).unwrap();
            session.flip(pair * 2 + 1).unwrap();
            session.resolve().unwrap();
        }
        session.flip(6).unwrap();
        session.flip(9).unwrap();
        session.resolve().unwrap();
        for pair in 3..6 {
            session.flip(pair * 2).unwrap();
            session.flip(pair * 2 + 1).unwrap();
            session.resolve().unwrap();
        }

        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.players()[0].score, 3);
        assert_eq!(session.players()[1].score, 3);
        assert!(session.winner().is_none());
    }

    #[test]
    fn single_player_mode_keeps_the_turn_and_has_no_winner() {
        let mut session = MatchSession::new(deck(2));
        session
            .begin(vec![Player::new("Solo", PlayerColor::Green)])
            .unwrap();

        session.flip(0).unwrap();
        session.flip(2).unwrap();
        session.resolve().unwrap();
        assert_eq!(session.current_player(), 0);

        session.flip(0).unwrap();
        session.flip(1).unwrap();
        session.resolve().unwrap();
        session.flip(2).unwrap();
        session.flip(3).unwrap();
        session.resolve().unwrap();

        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.players()[0].score, 2);
        assert!(session.winner().is_none());
    }
}
