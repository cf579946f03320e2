//! High-level game state machine.
//!
//! Tracks the authoritative discrete state of the game and validates every
//! transition against a fixed allowed-transition table. The active-control
//! system is the sole driver of menu-related transitions; all other systems
//! only read the current state to decide whether to run.

use log::{info, warn};
use rustc_hash::FxHashMap;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    WelcomeScreen,
    OptionsMenu,
    Playing,
    Paused,
    GameOver,
    Quitting,
}

/// State machine with a fixed allowed-transition table.
///
/// `do_transition` refuses transitions whose `from` is not the current
/// state or whose `from → to` edge is not in the table, so a stale caller
/// can never push the game into an unreachable state.
#[derive(Debug, Clone)]
pub struct StateMachine {
    current: GameStates,
    transitions: FxHashMap<GameStates, Vec<GameStates>>,
}

impl StateMachine {
    pub fn new() -> Self {
        let mut transitions: FxHashMap<GameStates, Vec<GameStates>> = FxHashMap::default();
        transitions.insert(
            GameStates::WelcomeScreen,
            vec![GameStates::Quitting, GameStates::Playing, GameStates::OptionsMenu],
        );
        transitions.insert(
            GameStates::OptionsMenu,
            vec![GameStates::Quitting, GameStates::WelcomeScreen],
        );
        transitions.insert(
            GameStates::Playing,
            vec![
                GameStates::Quitting,
                GameStates::WelcomeScreen,
                GameStates::GameOver,
                GameStates::Paused,
            ],
        );
        transitions.insert(
            GameStates::Paused,
            vec![
                GameStates::Quitting,
                GameStates::Playing,
                GameStates::OptionsMenu,
                GameStates::WelcomeScreen,
            ],
        );
        transitions.insert(
            GameStates::GameOver,
            vec![GameStates::Quitting, GameStates::WelcomeScreen],
        );

        StateMachine {
            current: GameStates::WelcomeScreen,
            transitions,
        }
    }

    pub fn current(&self) -> GameStates {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.current == GameStates::Playing
    }

    /// Apply `from → to` if `from` is the current state and the edge is
    /// allowed. Returns whether the transition happened.
    pub fn do_transition(&mut self, from: GameStates, to: GameStates) -> bool {
        if self.current != from {
            warn!("ignored transition {from:?} -> {to:?}: current state is {:?}", self.current);
            return false;
        }
        let allowed = self
            .transitions
            .get(&from)
            .is_some_and(|targets| targets.contains(&to));
        if !allowed {
            warn!("ignored transition {from:?} -> {to:?}: not in the transition table");
            return false;
        }
        info!("state transition {from:?} -> {to:?}");
        self.current = to;
        true
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}
