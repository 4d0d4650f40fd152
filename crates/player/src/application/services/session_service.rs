//! Session service playing one game over a game channel
//!
//! Each round the server pushes a full game state and waits for one
//! answer. The session:
//! - receives and decodes the state
//! - stops when the game is over or the local player is out
//! - otherwise answers with a random legal action
//!
//! Rounds are independent: nothing from one state is used for the next.
//! Every failure ends the session and is returned to the caller; there are
//! no retries.

use speedbot_domain::{Action, DomainError, GameOutcome, GameState};
use speedbot_shared::{decode_state, encode_action, ProtocolError};

use crate::application::services::ActionService;
use crate::ports::outbound::{ChannelError, GameChannelPort};

/// Errors that end a game session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Channel closed, unreachable, or failed while sending/receiving
    #[error("Connection error: {0}")]
    Connection(#[from] ChannelError),

    /// Inbound message is not a valid game state
    #[error("Decode error: {0}")]
    Decode(#[source] ProtocolError),

    #[error("Encode error: {0}")]
    Encode(#[source] ProtocolError),

    /// The local player id is missing from the state's players
    #[error("Lookup error: {0}")]
    Lookup(#[from] DomainError),

    /// `run` was called on a session that already ended
    #[error("Session already terminated")]
    Terminated,
}

impl From<ProtocolError> for SessionError {
    fn from(err: ProtocolError) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Encode(err)
        }
    }
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next game state
    AwaitingState,
    /// Game finished, player out, or an error occurred
    Terminated,
}

/// What to do with one received state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Answer this round with the action
    Continue(Action),
    /// Stop without answering
    Stop(GameOutcome),
}

/// One game played over an exclusively owned channel
pub struct GameSession<C: GameChannelPort> {
    channel: C,
    actions: ActionService,
    state: SessionState,
    rounds_played: u32,
}

impl<C: GameChannelPort> GameSession<C> {
    pub fn new(channel: C, actions: ActionService) -> Self {
        Self {
            channel,
            actions,
            state: SessionState::AwaitingState,
            rounds_played: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of rounds answered so far
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Give the channel back, e.g. to close it.
    pub fn into_channel(self) -> C {
        self.channel
    }

    /// Play until the game is over for the local player.
    ///
    /// The session is `Terminated` afterwards whether or not this succeeds.
    pub async fn run(&mut self) -> Result<GameOutcome, SessionError> {
        if self.state == SessionState::Terminated {
            return Err(SessionError::Terminated);
        }

        tracing::info!("Waiting for initial state");
        let result = self.play().await;
        self.state = SessionState::Terminated;

        match &result {
            Ok(outcome) => tracing::info!(
                outcome = %outcome,
                rounds = self.rounds_played,
                "Game session finished"
            ),
            Err(e) => tracing::error!(
                error = %e,
                rounds = self.rounds_played,
                "Game session aborted"
            ),
        }
        result
    }

    async fn play(&mut self) -> Result<GameOutcome, SessionError> {
        loop {
            let text = self.channel.recv_text().await?;
            let state = decode_state(&text)?;
            tracing::debug!(
                running = state.running,
                you = %state.you,
                players = state.players.len(),
                active = state.active_count(),
                deadline = ?state.deadline,
                "< state"
            );

            let action = match self.decide(&state)? {
                Decision::Stop(outcome) => return Ok(outcome),
                Decision::Continue(action) => action,
            };

            let reply = encode_action(action)?;
            tracing::debug!(round = self.rounds_played + 1, action = %action, "> action");
            self.channel.send_text(reply).await?;
            self.rounds_played += 1;
        }
    }

    /// Decide how to answer one state.
    ///
    /// The local player is looked up first, so a state without it fails
    /// even when the game is over.
    pub fn decide(&self, state: &GameState) -> Result<Decision, SessionError> {
        let me = state.me()?;
        if let Some(outcome) = state.outcome()? {
            return Ok(Decision::Stop(outcome));
        }

        let action = self.actions.choose(me);
        if let Some(direction) = me.direction {
            tracing::trace!(
                speed = me.speed,
                from = %direction,
                to = %direction.after(action),
                "Heading"
            );
        }
        Ok(Decision::Continue(action))
    }
}
