//! REST client for the Connect Four server.

use anyhow::{Context, Result};
use connect_four_server::{CreateGameRequest, GameSnapshot, MoveRequest, OpponentType};
use tracing::{debug, instrument};

/// Result of a move request: the new state, or the server's rejection.
#[derive(Debug)]
pub enum MoveOutcome {
    /// Server accepted the move and returned the updated game.
    Accepted(GameSnapshot),
    /// Server rejected the move with the given reason.
    Rejected(String),
}

/// HTTP client for one game server.
#[derive(Debug, Clone)]
pub struct GameClient {
    base_url: String,
    client: reqwest::Client,
}

impl GameClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Starts a new game against the given opponent kind.
    #[instrument(skip(self))]
    pub async fn create_game(&self, opponent_type: OpponentType) -> Result<GameSnapshot> {
        let response = self
            .client
            .post(format!("{}/games", self.base_url))
            .json(&CreateGameRequest { opponent_type })
            .send()
            .await
            .context("failed to reach the game server")?;

        let snapshot = response.error_for_status()?.json().await?;
        debug!(?opponent_type, "Created game");
        Ok(snapshot)
    }

    /// Fetches the current state of a game.
    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: &str) -> Result<GameSnapshot> {
        let response = self
            .client
            .get(format!("{}/games/{}", self.base_url, game_id))
            .send()
            .await
            .context("failed to reach the game server")?;

        Ok(response.error_for_status()?.json().await?)
    }

    /// Submits a move. A rejection (full column, wrong turn, finished game)
    /// is reported as [`MoveOutcome::Rejected`], not as an error.
    #[instrument(skip(self))]
    pub async fn make_move(&self, game_id: &str, player: u8, col: usize) -> Result<MoveOutcome> {
        let response = self
            .client
            .post(format!("{}/games/{}/move", self.base_url, game_id))
            .json(&MoveRequest { player, col })
            .send()
            .await
            .context("failed to reach the game server")?;

        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            let detail: serde_json::Value = response.json().await.unwrap_or_default();
            let reason = detail
                .get("detail")
                .and_then(|d| d.as_str())
                .unwrap_or("Move rejected")
                .to_string();
            debug!(%reason, "Move rejected");
            return Ok(MoveOutcome::Rejected(reason));
        }

        Ok(MoveOutcome::Accepted(
            response.error_for_status()?.json().await?,
        ))
    }
}
