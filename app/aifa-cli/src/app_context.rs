use crate::commands::Commands;
use crate::error::{CliError, Result as CliResult};

use aifa_api::Client;
use aifa_auth::{AuthController, AuthState, VerificationFlow};
use aifa_config::Config;
use aifa_store::FileStore;

use std::path::PathBuf;
use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// Everything a command needs, built once at startup and passed by reference.
pub struct AppContext {
    pub config: Config,
    pub client: Arc<Client>,
    pub controller: Arc<AuthController>,
    pub flow: VerificationFlow,
}

impl AppContext {
    pub fn new(config: Config, storage_path: impl Into<PathBuf>) -> CliResult<Self> {
        let client = Arc::new(Client::from_config(&config.api)?);
        let store = Arc::new(FileStore::new(storage_path));
        let controller = Arc::new(AuthController::new(store, client.clone()));
        let flow = VerificationFlow::new(
            controller.clone(),
            client.clone(),
            config.verification.countdown_secs,
        );

        Ok(Self {
            config,
            client,
            controller,
            flow,
        })
    }

    /// Bootstrap identities, then run `command`. Returns the JSON to print.
    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        let state = self.controller.initialize().await?;

        match command {
            Commands::Status => Ok(state_json(&state)),
            Commands::SendCode { phone } => {
                let response = self.flow.request_code(&phone).await?;
                Ok(json!({
                    "msg": response.msg,
                    "retryAfterSecs": self.flow.remaining_secs().await,
                }))
            }
            Commands::Login { phone, code, iv } => {
                let state = self.flow.verify_and_login(&phone, &code, &iv).await?;
                info!("Logged in");
                Ok(state_json(&state))
            }
            Commands::Logout => {
                let state = self.controller.logout().await?;
                info!("Logged out");
                Ok(state_json(&state))
            }
            Commands::WebVersion { env } => {
                let identifier = state
                    .user_identity
                    .as_deref()
                    .or(state.client_identity.as_deref())
                    .ok_or_else(CliError::no_identity)?;
                let env = env.unwrap_or_else(|| self.config.api.web_version_env.clone());

                let response = self.client.web_version(&env, identifier).await?;
                Ok(serde_json::to_value(response)?)
            }
        }
    }
}

fn state_json(state: &AuthState) -> Value {
    json!({
        "clientIdentity": state.client_identity,
        "userIdentity": state.user_identity,
        "loading": state.loading,
        "isAuthenticated": state.is_authenticated(),
    })
}
