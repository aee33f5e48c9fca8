use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_response, output_success};
use crate::cli::OutputFormat;
use crate::console::Console;
use crate::models::UserRegister;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login and store access/refresh tokens")]
    Login {
        #[arg(help = "Account email")]
        email: String,
        #[arg(long, help = "Password")]
        password: String,
    },

    #[command(about = "Request an account; an administrator accepts or rejects it")]
    Register {
        #[arg(help = "Account email")]
        email: String,
        #[arg(long, help = "Display name")]
        name: String,
        #[arg(long, help = "Password")]
        password: String,
    },

    #[command(about = "Exchange the refresh token for a new access token")]
    Refresh,

    #[command(about = "Forget stored tokens")]
    Logout,

    #[command(about = "Show the user behind the stored access token")]
    Whoami,
}

pub async fn handle(console: &Console, cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password } => {
            let response = console.session.login(&email, &password).await?;
            output_response(&output_format, "login", &response)
        }
        AuthCommands::Register { email, name, password } => {
            let registration = UserRegister { email, password, name };
            let response = console.session.register(&registration).await?;
            output_response(&output_format, "register", &response)
        }
        AuthCommands::Refresh => {
            let response = console.session.refresh_access_token().await?;
            output_response(&output_format, "token refresh", &response)
        }
        AuthCommands::Logout => {
            console.session.logout()?;
            output_success(&output_format, "Logged out", None)
        }
        AuthCommands::Whoami => {
            let Some(claims) = console.session.current_claims()? else {
                anyhow::bail!("Not logged in");
            };
            let user_id = claims.subject()?;
            let expired = claims.is_expired_at(chrono::Utc::now().timestamp());
            let profile = console.accounts.user_info(user_id).await?;

            output_success(
                &output_format,
                &format!("User {}{}", user_id, if expired { " (token expired)" } else { "" }),
                Some(json!({ "user_id": user_id, "expired": expired, "profile": profile })),
            )
        }
    }
}
