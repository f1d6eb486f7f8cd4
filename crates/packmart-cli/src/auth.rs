//! Session commands: login, logout, whoami, register.
//!
//! A session established here lives in the backend's cookie; the CLI prints
//! the captured session id so follow-up invocations can carry it via
//! `PACKMART_SESSION`.

use clap::{Args, Subcommand};
use packmart_api::{ApiError, MarketClient, RegistrationRequest};

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Log in with seller credentials
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show who the current session belongs to
    Whoami,
    /// Register a new seller account
    Register(RegisterArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub surname: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub taxpayer_id: String,
}

pub async fn run(client: &MarketClient, command: AuthCommand) -> anyhow::Result<()> {
    match command {
        AuthCommand::Login(args) => login(client, &args).await,
        AuthCommand::Logout => logout(client).await,
        AuthCommand::Whoami => whoami(client).await,
        AuthCommand::Register(args) => register(client, args).await,
    }
}

async fn login(client: &MarketClient, args: &LoginArgs) -> anyhow::Result<()> {
    match client.login(&args.email, &args.password).await {
        Ok((response, session)) => {
            let who = response.seller_email.unwrap_or_else(|| args.email.clone());
            println!("Logged in as {who}");
            print_session_hint(session.as_deref());
            Ok(())
        }
        Err(ApiError::Unauthorized { message }) => {
            println!("Login failed: {message}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn logout(client: &MarketClient) -> anyhow::Result<()> {
    let response = client.logout().await?;
    if response.success {
        println!("Logged out. Unset PACKMART_SESSION if it is exported.");
    } else {
        println!(
            "Logout did not succeed: {}",
            response.message.unwrap_or_else(|| "unknown reason".to_string())
        );
    }
    Ok(())
}

async fn whoami(client: &MarketClient) -> anyhow::Result<()> {
    let status = client.check_auth().await?;
    if status.authenticated {
        let who = status
            .seller_email
            .unwrap_or_else(|| format!("seller #{}", status.seller_id.unwrap_or_default()));
        println!("Authenticated as {who}");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

async fn register(client: &MarketClient, args: RegisterArgs) -> anyhow::Result<()> {
    let request = RegistrationRequest {
        name: args.name,
        surname: args.surname,
        email: args.email,
        phone_number: args.phone,
        password: args.password,
        company: args.company,
        taxpayer_id: args.taxpayer_id,
    };

    let (response, session) = client.register(&request).await?;
    if response.success {
        println!(
            "Registered seller #{}",
            response.seller_id.unwrap_or_default()
        );
        print_session_hint(session.as_deref());
    } else {
        println!(
            "Registration did not succeed: {}",
            response.message.unwrap_or_else(|| "unknown reason".to_string())
        );
    }
    Ok(())
}

fn print_session_hint(session: Option<&str>) {
    if let Some(session) = session {
        println!("To reuse this session in other commands:");
        println!("  export PACKMART_SESSION={session}");
    }
}
