//! Shell commands.
//!
//! One input line is one [`Command`]; each produces exactly one [`Reply`].

pub mod auth;
pub mod catalogue;
pub mod dto;
pub mod error;
pub mod fields;
pub mod navigation;

use std::str::FromStr;

use anyhow::bail;

use crate::bootstrap::AppRuntime;

pub use dto::Reply;
pub use error::map_err;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    State,
    LearnMore,
    Brochure,
    SignIn,
    Back,
    Signup(String),
    Signin(String),
    Day(String),
    Year(String),
    Schools,
    School(String),
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match (name, argument) {
            ("state", "") => Command::State,
            ("learn-more", "") => Command::LearnMore,
            ("brochure", "") => Command::Brochure,
            ("sign-in", "") => Command::SignIn,
            ("back", "") => Command::Back,
            ("schools", "") => Command::Schools,
            ("quit", "") => Command::Quit,
            ("signup", json) if !json.is_empty() => Command::Signup(json.to_string()),
            ("signin", json) if !json.is_empty() => Command::Signin(json.to_string()),
            // Empty input is valid for the sanitizers.
            ("day", raw) => Command::Day(raw.to_string()),
            ("year", raw) => Command::Year(raw.to_string()),
            ("school", query) if !query.is_empty() => Command::School(query.to_string()),
            ("signup" | "signin" | "school", _) => bail!("`{name}` needs an argument"),
            ("state" | "learn-more" | "brochure" | "sign-in" | "back" | "schools" | "quit", _) => {
                bail!("`{name}` takes no argument")
            }
            _ => bail!("Unknown command: {name}"),
        };
        Ok(command)
    }
}

impl Command {
    /// Command name without its argument, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Command::State => "state",
            Command::LearnMore => "learn-more",
            Command::Brochure => "brochure",
            Command::SignIn => "sign-in",
            Command::Back => "back",
            Command::Signup(_) => "signup",
            Command::Signin(_) => "signin",
            Command::Day(_) => "day",
            Command::Year(_) => "year",
            Command::Schools => "schools",
            Command::School(_) => "school",
            Command::Quit => "quit",
        }
    }
}

/// Run one command against the runtime.
///
/// `Quit` only acknowledges; ending the session is up to the caller.
pub async fn execute(runtime: &AppRuntime, command: Command) -> Reply {
    match command {
        Command::State => navigation::state(runtime).await,
        Command::LearnMore => navigation::learn_more(runtime).await,
        Command::Brochure => navigation::brochure(runtime).await,
        Command::SignIn => navigation::sign_in(runtime).await,
        Command::Back => navigation::back(runtime).await,
        Command::Signup(json) => auth::submit_signup(runtime, &json).await,
        Command::Signin(json) => auth::submit_signin(runtime, &json).await,
        Command::Day(raw) => fields::day(&raw),
        Command::Year(raw) => fields::year(&raw),
        Command::Schools => catalogue::schools(),
        Command::School(query) => catalogue::school(&query),
        Command::Quit => Reply::Bye,
    }
}
