//! Terminal front-end of ComedianBot: chat in the terminal, or run the HTTP
//! gateway.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::time::Duration;

use clap::{Parser, Subcommand};
use comedian::{COMEDIAN_NAME, Comedian, openai_client};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, Lines};

const BAR_CHAR: &str = "▎";

const FALLBACK_REPLY: &str =
    "Sorry, I couldn't think of a joke right now. Please try again in a moment.";

#[derive(Parser)]
#[command(name = "comedian")]
#[command(about = "ComedianBot: family-friendly jokes from a hosted model.")]
struct Cli {
    /// API key for the completion service.
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the completion service.
    #[arg(long, global = true, env = "OPENAI_BASE_URL")]
    base_url: Option<String>,

    /// Model used for jokes.
    #[arg(long, global = true, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    model: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Chat with ComedianBot in the terminal (default). Type a topic per
    /// line, `/say <message>` to talk freely, `/reset` to start over.
    Chat,
    /// Run the HTTP gateway.
    #[cfg(feature = "server")]
    Serve {
        /// Listen address.
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: String,

        /// Hosted agent used when a request names none.
        #[arg(long, env = "OPENAI_AGENT_ID")]
        agent_id: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let model_client = openai_client(cli.api_key, cli.base_url);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let comedian = match Comedian::new(model_client, &cli.model) {
                Ok(comedian) => comedian,
                Err(err) => {
                    eprintln!("{err}");
                    return;
                }
            };
            chat(comedian).await;
        }
        #[cfg(feature = "server")]
        Command::Serve { bind, agent_id } => {
            use comedian::server::{AppState, ServerConfig, serve};

            let config = ServerConfig {
                model: cli.model,
                default_agent_id: agent_id,
            };
            let state = match AppState::new(model_client, config) {
                Ok(state) => state,
                Err(err) => {
                    eprintln!("{err}");
                    return;
                }
            };
            if let Err(err) = serve(&bind, state).await {
                error!("gateway stopped: {err}");
            }
        }
    }
}

/// One line of terminal input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Reset,
    Say(&'a str),
    Topic(&'a str),
}

/// Returns `None` for lines with nothing to act on.
fn parse_input(line: &str) -> Option<Input<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line == "/reset" {
        return Some(Input::Reset);
    }
    if let Some(message) = line.strip_prefix("/say") {
        if message.is_empty() || message.starts_with(char::is_whitespace) {
            let message = message.trim();
            return (!message.is_empty()).then_some(Input::Say(message));
        }
    }
    Some(Input::Topic(line))
}

async fn chat(mut comedian: Comedian) {
    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    println!("{} is on stage. Give it a topic.", COMEDIAN_NAME.bold());

    let mut lines = io::BufReader::new(io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = next_input(&mut lines).await else {
            break;
        };
        let reply = match parse_input(&line) {
            Some(Input::Reset) => {
                comedian.reset();
                println!("{}", "Fresh routine.".dimmed());
                continue;
            }
            Some(Input::Say(message)) => {
                thinking(&progress_style, comedian.chat(message)).await
            }
            Some(Input::Topic(topic)) => {
                thinking(&progress_style, comedian.joke_about(topic)).await
            }
            None => continue,
        };

        let joke = match reply {
            Ok(joke) => joke,
            Err(err) => {
                error!("failed to fetch joke: {err}");
                FALLBACK_REPLY.to_owned()
            }
        };
        println!("{}🤖 {}", BAR_CHAR.bright_cyan(), joke.bright_white());
    }
}

/// Shows a spinner while `reply` is pending.
async fn thinking<T>(style: &ProgressStyle, reply: impl Future<Output = T>) -> T {
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(style.clone());
    progress_bar.set_message("🤔 Thinking...");
    progress_bar.enable_steady_tick(Duration::from_millis(100));

    let reply = reply.await;

    // Finish the progress bar before printing anything else.
    progress_bar.finish_and_clear();
    reply
}

/// Reads the next line, ending the session on EOF or a read error.
async fn next_input<R>(lines: &mut Lines<R>) -> Option<String>
where
    R: AsyncBufRead + Unpin,
{
    match lines.next_line().await {
        Ok(line) => line,
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
