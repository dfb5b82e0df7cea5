use std::fmt::Write as _;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use ai_chat_news::{
    ApiClient, ChatAction, Config, NewsAction, Provider, RequestStatus, Role, Store,
    StoreHandle, Timeframe, Usecase,
};

const HELP: &str = "\
commands:
  /provider <groq|ollama>     select provider (resets model to its default)
  /model <name>               set model id
  /models                     list suggested models for the provider
  /usecase <basic|web>        select chat mode
  /timeframe <day|3days|week|month>
  /news                       fetch a news summary
  /state                      print current state
  /quit
anything else is sent as a chat message";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::load()?;
    let store = StoreHandle::new(ApiClient::from_config(&config));
    println!("Using API at {}", store.api().base_url());
    println!("{}", HELP);

    run(&store, BufReader::new(tokio::io::stdin())).await?;

    Ok(())
}

/// Reads commands until `/quit` or end of input, then waits for every
/// request still in flight so its reply is printed before returning.
async fn run<R>(store: &StoreHandle, input: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut requests = JoinSet::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, arg) = match line.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "/quit" => break,
            "/help" => println!("{}", HELP),
            "/provider" => match arg.parse::<Provider>() {
                Ok(provider) => {
                    store.dispatch(ChatAction::SetProvider(provider));
                    store.dispatch(ChatAction::SetModel(provider.default_model().to_string()));
                }
                Err(e) => println!("{}", e),
            },
            "/model" if arg.is_empty() => println!("{}", store.select(|s| s.chat.model.clone())),
            "/model" => store.dispatch(ChatAction::SetModel(arg.to_string())),
            "/models" => {
                let provider = store.select(|s| s.chat.provider);
                println!("{}: {}", provider, provider.models().join(", "));
            }
            "/usecase" => match arg.parse::<Usecase>() {
                Ok(usecase) => {
                    println!("{}", usecase.description());
                    store.dispatch(ChatAction::SetUsecase(usecase));
                }
                Err(e) => println!("{}", e),
            },
            "/timeframe" => match arg.parse::<Timeframe>() {
                Ok(timeframe) => store.dispatch(NewsAction::SetTimeframe(timeframe)),
                Err(e) => println!("{}", e),
            },
            "/news" => {
                let store = store.clone();
                requests.spawn(async move {
                    match store.fetch_news().await {
                        RequestStatus::Succeeded(reply) => {
                            println!("\n{}", reply.summary);
                            if let Some(file) = reply.saved_file {
                                println!("(saved to {})", file);
                            }
                        }
                        RequestStatus::Failed(message) => println!("news failed: {}", message),
                        _ => {}
                    }
                });
            }
            "/state" => print!("{}", render_state(&store.snapshot())),
            _ => {
                let store = store.clone();
                let content = line.to_string();
                requests.spawn(async move {
                    match store.send_message(&content).await {
                        RequestStatus::Succeeded(reply) => println!("assistant: {}", reply.content),
                        RequestStatus::Failed(message) => println!("chat failed: {}", message),
                        _ => {}
                    }
                });
            }
        }
    }

    while let Some(joined) = requests.join_next().await {
        if let Err(err) = joined {
            warn!(error = %err, "request task ended abnormally");
        }
    }

    Ok(())
}

fn render_state(state: &Store) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "chat: {} / {} / {} (loading: {})",
        state.chat.provider,
        state.chat.model,
        state.chat.usecase,
        state.chat.loading()
    );
    for message in state.chat.messages() {
        let who = match message.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        let _ = writeln!(out, "  {}: {}", who, message.content);
    }
    if let Some(error) = state.chat.error() {
        let _ = writeln!(out, "  last error: {}", error);
    }

    let _ = writeln!(
        out,
        "news: {} (loading: {})",
        state.news.timeframe,
        state.news.loading()
    );
    if let Some(at) = state.news.fetched_at {
        let cached = if state.news.from_cache { " (cached)" } else { "" };
        let _ = writeln!(out, "  fetched at {}{}", at.to_rfc3339(), cached);
    }
    if let Some(summary) = &state.news.summary {
        let _ = writeln!(out, "  summary:\n{}", summary);
    }
    if let Some(file) = &state.news.saved_file {
        let _ = writeln!(out, "  saved to {}", file);
    }
    if let Some(error) = state.news.error() {
        let _ = writeln!(out, "  last error: {}", error);
    }
    out
}
