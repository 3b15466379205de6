use chrono::Datelike;
use portfolio_site::{
    sections::landing_page,
    theme::{FileStorage, PreferenceStorage},
    ChatRole, ChatWidget, ScrollSpy, SendOutcome, SiteConfig, ThemeStore, PORTFOLIO,
};
use std::{
    error::Error,
    io::{self, Write},
    sync::Arc,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Section height assumed when measuring the page without a real layout.
const SECTION_HEIGHT_PX: f64 = 900.0;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = SiteConfig::from_env()?;
    init_tracing();

    let storage: Arc<dyn PreferenceStorage> = Arc::new(FileStorage::new(&config.prefs_path));
    let theme = ThemeStore::new(storage, false);

    match std::env::args().nth(1).as_deref() {
        None | Some("page") => {
            let mut scroll = ScrollSpy::default();
            let anchor = std::env::args().nth(2).unwrap_or_else(|| "home".to_string());
            scroll.jump_to(&anchor, SECTION_HEIGHT_PX);
            let year = chrono::Local::now().year();
            let page = landing_page(&PORTFOLIO, theme.theme(), scroll.state(), year);
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Some("theme") => {
            let state = theme.toggle();
            println!("{}", state.as_str());
        }
        Some("chat") => run_chat(&config).await?,
        Some(other) => {
            eprintln!("unknown command '{other}', expected one of: page [section], theme, chat");
            std::process::exit(2);
        }
    }

    Ok(())
}

async fn run_chat(config: &SiteConfig) -> Result<(), Box<dyn Error>> {
    let client = config.http_client()?;
    let widget = ChatWidget::new(config.language_model(&client), &PORTFOLIO);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    for message in widget.messages() {
        if message.role == ChatRole::Bot {
            println!("{}", message.text);
        }
    }
    println!("Type 'exit' to quit");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        let mut streamed = false;
        let outcome = widget
            .send_message_streaming(line, |delta| {
                streamed = true;
                print!("{delta}");
                io::stdout().flush().ok();
            })
            .await;

        // Failures and the unconfigured notice arrive as a whole message.
        if !streamed || matches!(outcome, SendOutcome::Failed) {
            if let Some(last) = widget.messages().last() {
                if streamed {
                    println!();
                }
                print!("{}", last.text);
            }
        }
        println!();
    }

    widget.unmount();
    Ok(())
}
