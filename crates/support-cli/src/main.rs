//! Support Coordinator Bot CLI
//!
//! An interactive console loop around the intent router.
//!
//! # Usage
//!
//! ```bash
//! # LLM-backed classification (any OpenAI-compatible endpoint)
//! export OPENAI_API_KEY="sk-..."
//! export OPENAI_API_BASE="http://localhost:1234/v1"   # optional
//! cargo run --bin support-bot -p support-cli
//!
//! # Fully offline, keyword rules only
//! cargo run --bin support-bot -p support-cli -- --offline
//! ```

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use support_core::Classifier;
use support_llm::{Language, LlmClassifier, LlmConfig};
use support_router::{KeywordClassifier, Router, SessionManager};
use support_tools::{BillingDesk, TechnicalDesk};
use tracing::{debug, info};

/// Inputs that end the session
const EXIT_SENTINELS: &[&str] = &["exit", "quit", "sair"];

#[derive(Parser, Debug)]
#[command(name = "support-bot")]
#[command(about = "Interactive support coordinator with intent routing", long_about = None)]
struct Args {
    /// Use the offline keyword classifier instead of an LLM
    #[arg(long)]
    offline: bool,

    /// Prompt language: en or pt
    #[arg(long, default_value = "en")]
    lang: String,

    /// Model identifier (overrides OPENAI_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// API base URL (overrides OPENAI_API_BASE)
    #[arg(long)]
    api_base: Option<String>,
}

fn print_banner() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════╗
║                 Support Coordinator Bot                  ║
║                                                          ║
║  Ask about invoices and payments, report a bug, or       ║
║  just say hello.                                         ║
║                                                          ║
║  Try: "I need an invoice", then "John Smith, $150",      ║
║  then switch to "My internet is down".                   ║
║                                                          ║
║  Type 'exit', 'quit' or 'sair' to stop.                  ║
╚══════════════════════════════════════════════════════════╝
"#
    );
}

fn build_classifier(args: &Args) -> anyhow::Result<Arc<dyn Classifier>> {
    if args.offline {
        info!("using offline keyword classifier");
        return Ok(Arc::new(KeywordClassifier::new()));
    }

    let mut config = LlmConfig::from_env()
        .context("LLM configuration missing; set OPENAI_API_KEY or pass --offline")?;
    config = config.with_language(Language::from_code(&args.lang));
    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    if let Some(api_base) = &args.api_base {
        config = config.with_api_base(api_base);
    }

    info!(model = %config.model, api_base = %config.api_base, "using LLM classifier");
    let classifier = LlmClassifier::with_config(config)?;
    Ok(Arc::new(classifier))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    support_utils::init_tracing_with("warn,support_router=info,support_llm=info,support_cli=info");

    let args = Args::parse();
    print_banner();

    let registry = support_tools::default_registry();
    debug!(tools = registry.len(), "tool registry ready");

    let classifier = build_classifier(&args)?;
    let router = Router::new(
        classifier,
        Arc::new(BillingDesk::new()),
        Arc::new(TechnicalDesk::new()),
    );

    let mut sessions = SessionManager::new();
    let mut session = sessions.get_or_create("console")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("👤 > ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if EXIT_SENTINELS.contains(&input.to_lowercase().as_str()) {
            println!("Goodbye!");
            break;
        }

        match router.turn(&mut session.state, input).await {
            Ok(reply) => {
                println!("🤖 {reply}\n");
                sessions.update("console", session.clone())?;
            }
            Err(e) => eprintln!("❌ {e}\n"),
        }
    }

    Ok(())
}
