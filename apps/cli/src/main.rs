mod analysis;
mod config;
mod errors;
mod extract;
mod llm_client;
mod optimize;
mod report;
mod session;

use std::fs::File;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::extract::{extract, DocumentKind, ExtractError, ExtractedDocument};
use crate::llm_client::{CompletionProvider, OpenAiClient};
use crate::session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AlignAI v{}", env!("CARGO_PKG_VERSION"));

    println!("AlignAI — Resume Tailoring & Gap Analysis");
    println!("Step 1: Analyze Match   Step 2: AI Optimization (unlocks after Step 1)");
    println!();

    // Credential: environment first, interactive entry as fallback. Held in
    // memory for the session only, never written anywhere.
    let api_key = match config.openai_api_key {
        Some(key) => {
            println!("API key loaded from environment.");
            key
        }
        None => {
            let entered = prompt_line("No API key found. Enter OpenAI API key: ")?;
            if entered.trim().is_empty() {
                anyhow::bail!("an API key is required to run the analysis");
            }
            entered.trim().to_string()
        }
    };

    let client = OpenAiClient::new(api_key);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let mut session = Session::new();
    run_session(&mut session, &client).await
}

/// Interactive loop. Every error is terminal for the current action only;
/// the session stays usable and the loop returns to the prompt.
async fn run_session(session: &mut Session, client: &dyn CompletionProvider) -> Result<()> {
    loop {
        let path = prompt_line("\nResume file (.pdf or .txt, blank to quit): ")?;
        let path = path.trim();
        if path.is_empty() {
            return Ok(());
        }

        match load_document(path) {
            Ok(document) => session.set_document(document),
            Err(err) => {
                eprintln!("Error: {err}");
                continue;
            }
        }

        let job_description =
            prompt_multiline("Paste the job description (finish with an empty line):")?;

        println!("Phase 1: analyzing semantic match...");
        match session.run_analysis(&job_description, client).await {
            Ok(result) => {
                println!();
                println!("{}", report::render_report(result));
            }
            Err(err) => {
                eprintln!("Error: {err}");
                continue;
            }
        }

        if session.missing_keywords().is_empty() {
            println!("Nothing to optimize! Your resume is well-matched.");
        } else {
            optimization_round(session, client).await?;
        }

        let again = prompt_line("\nAnalyze another resume? [y/N]: ")?;
        if !again.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

/// Phase 2 prompt round. With nothing selected the action is simply not
/// taken — that is a skip, not a runtime failure.
async fn optimization_round(session: &Session, client: &dyn CompletionProvider) -> Result<()> {
    println!("Phase 2: Optimization Agent");
    println!(
        "Select the missing skills you actually possess and add proof so the \
         rewrite stays factual."
    );

    let selection = prompt_line("Skills you possess (comma-separated, blank to skip): ")?;
    let selected: Vec<String> = selection
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if selected.is_empty() {
        return Ok(());
    }

    let user_context = prompt_line("Add context/proof (e.g. \"Used Python for 2 years in automation scripts\"): ")?;

    println!("Phase 2: rewriting sections...");
    match session
        .run_optimization(&selected, &user_context, client)
        .await
    {
        Ok(markdown) => {
            println!("\nContent generated — copy these sections into your resume editor:\n");
            println!("{markdown}");
        }
        Err(err) => eprintln!("Optimization error: {err}"),
    }

    Ok(())
}

fn load_document(path: &str) -> Result<ExtractedDocument, AppError> {
    let kind = DocumentKind::from_file_name(path)?;
    let file = File::open(path).map_err(|e| AppError::Extraction(ExtractError::Io(e)))?;
    Ok(extract(file, kind)?)
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_multiline(prompt: &str) -> Result<String> {
    println!("{prompt}");
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
