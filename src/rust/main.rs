use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use classify::{Classification, ClientBuilder, ClientConfig, CsvSource, Method};
use env_logger::{Builder, Env};
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Train a binary text classifier from CSV and classify texts", long_about = None)]
struct Args {
    /// Client identifier [default: $CLASSIFY_CLIENT_ID or "default"]
    #[arg(long)]
    client_id: Option<String>,

    /// Classification method [default: $CLASSIFY_METHOD or "naive-bayes-tfidf"]
    #[arg(short, long)]
    method: Option<String>,

    /// Training CSV with `text,label` rows [default: $CLASSIFY_TRAINING_PATH or train.csv]
    #[arg(short, long)]
    train: Option<PathBuf>,

    /// Library CSV with `token,canonical` rows [default: $CLASSIFY_LIBRARY_PATH or lib.csv]
    #[arg(short, long)]
    library: Option<PathBuf>,

    /// Run without a library
    #[arg(long, conflicts_with = "library")]
    no_library: bool,

    /// CSV file whose first column holds texts to classify
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print one JSON object per line
    #[arg(long)]
    json: bool,

    /// List the accepted method names and exit
    #[arg(long)]
    list_methods: bool,

    /// Texts to classify
    texts: Vec<String>,
}

#[derive(Serialize)]
struct Output<'a> {
    text: &'a str,
    #[serde(flatten)]
    classification: Classification,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list_methods {
        for name in Method::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = resolve_config(&args);
    info!("=== Training {} ({}) ===", config.client_id, config.method);
    let start = Instant::now();
    let client = ClientBuilder::from_config(&config)
        .build()
        .with_context(|| format!("failed to initialize client '{}'", config.client_id))?;
    if let Some(info) = client.info() {
        info!(
            "Model {}: {} library entries, {} positive / {} negative examples, {} tokens",
            info.model_id,
            info.library_size,
            info.positive_examples,
            info.negative_examples,
            info.vocabulary_size
        );
    }

    let mut texts = args.texts.clone();
    if let Some(input) = &args.input {
        let rows = CsvSource::new(input)
            .first_column()
            .with_context(|| format!("failed to read input file {:?}", input))?;
        texts.extend(rows);
    }

    let classify_start = Instant::now();
    for text in &texts {
        let classification = client.classify(text);
        if args.json {
            let line = serde_json::to_string(&Output {
                text,
                classification,
            })?;
            println!("{}", line);
        } else {
            println!("{}\t{:.6}\t{}", classification.verdict, classification.score, text);
        }
    }

    if !texts.is_empty() {
        let elapsed = classify_start.elapsed();
        info!(
            "Classified {} texts in {:.2?} (avg {:.2?})",
            texts.len(),
            elapsed,
            elapsed / texts.len() as u32
        );
    }
    info!("Total time: {:.2?}", start.elapsed());
    Ok(())
}

fn resolve_config(args: &Args) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(client_id) = &args.client_id {
        config.client_id = client_id.clone();
    }
    if let Some(method) = &args.method {
        config.method = method.clone();
    }
    if let Some(train) = &args.train {
        config.training_path = train.clone();
    }
    if let Some(library) = &args.library {
        config.library_path = Some(library.clone());
    }
    if args.no_library {
        config.library_path = None;
    }
    config
}
