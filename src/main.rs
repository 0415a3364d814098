use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dossier::{
    extract_candidate, read_transcript, render_record, write_record, CandidateStore,
    DisabledAnalyzer, EntityAnalyzer, ExtractionContext, LexiconAnalyzer, RemoteAnalyzer,
    RemoteAnalyzerConfig, TranscriberConfig, TranscriptionClient,
};

/// Transcripts shorter than this after transcription are treated as a
/// transcription failure rather than a valid interview
const MIN_TRANSCRIPT_CHARS: usize = 10;

#[derive(Parser)]
#[command(name = "dossier")]
#[command(author, version, about = "Candidate record extraction from interview transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a candidate record from a transcript text file
    Extract {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the record (JSON); printed to stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip entity analysis and keep only regex-backed fields
        #[arg(long)]
        regex_only: bool,

        /// Use the remote NER service instead of the built-in tagger
        #[arg(long)]
        remote_ner: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Transcribe an interview recording, extract, and store the candidate
    Process {
        /// Input audio file (mp3, wav, m4a, mp4, ogg, flac, webm)
        #[arg(short, long)]
        input: PathBuf,

        /// Candidate store file
        #[arg(short, long, default_value = "candidates.json")]
        store: PathBuf,

        /// Use the remote NER service instead of the built-in tagger
        #[arg(long)]
        remote_ner: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List stored candidates, newest first
    List {
        /// Candidate store file
        #[arg(short, long, default_value = "candidates.json")]
        store: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Delete a stored candidate by id
    Delete {
        /// Candidate id to delete
        id: String,

        /// Candidate store file
        #[arg(short, long, default_value = "candidates.json")]
        store: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            regex_only,
            remote_ner,
            verbose,
        } => {
            setup_logging(verbose);
            run_extract(input, output, regex_only, remote_ner).await
        }
        Commands::Process {
            input,
            store,
            remote_ner,
            verbose,
        } => {
            setup_logging(verbose);
            run_process(input, store, remote_ner).await
        }
        Commands::List { store, verbose } => {
            setup_logging(verbose);
            run_list(store)
        }
        Commands::Delete { id, store, verbose } => {
            setup_logging(verbose);
            run_delete(store, &id)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_context(regex_only: bool, remote_ner: bool) -> Result<ExtractionContext> {
    let analyzer: Box<dyn EntityAnalyzer> = if regex_only {
        Box::new(DisabledAnalyzer)
    } else if remote_ner {
        let config = RemoteAnalyzerConfig::from_env()
            .context("Remote NER service is not configured")?;
        Box::new(RemoteAnalyzer::new(config))
    } else {
        Box::new(LexiconAnalyzer::new())
    };
    Ok(ExtractionContext::with_analyzer(analyzer))
}

async fn run_extract(
    input: PathBuf,
    output: Option<PathBuf>,
    regex_only: bool,
    remote_ner: bool,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = read_transcript(&input)?;

    let ctx = build_context(regex_only, remote_ner)?;
    let record = extract_candidate(&transcript, &ctx).await;

    info!("Extracted {} of 9 fields", record.populated_fields());

    match output {
        Some(path) => {
            write_record(&record, &path)?;
            info!("Record written to {:?}", path);
        }
        None => println!("{}", render_record(&record)?),
    }

    Ok(())
}

async fn run_process(input: PathBuf, store_path: PathBuf, remote_ner: bool) -> Result<()> {
    // Step 1: transcribe the recording
    let transcriber_config =
        TranscriberConfig::from_env().context("Transcription service is not configured")?;
    let transcriber = TranscriptionClient::new(transcriber_config);

    info!("Transcribing {:?}", input);
    let transcript = transcriber
        .transcribe_file(&input)
        .await
        .context("Failed to transcribe audio")?;

    if transcript.len() < MIN_TRANSCRIPT_CHARS {
        anyhow::bail!("Transcription returned insufficient text");
    }

    // Step 2: extract the candidate record
    let ctx = build_context(false, remote_ner)?;
    let record = extract_candidate(&transcript, &ctx).await;
    info!("Extracted {} of 9 fields", record.populated_fields());

    // Step 3: persist
    let store = CandidateStore::open(store_path);
    let stored = store
        .create(record, Some(&transcript))
        .context("Failed to store candidate")?;

    info!("Candidate stored with id {}", stored.id);
    println!("{}", render_record(&stored.record)?);

    Ok(())
}

fn run_list(store_path: PathBuf) -> Result<()> {
    let store = CandidateStore::open(store_path);
    let candidates = store.list().context("Failed to read candidate store")?;

    println!("Candidates: {}", candidates.len());
    for candidate in candidates {
        println!(
            "{}  {}  {}  {}",
            candidate.id,
            candidate.created_at.format("%Y-%m-%d %H:%M"),
            candidate.record.name.as_deref().unwrap_or("-"),
            candidate.record.email.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

fn run_delete(store_path: PathBuf, id: &str) -> Result<()> {
    let store = CandidateStore::open(store_path);
    let deleted = store.delete(id).context("Failed to update candidate store")?;

    if deleted {
        println!("Deleted candidate {}", id);
    } else {
        anyhow::bail!("Candidate not found: {}", id);
    }

    Ok(())
}
