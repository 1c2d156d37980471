use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hanzi_quiz::quiz_engine::preferences::sanitize_types;
use hanzi_quiz::{
    available_types, make_rng, Dataset, Entry, Field, PickOutcome, Preferences, QuizConfig,
    QuizEvents, QuizSession, Round,
};

#[derive(Parser, Debug)]
#[command(name = "hanzi-quiz", version, about = "Vietnamese / Chinese / pinyin flashcard quiz")]
struct Cli {
    /// JSON array of vocabulary records
    #[arg(long, value_name = "PATH")]
    data: PathBuf,

    /// Stored preferences (autoNext, autoNextDelay, flipOnCorrect, defaultTypes)
    #[arg(long, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Comma separated types to quiz on, overriding stored preferences
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    types: Option<Vec<String>>,

    /// Number of choices per question
    #[arg(long, value_name = "N")]
    answers: Option<usize>,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective preferences back to --prefs before starting
    #[arg(long, requires = "prefs")]
    save_prefs: bool,

    /// Print the types present in the dataset and exit
    #[arg(long)]
    list_types: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let dataset = Dataset::load(&cli.data)
        .with_context(|| format!("failed to load dataset {}", cli.data.display()))?;

    if cli.list_types {
        for ty in available_types(&dataset) {
            println!("{ty}");
        }
        return Ok(());
    }
    if dataset.is_empty() {
        bail!("{} contains no usable entries", cli.data.display());
    }

    let config = build_config(&cli)?;
    let session = QuizSession::new(dataset, config, make_rng(cli.seed), Terminal::default())?;
    run(session)
}

fn build_config(cli: &Cli) -> Result<QuizConfig> {
    let mut config = QuizConfig::default();
    if let Some(path) = &cli.prefs {
        Preferences::load(path).apply(&mut config);
    }
    if let Some(types) = &cli.types {
        config.default_types = sanitize_types(types.iter().map(String::as_str));
    }
    if let Some(n) = cli.answers {
        config.answers_count = n;
    }
    if cli.save_prefs {
        if let Some(path) = &cli.prefs {
            Preferences::from_config(&config)
                .save(path)
                .with_context(|| format!("failed to save preferences to {}", path.display()))?;
        }
    }
    Ok(config)
}

fn run(mut session: QuizSession<rand::rngs::StdRng, Terminal>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        match line.trim() {
            "q" => break,
            "h" => {
                if session.hint().is_none() {
                    println!("  no hint available");
                }
            }
            "s" => session.skip(),
            "n" => session.advance(),
            "" => {}
            input => match input.parse::<usize>() {
                Ok(n) if (1..=session.round().options.len()).contains(&n) => {
                    let id = session.round().options[n - 1].id;
                    if session.pick(id, Instant::now()) == PickOutcome::Ignored {
                        println!("  that choice is no longer available");
                    }
                }
                _ => println!("  enter a choice number, h (hint), s (skip), n (next) or q (quit)"),
            },
        }

        if let Some(due) = session.pending_advance() {
            std::thread::sleep(due.saturating_duration_since(Instant::now()));
            session.tick(Instant::now());
        }
    }

    println!();
    println!("Final score: {} after {} question(s)", session.score(), session.question_number());
    Ok(())
}

/// Prints engine events to stdout.
#[derive(Default)]
struct Terminal {
    /// Option ids of the current round, in display order.
    options: Vec<u64>,
}

impl QuizEvents for Terminal {
    fn on_round_start(&mut self, number: u64, round: &Round) {
        let q = &round.question;
        self.options = round.options.iter().map(|o| o.id).collect();
        println!();
        println!("━━ Question {number} ━━  {}", q.instruction);
        println!("  {}", q.prompt());
        for (i, option) in round.options.iter().enumerate() {
            println!("  [{}] {}", i + 1, round.label(option));
        }
    }

    fn on_score_changed(&mut self, score: i64) {
        println!("  score: {score}");
    }

    fn on_option_marked_wrong(&mut self, _id: u64) {
        println!("  ✗ not quite");
    }

    fn on_option_marked_correct(&mut self, _id: u64) {
        println!("  ✓ correct");
    }

    fn on_option_hidden(&mut self, id: u64) {
        if let Some(pos) = self.options.iter().position(|&o| o == id) {
            println!("  hint: choice [{}] is out", pos + 1);
        }
    }

    fn on_reveal(&mut self, entry: &Entry) {
        print_detail(entry);
    }

    fn on_round_will_auto_advance(&mut self, delay_ms: u64) {
        println!("  next question in {:.1}s", delay_ms as f64 / 1000.0);
    }
}

fn print_detail(entry: &Entry) {
    for field in Field::ALL {
        println!("    {:<10} {}", field.to_string(), entry.text(field));
    }
    let example = entry.example();
    if !example.is_empty() {
        println!("    {:<10} {example}", "Example");
    }
}
