mod logging;
mod preview;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use wordforge_core::{Error as CoreError, RequestForm};
use wordforge_generate::output::{
    SaveTarget, default_file_name, save_wordlist, text::write_lines, write_json_atomic,
};
use wordforge_generate::{GenerateOptions, GenerationEngine, GenerationError};

use logging::init_logging;
use preview::run_preview;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid form file: {0}")]
    FormFile(#[from] toml::de::Error),
    #[error("form serialization error: {0}")]
    FormTemplate(#[from] toml::ser::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "wordforge", version, about = "Personal-data wordlist generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a wordlist and save, preview or print it.
    Generate(GenerateArgs),
    /// Print the default request form as TOML.
    FormTemplate,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML request form; flags below override its values.
    #[arg(long, value_name = "FILE")]
    form: Option<PathBuf>,
    #[arg(long)]
    first: Option<String>,
    #[arg(long)]
    last: Option<String>,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    city: Option<String>,
    /// Extra words, whitespace separated. May be repeated.
    #[arg(long, value_name = "WORDS")]
    extra: Vec<String>,
    /// Minimum word length.
    #[arg(long, value_name = "N")]
    min_len: Option<String>,
    /// Maximum word length.
    #[arg(long, value_name = "N")]
    max_len: Option<String>,
    /// Do not decorate concatenations with symbols.
    #[arg(long, default_value_t = false)]
    no_symbols: bool,
    /// Do not emit character substitution variants.
    #[arg(long, default_value_t = false)]
    no_replacements: bool,
    /// Pattern template with {} slots. Replaces the default list when given.
    #[arg(long = "pattern", value_name = "TEMPLATE")]
    patterns: Vec<String>,
    /// Symbols used for decoration instead of the default set.
    #[arg(long, value_name = "CHARS")]
    decoration_symbols: Option<String>,
    /// Add randomly synthesized words.
    #[arg(long, default_value_t = false)]
    random: bool,
    /// Number of random words to synthesize.
    #[arg(long, value_name = "N")]
    random_count: Option<String>,
    #[arg(long, default_value_t = false)]
    no_random_upper: bool,
    #[arg(long, default_value_t = false)]
    no_random_digits: bool,
    #[arg(long, default_value_t = false)]
    no_random_symbols: bool,
    /// Fixed text before each random word.
    #[arg(long)]
    prefix: Option<String>,
    /// Fixed text after each random word.
    #[arg(long)]
    suffix: Option<String>,
    /// Digit characters for random words.
    #[arg(long, value_name = "CHARS")]
    digits: Option<String>,
    /// Symbol characters for random words.
    #[arg(long, value_name = "CHARS")]
    symbols: Option<String>,
    /// Seed for reproducible random words.
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path.
    #[arg(long, conflicts_with = "out_dir")]
    out: Option<PathBuf>,
    /// Directory for a timestamped output file.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Show the wordlist in a scrollable view instead of saving it.
    #[arg(long, default_value_t = false, conflicts_with = "stdout")]
    preview: bool,
    /// Print the wordlist to stdout instead of saving it.
    #[arg(long, default_value_t = false)]
    stdout: bool,
    /// Generate and report the count without saving the wordlist.
    /// `--report` is still written when given.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    /// Write the generation report as JSON.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
    /// Append json log lines to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
    /// Emit json log lines on stderr.
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::FormTemplate => print_form_template(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_form_template() -> Result<(), CliError> {
    let encoded = toml::to_string_pretty(&RequestForm::default())?;
    print!("{encoded}");
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    init_logging(args.log_file.as_deref(), args.log_json)?;

    let form = build_form(&args)?;
    let request = form.parse()?;

    let engine = GenerationEngine::new(GenerateOptions::default());
    let result = engine.run(&request)?;
    let wordlist = result.wordlist;

    eprintln!("generated {} words", wordlist.len());
    if result.report.random_short() {
        eprintln!("note: random synthesis produced fewer words than requested");
    }

    if let Some(path) = &args.report {
        write_json_atomic(path, &result.report)?;
        tracing::info!(path = %path.display(), "report written");
    }

    if request.preview {
        return run_preview(&wordlist);
    }

    if args.stdout {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        write_lines(&mut writer, &wordlist)?;
        writer.flush()?;
        return Ok(());
    }

    let target = if args.dry_run {
        SaveTarget::Cancelled
    } else {
        let file_name = default_file_name(&chrono::Local::now());
        let path = match (&args.out, &args.out_dir) {
            (Some(path), _) => path.clone(),
            (None, Some(dir)) => dir.join(file_name),
            (None, None) => PathBuf::from(file_name),
        };
        SaveTarget::Path(path)
    };

    if let Some(outcome) = save_wordlist(&target, &wordlist)? {
        eprintln!("saved to {}", outcome.path.display());
    }

    Ok(())
}

fn build_form(args: &GenerateArgs) -> Result<RequestForm, CliError> {
    let mut form = match &args.form {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => RequestForm::default(),
    };

    override_text(&mut form.first_name, &args.first);
    override_text(&mut form.last_name, &args.last);
    override_text(&mut form.birth_year, &args.year);
    override_text(&mut form.city, &args.city);
    if !args.extra.is_empty() {
        form.extra_words = args.extra.join(" ");
    }
    override_text(&mut form.min_len, &args.min_len);
    override_text(&mut form.max_len, &args.max_len);
    if args.no_symbols {
        form.use_symbols = false;
    }
    if args.no_replacements {
        form.use_replacements = false;
    }
    if !args.patterns.is_empty() {
        form.patterns = args.patterns.clone();
    }
    override_text(&mut form.decoration_symbols, &args.decoration_symbols);
    if args.preview {
        form.preview = true;
    }
    if args.stdout || args.dry_run {
        form.preview = false;
    }

    let random = &mut form.random;
    if args.random {
        random.enabled = true;
    }
    override_text(&mut random.count, &args.random_count);
    if args.no_random_upper {
        random.use_upper = false;
    }
    if args.no_random_digits {
        random.use_digits = false;
    }
    if args.no_random_symbols {
        random.use_symbols = false;
    }
    override_text(&mut random.prefix, &args.prefix);
    override_text(&mut random.suffix, &args.suffix);
    override_text(&mut random.digits, &args.digits);
    override_text(&mut random.symbols, &args.symbols);
    if args.seed.is_some() {
        random.seed = args.seed;
    }

    Ok(form)
}

fn override_text(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        field.clone_from(value);
    }
}
