use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use wordforge_core::RequestForm;
use wordforge_generate::GenerationEngine;
use wordforge_generate::output::{SaveTarget, default_file_name, save_wordlist};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut form = RequestForm::default();
    let mut out: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out = args.next().map(PathBuf::from),
            "--min" => form.min_len = args.next().ok_or("missing --min value")?,
            "--max" => form.max_len = args.next().ok_or("missing --max value")?,
            _ => {
                if !form.extra_words.is_empty() {
                    form.extra_words.push(' ');
                }
                form.extra_words.push_str(&arg);
            }
        }
    }

    let request = form.parse()?;
    let result = GenerationEngine::default().run(&request)?;

    let path = out.unwrap_or_else(|| PathBuf::from(default_file_name(&chrono::Local::now())));
    save_wordlist(&SaveTarget::Path(path.clone()), &result.wordlist)?;

    println!("words={} path={}", result.wordlist.len(), path.display());
    Ok(())
}
