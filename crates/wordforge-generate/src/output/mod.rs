pub mod atomic;
pub mod text;

pub use atomic::{write_json_atomic, write_with_atomic};
pub use text::{SaveOutcome, SaveTarget, default_file_name, save_wordlist, write_wordlist};
