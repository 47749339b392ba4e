//! CLI command definitions

use clap::Parser;
use ipsum_domain::{DEFAULT_MODEL, GENERIC_TOPIC};

/// CLI arguments for llm-ipsum
#[derive(Parser, Debug)]
#[command(name = "llm-ipsum")]
#[command(author, version, about = "Generate placeholder text with LLMs")]
#[command(long_about = r#"
Spiritual successor to lorem ipsum: placeholder text composed by a remote
LLM instead of fixed Latin filler.

Credentials are read from the environment (in priority order):
1. OPENAI_BASE_URL / OPENAI_API_KEY
2. OPENROUTER_BASE_URL / OPENROUTER_API_KEY

Example:
  llm-ipsum 12
  llm-ipsum 6 --topic "brass instruments"
  llm-ipsum 4 --title -m google/gemini-2.5-flash-lite
"#)]
pub struct Cli {
    /// The length (in words) of text to generate
    #[arg(value_name = "LENGTH", value_parser = clap::value_parser!(u32).range(1..))]
    pub length: u32,

    /// The model to use for generating text
    #[arg(short, long, value_name = "MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// The topic or theme for the generated text
    #[arg(short, long, value_name = "TOPIC", default_value = GENERIC_TOPIC)]
    pub topic: String,

    /// Generate title text (no trailing punctuation; prefer noun phrases)
    #[arg(long)]
    pub title: bool,

    /// Timeout in seconds for the API call
    #[arg(long, value_name = "SECONDS", default_value_t = 7.0)]
    pub timeout: f64,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the wait spinner
    #[arg(short, long)]
    pub quiet: bool,
}
