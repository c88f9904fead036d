use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "evaluator",
    version,
    about = "Score a CLAUDE.md audit against an answer key"
)]
pub struct Cli {
    /// Text file with the markdown table from the audit
    pub audit_output: PathBuf,

    /// JSON answer key
    pub answer_key: PathBuf,

    /// Further positionals are ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Key-concept table (YAML or JSON); defaults to the built-in table
    #[arg(long, env = "APO_KEY_CONCEPTS")]
    pub concepts: Option<PathBuf>,

    /// Also write the JSON report to this file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn print_usage() {
    println!("Usage: evaluator <audit-output-file> <answer-key-file>");
    println!("  audit-output-file: text file with the markdown table from the audit");
    println!("  answer-key-file:   JSON answer key");
}
