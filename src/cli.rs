use clap::Parser;

use keydiff::{KeyDiffError, LoadConfig, OutputFormat, RecordOptions};

/// Command-line arguments for keydiff
#[derive(Parser, Debug)]
#[command(name = "keydiff")]
#[command(version)]
#[command(about = "Compare two JSON arrays of records by key fields")]
pub struct Args {
    /// Before list: JSON file or inline JSON array
    pub before: String,

    /// After list: JSON file or inline JSON array (not required when using --stdin)
    #[arg(required = false)]
    pub after: Option<String>,

    /// Read the after list from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Key field selector, e.g. `id` or `owner.id` (repeatable)
    #[arg(short, long = "key", value_name = "FIELD")]
    pub keys: Vec<String>,

    /// Value field selector compared for updates (repeatable)
    #[arg(long = "value", value_name = "FIELD")]
    pub values: Vec<String>,

    /// Compute inserted records
    #[arg(long)]
    pub insert: bool,

    /// Compute deleted records
    #[arg(long)]
    pub delete: bool,

    /// Compute inserted and deleted records
    #[arg(short, long)]
    pub all: bool,

    /// Skip computing updated records
    #[arg(long)]
    pub no_update: bool,

    /// Fail when a record lacks a selected field instead of treating it as null
    #[arg(long)]
    pub strict: bool,

    /// Allow running without any --key
    #[arg(long)]
    pub allow_no_key: bool,

    /// Output format (default: changes)
    #[arg(short, long, default_value_t = OutputFormat::Changes, hide_default_value = true)]
    pub format: OutputFormat,

    /// Sort record keys in output
    #[arg(long)]
    pub sort: bool,

    /// Maximum input size in bytes (default: 104857600)
    #[arg(long, env = "KEYDIFF_MAX_FILE_SIZE")]
    pub max_file_size: Option<u64>,

    /// Force inputs to be treated as inline JSON
    #[arg(long)]
    pub inline: bool,

    /// Log diff progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validate command-line arguments
    pub fn validate(&self) -> Result<(), KeyDiffError> {
        if !self.stdin && self.after.is_none() {
            return Err(KeyDiffError::MissingAfter);
        }
        if self.stdin && self.after.is_some() {
            return Err(KeyDiffError::InvalidArgs {
                message: "--stdin cannot be combined with an AFTER argument".to_string(),
            });
        }
        if self.keys.is_empty() && !self.allow_no_key {
            return Err(KeyDiffError::InvalidArgs {
                message: "at least one --key is required (or pass --allow-no-key)".to_string(),
            });
        }
        Ok(())
    }

    /// Field selectors and flags for the diff
    pub fn record_options(&self) -> Result<RecordOptions, KeyDiffError> {
        let parsed = RecordOptions::parse(&self.keys, &self.values)?;
        Ok(RecordOptions {
            insert: self.insert || self.all,
            update: !self.no_update,
            delete: self.delete || self.all,
            strict: self.strict,
            ..parsed
        })
    }

    pub fn load_config(&self) -> LoadConfig {
        LoadConfig::default().with_max_file_size(self.max_file_size)
    }
}
