use clap::{Args, Parser, Subcommand};
use phonebook::model::{ContactId, SortField};
use phonebook::validation::{validate_email, validate_phone};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version = env!("PHONEBOOK_BUILD"))]
#[command(about = "Personal contact manager with JSON storage and CSV import", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding contacts.json and config.json
    #[arg(long, global = true, env = "PHONEBOOK_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (info-level logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new contact
    #[command(alias = "n")]
    Add(AddArgs),

    /// Import contacts from a CSV file (renumbers every contact afterwards)
    Import {
        /// CSV file with a header row
        path: PathBuf,
    },

    /// Search names and phone numbers with a case-insensitive regex
    #[command(alias = "s")]
    Search {
        /// Pattern, e.g. "smi.*" or "\(555\)"
        pattern: String,
    },

    /// List contacts created within a time frame (inclusive)
    Between {
        /// Start: "YYYY-MM-DD HH:MM:SS", "YYYY-MM-DD" or RFC 3339
        start: String,

        /// End: same formats; a bare date means the end of that day
        end: String,
    },

    /// Update fields of a contact; omitted fields are left alone
    #[command(alias = "u")]
    Update(UpdateArgs),

    /// Delete one or more contacts
    #[command(alias = "rm")]
    Delete {
        /// Contact IDs (e.g. 1 2 3 or 1,2,3)
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        ids: Vec<ContactId>,
    },

    /// List contacts
    #[command(alias = "ls")]
    List {
        /// Field to sort by (defaults to the configured default-sort)
        #[arg(short, long)]
        sort: Option<SortField>,
    },

    /// List contacts grouped by the initial of their last name
    Groups,

    /// Show one or more contacts in full
    #[command(alias = "v")]
    Show {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<ContactId>,
    },

    /// Show the change history of a contact
    History { id: ContactId },

    /// Get or set configuration
    Config {
        /// Configuration key (contacts-file, default-sort, log-to-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long, value_parser = parse_name)]
    pub first_name: String,

    #[arg(long, value_parser = parse_name)]
    pub last_name: String,

    /// Phone number in the format (###) ###-####
    #[arg(long, value_parser = parse_phone)]
    pub phone: String,

    #[arg(long, value_parser = parse_email)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: ContactId,

    #[arg(long, value_parser = parse_name)]
    pub first_name: Option<String>,

    #[arg(long, value_parser = parse_name)]
    pub last_name: Option<String>,

    /// Phone number in the format (###) ###-####
    #[arg(long, value_parser = parse_phone)]
    pub phone: Option<String>,

    #[arg(long, value_parser = parse_email, conflicts_with = "clear_email")]
    pub email: Option<String>,

    /// Remove the email address
    #[arg(long)]
    pub clear_email: bool,

    #[arg(long, conflicts_with = "clear_address")]
    pub address: Option<String>,

    /// Remove the address
    #[arg(long)]
    pub clear_address: bool,
}

fn parse_name(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_phone(s: &str) -> Result<String, String> {
    validate_phone(s.trim())
        .map(str::to_string)
        .map_err(|e| e.to_string())
}

fn parse_email(s: &str) -> Result<String, String> {
    validate_email(s.trim())
        .map(str::to_string)
        .map_err(|e| e.to_string())
}
