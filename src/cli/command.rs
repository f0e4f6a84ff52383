use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "contact-manager", version, about = "In-memory contact manager")]
pub struct Cli {
    /// Output format for the contact list
    #[arg(long, env = "CONTACTS_OUTPUT", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact and list the result
    /// Every field is required, a missing one rejects the contact
    Add {
        /// Contact first name
        #[arg(long)]
        first_name: Option<String>,

        /// Contact last name
        #[arg(long)]
        last_name: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,

        /// Number of times to add the same contact
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        repeat: u32,
    },

    /// Import contacts from a .csv file and list the result
    Import {
        /// File path to the source .csv file
        #[arg(short, long, env = "CONTACTS_CSV")]
        src: Option<String>,

        /// Source is a headerless column of phone numbers
        #[arg(long)]
        phone_only: bool,

        /// First name used with --phone-only
        #[arg(long, requires = "phone_only")]
        first_name: Option<String>,

        /// Last name used with --phone-only
        #[arg(long, requires = "phone_only")]
        last_name: Option<String>,
    },
}

/// Supported list output formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
