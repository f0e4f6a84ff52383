use crate::prelude::{
    AppError, Contact, ContactManager,
    command::{Cli, Commands, OutputFormat},
    storage_port::{import_contacts_from_csv, import_phone_numbers_from_csv},
};
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    // Nothing outlives the process, so each run starts from an empty list.
    let mut manager = ContactManager::new();

    match cli.command {
        Commands::Add {
            first_name,
            last_name,
            phone,
            repeat,
        } => {
            for _ in 0..repeat {
                manager.add_contact(
                    first_name.as_deref(),
                    last_name.as_deref(),
                    phone.as_deref(),
                )?;
            }

            info!(count = repeat, "add command finished");
            println!("Contact added successfully");
        }

        Commands::Import {
            src,
            phone_only,
            first_name,
            last_name,
        } => {
            let (path, report) = if phone_only {
                import_phone_numbers_from_csv(
                    &mut manager,
                    src.as_deref(),
                    first_name.as_deref(),
                    last_name.as_deref(),
                )?
            } else {
                import_contacts_from_csv(&mut manager, src.as_deref())?
            };

            println!(
                "Successfully imported {} contact(s) from {}",
                report.imported,
                path.display()
            );
            if report.rejected > 0 {
                println!("Rejected {} row(s) with missing fields", report.rejected);
            }
        }
    }

    print_contacts(manager.get_all_contacts(), cli.output)
}

pub fn listing_format(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:<20} {:15}",
        contact.first_name(),
        contact.last_name(),
        contact.phone_number()
    )
}

fn print_contacts(contacts: &[Contact], output: OutputFormat) -> Result<(), AppError> {
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(contacts)?);
        }
        OutputFormat::Table => {
            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in contacts.iter().enumerate() {
                println!("{}", listing_format(i + 1, c));
            }
        }
    }
    Ok(())
}
