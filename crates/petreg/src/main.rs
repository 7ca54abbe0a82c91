//! `petreg` - CLI for the lost-and-found pet registry
//!
//! This binary provides the command-line interface: the guided intake
//! wizard and the administrative console over the record set.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use petreg::admin::export;
use petreg::cli::{AdminArgs, AdminCommand, Cli, Command, ConfigCommand, DeleteArgs, ExportArgs, ListArgs};
use petreg::record::{capitalize, format_occurrence_date, format_phone};
use petreg::session::Section;
use petreg::ui::{ConfirmPrompt, ConsoleUi};
use petreg::{init_logging, AdminView, Config, Error, FormFields, FormSession, RecordStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Add => handle_add(&config),
        Command::Admin(admin_args) => handle_admin(&config, admin_args),
        Command::Config(config_cmd) => handle_config(&config, cli.config, config_cmd),
    }
}

/// Run the guided three-section intake wizard.
fn handle_add(config: &Config) -> anyhow::Result<()> {
    let store = RecordStore::open(config.database_path())?;
    let mut session = FormSession::new();
    let mut ui = ConsoleUi::new();

    println!("Pet registration");
    println!("Answer the prompts; press Enter to keep a shown value, type 'back' to return to the previous section.");

    loop {
        let section = session.section();
        println!();
        println!("-- Section {} of 3: {} --", section.number(), section);

        if prompt_section(&mut session, &mut ui) {
            session.retreat();
            continue;
        }
        if ui.eof() {
            bail!("input closed before the form was completed");
        }

        match section {
            Section::Basics | Section::Appearance => {
                session.advance(&mut ui);
            }
            Section::Contact => {
                if session.finalize(&store, &mut ui).is_some() {
                    if session.fields() == &FormFields::default() {
                        // The user accepted the reset offer; register another.
                        continue;
                    }
                    return Ok(());
                }
            }
        }
    }
}

/// Prompt the fields of the active section.
///
/// Returns `true` when the user asked to go back a section.
fn prompt_section(session: &mut FormSession, ui: &mut ConsoleUi) -> bool {
    let section = session.section();
    let allow_back = section.prev().is_some();
    let fields = session.fields_mut();

    match section {
        Section::Basics => {
            ask_field(ui, "Status (lost/found)", &mut fields.status, allow_back)
                || ask_field(ui, "Species", &mut fields.species, allow_back)
                || ask_field(ui, "Gender", &mut fields.gender, allow_back)
                || ask_field(ui, "Name (optional)", &mut fields.name, allow_back)
        }
        Section::Appearance => {
            ask_field(ui, "Size (small/medium/large)", &mut fields.size, allow_back)
                || ask_field(ui, "Breed (optional)", &mut fields.breed, allow_back)
                || ask_field(ui, "Color (optional)", &mut fields.color, allow_back)
        }
        Section::Contact => {
            ask_field(ui, "Phone", &mut fields.phone, allow_back)
                || ask_field(ui, "Occurrence date (YYYY-MM-DD)", &mut fields.occurrence_date, allow_back)
                || ask_field(ui, "Description (optional)", &mut fields.description, allow_back)
                || ask_field(ui, "Address (optional)", &mut fields.address, allow_back)
        }
    }
}

/// Prompt one field, keeping the current value on empty input.
///
/// Returns `true` when the user typed `back` (only honored when a
/// previous section exists).
fn ask_field(ui: &mut ConsoleUi, label: &str, value: &mut String, allow_back: bool) -> bool {
    let prompt = if value.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} [{value}]: ")
    };

    let input = ui.prompt(&prompt);
    if allow_back && input.eq_ignore_ascii_case("back") {
        return true;
    }
    if !input.is_empty() {
        *value = input;
    }
    false
}

/// Check credentials and dispatch the admin operation.
fn handle_admin(config: &Config, args: AdminArgs) -> anyhow::Result<()> {
    let mut ui = ConsoleUi::new();

    let username = args
        .username
        .unwrap_or_else(|| ui.prompt("Username: "));
    let password = args
        .password
        .unwrap_or_else(|| ui.prompt("Password: "));
    if !config.admin.verify(&username, &password) {
        return Err(Error::Unauthorized.into());
    }

    let store = RecordStore::open(config.database_path())?;

    if let AdminCommand::Clear { yes } = &args.command {
        if *yes || ui.confirm("Remove every record from the store?") {
            store.clear()?;
            println!("Record store cleared.");
        } else {
            println!("Aborted.");
        }
        return Ok(());
    }

    let mut view = AdminView::new(store);
    view.load();

    match args.command {
        AdminCommand::List(list_args) => handle_list(&mut view, &list_args),
        AdminCommand::Show { id } => handle_show(&view, &id),
        AdminCommand::Delete(delete_args) => handle_delete(&mut view, &delete_args, &mut ui),
        AdminCommand::Export(export_args) => handle_export(config, &mut view, &export_args),
        AdminCommand::Clear { .. } => unreachable!("handled above"),
    }
}

/// List records, optionally filtered, with summary counts.
fn handle_list(view: &mut AdminView, args: &ListArgs) -> anyhow::Result<()> {
    view.apply_filters(
        args.status.as_deref().unwrap_or(""),
        args.species.as_deref().unwrap_or(""),
        args.name.as_deref().unwrap_or(""),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(view.filtered())?);
        return Ok(());
    }

    let summary = view.summary();
    println!(
        "Total: {}   Lost: {}   Found: {}",
        summary.total, summary.lost, summary.found
    );
    println!();

    if view.filtered().is_empty() {
        if view.records().is_empty() {
            println!("No pets registered yet.");
        } else {
            println!("No results found for the applied filters.");
        }
        return Ok(());
    }

    println!(
        "{:<8} {:<7} {:<20} {:<12} {:<8} {:<8} {:<12} {:<17} {}",
        "ID", "STATUS", "NAME", "SPECIES", "GENDER", "SIZE", "DATE", "PHONE", "REGISTERED"
    );
    for pet in view.filtered() {
        println!(
            "#{:<7} {:<7} {:<20} {:<12} {:<8} {:<8} {:<12} {:<17} {}",
            pet.short_id(),
            pet.status.label(),
            pet.name,
            capitalize(&pet.species),
            capitalize(&pet.gender),
            pet.size.label(),
            format_occurrence_date(&pet.occurrence_date),
            format_phone(&pet.phone),
            pet.registered_at,
        );
    }
    Ok(())
}

/// Show the full detail of one record.
fn handle_show(view: &AdminView, id: &str) -> anyhow::Result<()> {
    match view.detail(id) {
        Some(detail) => {
            println!("{detail}");
            Ok(())
        }
        None => bail!("no record with id {id}"),
    }
}

/// Delete one record after confirmation.
fn handle_delete(
    view: &mut AdminView,
    args: &DeleteArgs,
    ui: &mut ConsoleUi,
) -> anyhow::Result<()> {
    if view.detail(&args.id).is_none() {
        bail!("no record with id {}", args.id);
    }

    let deleted = if args.yes {
        view.delete(&args.id, &mut AutoConfirm)?
    } else {
        view.delete(&args.id, ui)?
    };

    if deleted {
        println!("Pet deleted successfully.");
    } else {
        println!("Aborted.");
    }
    Ok(())
}

/// Export the filtered view as a CSV file named with the current date.
fn handle_export(
    config: &Config,
    view: &mut AdminView,
    args: &ExportArgs,
) -> anyhow::Result<()> {
    view.apply_filters(
        args.status.as_deref().unwrap_or(""),
        args.species.as_deref().unwrap_or(""),
        args.name.as_deref().unwrap_or(""),
    );

    let Some(csv) = view.export_csv() else {
        println!("No records to export.");
        return Ok(());
    };

    let dir: PathBuf = args.output.clone().unwrap_or_else(|| config.export_dir());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let path = dir.join(export::file_name(chrono::Local::now().date_naive()));
    std::fs::write(&path, csv)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "Exported {} record(s) to {}",
        view.filtered().len(),
        path.display()
    );
    Ok(())
}

/// Confirmation prompt that always answers yes (for `--yes` flags).
#[derive(Debug)]
struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Handle the `config` subcommand.
fn handle_config(
    config: &Config,
    config_path: Option<PathBuf>,
    cmd: ConfigCommand,
) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Records path:   {}", config.database_path().display());
                println!();
                println!("[Admin]");
                println!("  Username:       {}", config.admin.username);
                println!("  Password:       (set)");
                println!();
                println!("[Export]");
                println!("  Directory:      {}", config.export_dir().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
