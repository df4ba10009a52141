//! # CLI Layer
//!
//! One possible UI client for phonebook. This is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Parses arguments and rejects malformed raw input (phone, email, times)
//! - Decides where data lives and installs the logging subscriber
//!
//! Handlers call one `PhonebookApi` method each and print the `CmdResult`.

mod print;
mod time;

use crate::args::{AddArgs, Cli, Commands, UpdateArgs};
use clap::Parser;
use directories::ProjectDirs;
use phonebook::api::{ConfigAction, PhonebookApi, PhonebookPaths};
use phonebook::config::PhonebookConfig;
use phonebook::error::{PhonebookError, Result};
use phonebook::model::{ContactId, ContactUpdate, NewContact, SortField};
use phonebook::store::fs_backend::FsBackend;
use print::{
    print_config, print_contact_table, print_full_contacts, print_groups, print_history,
    print_messages,
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::{parse_time_bound, Bound};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "PHONEBOOK_LOG";

struct AppContext {
    api: PhonebookApi<FsBackend>,
    config: PhonebookConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = PhonebookConfig::load(&data_dir)?;
    init_logging(cli.verbose, &config, &data_dir)?;

    let mut ctx = init_context(data_dir, config)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::Import { path }) => handle_import(&mut ctx, &path),
        Some(Commands::Search { pattern }) => handle_search(&ctx, &pattern),
        Some(Commands::Between { start, end }) => handle_between(&ctx, &start, &end),
        Some(Commands::Update(args)) => handle_update(&mut ctx, args),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::List { sort }) => handle_list(&ctx, sort),
        Some(Commands::Groups) => handle_groups(&ctx),
        Some(Commands::Show { ids }) => handle_show(&ctx, &ids),
        Some(Commands::History { id }) => handle_history(&ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "phonebook", "phonebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PhonebookError::Config("Could not determine data directory".to_string()))
}

fn init_logging(verbose: bool, config: &PhonebookConfig, data_dir: &Path) -> Result<()> {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    if config.log_to_file {
        fs::create_dir_all(data_dir).map_err(PhonebookError::Io)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path(data_dir))
            .map_err(PhonebookError::Io)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn init_context(data_dir: PathBuf, config: PhonebookConfig) -> Result<AppContext> {
    let contacts_path = config.contacts_path(&data_dir);
    debug!(path = %contacts_path.display(), "Opening phone book");

    let backend = FsBackend::new(contacts_path);
    let api = PhonebookApi::open(backend, PhonebookPaths { data_dir })?;
    Ok(AppContext { api, config })
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let mut fields = NewContact::new(args.first_name, args.last_name, args.phone);
    fields.email_address = args.email;
    fields.address = args.address;

    let result = ctx.api.create_contact(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &Path) -> Result<()> {
    let result = ctx.api.import_contacts(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, pattern: &str) -> Result<()> {
    let result = ctx.api.search_contacts(pattern)?;
    if !result.listed_contacts.is_empty() {
        print_contact_table(&result.listed_contacts);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_between(ctx: &AppContext, start: &str, end: &str) -> Result<()> {
    let start = parse_time_bound(start, Bound::Start)?;
    let end = parse_time_bound(end, Bound::End)?;
    let result = ctx.api.contacts_between(start, end)?;
    print_messages(&result.messages);
    print_contact_table(&result.listed_contacts);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, args: UpdateArgs) -> Result<()> {
    let update = build_update(&args);
    let result = ctx.api.update_contact(args.id, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn build_update(args: &UpdateArgs) -> ContactUpdate {
    let email_address = if args.clear_email {
        Some(None)
    } else {
        args.email.clone().map(Some)
    };
    let address = if args.clear_address {
        Some(None)
    } else {
        args.address.clone().map(Some)
    };
    ContactUpdate {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        phone_number: args.phone.clone(),
        email_address,
        address,
    }
}

fn handle_delete(ctx: &mut AppContext, ids: &[ContactId]) -> Result<()> {
    let result = ctx.api.delete_contacts(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, sort: Option<SortField>) -> Result<()> {
    let sort = sort.unwrap_or(ctx.config.default_sort);
    let result = ctx.api.list_contacts(sort)?;
    print_contact_table(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_groups(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.group_contacts()?;
    print_groups(&result.groups);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: &[ContactId]) -> Result<()> {
    let result = ctx.api.view_contacts(ids)?;
    print_full_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_history(ctx: &AppContext, id: ContactId) -> Result<()> {
    let result = ctx.api.contact_history(id)?;
    if let Some(contact) = result.listed_contacts.first() {
        print_history(contact, &result.history);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
