use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use phonebook::api::{CmdMessage, ContactGroup, MessageLevel};
use phonebook::config::PhonebookConfig;
use phonebook::model::{ChangeRecord, Contact};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 28;
const PHONE_WIDTH: usize = 16;
const EMAIL_WIDTH: usize = 30;
const TIME_WIDTH: usize = 16;
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NONE_MARKER: &str = "-";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per contact: id, name, phone, email and how long ago it changed.
pub(super) fn print_contact_table(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }

    for contact in contacts {
        let id = format!("{:>width$}. ", contact.id(), width = ID_WIDTH - 2);
        let name = pad_to_width(&contact.full_name(), NAME_WIDTH);
        let phone = pad_to_width(contact.phone_number(), PHONE_WIDTH);
        let email = pad_to_width(contact.email_address().unwrap_or(NONE_MARKER), EMAIL_WIDTH);
        let updated = format_time_ago(contact.updated_at());

        println!(
            "{}{}{}{}{}",
            id.yellow(),
            name.bold(),
            phone,
            email.dimmed(),
            updated.dimmed()
        );
    }
}

/// Every field of each contact, separated by rules.
pub(super) fn print_full_contacts(contacts: &[Contact]) {
    for (i, contact) in contacts.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!(
            "{} {}",
            format!("{}.", contact.id()).yellow(),
            contact.full_name().bold()
        );
        println!("Phone:      {}", contact.phone_number());
        if let Some(email) = contact.email_address() {
            println!("Email:      {}", email);
        }
        if let Some(address) = contact.address() {
            println!("Address:    {}", address);
        }
        println!("Created At: {}", format_local(contact.created_at()));
        println!("Updated At: {}", format_local(contact.updated_at()));
    }
}

pub(super) fn print_groups(groups: &[ContactGroup]) {
    if groups.is_empty() {
        println!("No contacts found.");
        return;
    }
    for group in groups {
        println!(
            "\n{}",
            format!("Contacts starting with '{}':", group.initial).bold()
        );
        print_contact_table(&group.contacts);
    }
}

pub(super) fn print_history(contact: &Contact, history: &[ChangeRecord]) {
    if history.is_empty() {
        return;
    }
    println!(
        "History for contact {} (ID: {}):",
        contact.full_name().bold(),
        contact.id()
    );
    for record in history {
        println!("\n--------------------------------");
        println!("Timestamp:     {}", format_local(record.timestamp));
        println!("Field Changed: {}", record.field);
        println!(
            "Old Value:     {}",
            record.old_value.as_deref().unwrap_or(NONE_MARKER).red()
        );
        println!(
            "New Value:     {}",
            record.new_value.as_deref().unwrap_or(NONE_MARKER).green()
        );
    }
}

pub(super) fn print_config(config: &PhonebookConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn format_local(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(DISPLAY_TIME_FORMAT)
        .to_string()
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

/// Truncates with an ellipsis, then pads with spaces to exactly `width` columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = truncate_to_width(s, width.saturating_sub(1));
    let used = result.width();
    result.push_str(&" ".repeat(width.saturating_sub(used)));
    result
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_padded_to_width() {
        let padded = pad_to_width("Ada", 8);
        assert_eq!(padded, "Ada     ");
        assert_eq!(padded.width(), 8);
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let padded = pad_to_width("Bartholomew Montgomery", 10);
        assert_eq!(padded.width(), 10);
        assert!(padded.trim_end().ends_with('…'));
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        let padded = pad_to_width("山田太郎", 6);
        assert_eq!(padded.width(), 6);
    }
}
