//! Maps one typed command line onto the address book and produces the reply
//! shown to the user.

use chrono::NaiveDate;
use kinbook_core::{birthdays_per_week, CoreError, Directory, Record};
use std::str::FromStr;
use thiserror::Error;

pub const GREETING: &str = "How can I help you?";
pub const INVALID_COMMAND: &str = "Invalid command.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Exit,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Hello,
    Add,
    AddPhone,
    Change,
    Phone,
    DeletePhone,
    Find,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl FromStr for Verb {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "hello" => Ok(Verb::Hello),
            "add" => Ok(Verb::Add),
            "add_phone" => Ok(Verb::AddPhone),
            "change" => Ok(Verb::Change),
            "phone" => Ok(Verb::Phone),
            "delete_phone" => Ok(Verb::DeletePhone),
            "find" => Ok(Verb::Find),
            "delete" => Ok(Verb::Delete),
            "all" => Ok(Verb::All),
            "add_birthday" => Ok(Verb::AddBirthday),
            "show_birthday" => Ok(Verb::ShowBirthday),
            "birthdays" => Ok(Verb::Birthdays),
            "close" | "exit" => Ok(Verb::Exit),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(&'static str),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CommandError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CommandError::Usage(message) => message,
            CommandError::Core(err) => core_message(err),
        }
    }
}

pub fn core_message(err: &CoreError) -> &'static str {
    match err {
        CoreError::InvalidName(_) => "Name must have min. 3 characters.",
        CoreError::InvalidPhone(_) => "Phone must have 10 digits.",
        CoreError::InvalidBirthdayFormat(_) => "Birthday must be in DD.MM.YYYY format.",
        CoreError::InvalidBirthdayRange(_) => {
            "Birthday must be in the past and no more than 100 years."
        }
        CoreError::PhoneNotFound(_) => "No such phone.",
        CoreError::RecordNotFound(_) => "Record not found.",
        CoreError::DuplicateName(_) => "Contact with this name already exists.",
    }
}

const NEED_NAME: &str = "Enter record name.";
const NEED_NAME_AND_PHONE: &str = "Enter record name and phone number.";

type CommandResult = Result<String, CommandError>;

/// Runs one command line against `directory`. Blank lines produce no reply.
pub fn dispatch(directory: &mut Directory, today: NaiveDate, line: &str) -> Reply {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Reply::Nothing;
    };
    let args: Vec<&str> = tokens.collect();

    let Ok(verb) = Verb::from_str(first) else {
        return Reply::Text(INVALID_COMMAND.to_string());
    };

    let result = match verb {
        Verb::Exit => return Reply::Exit,
        Verb::Hello => Ok(GREETING.to_string()),
        Verb::Add => add_record(directory, &args),
        Verb::AddPhone => add_phone(directory, &args),
        Verb::Change => change_phone(directory, &args),
        Verb::Phone => find_phone(directory, &args),
        Verb::DeletePhone => delete_phone(directory, &args),
        Verb::Find => find_record(directory, &args),
        Verb::Delete => delete_record(directory, &args),
        Verb::All => Ok(show_all(directory)),
        Verb::AddBirthday => add_birthday(directory, today, &args),
        Verb::ShowBirthday => show_birthday(directory, &args),
        Verb::Birthdays => Ok(birthdays_per_week(directory, today).render()),
    };

    Reply::Text(result.unwrap_or_else(|err| err.user_message().to_string()))
}

fn add_record(directory: &mut Directory, args: &[&str]) -> CommandResult {
    let (name, phone) = match args {
        [name] => (*name, None),
        [name, phone, ..] => (*name, Some(*phone)),
        [] => return Err(CommandError::Usage(NEED_NAME_AND_PHONE)),
    };
    let mut record = Record::new(name)?;
    if let Some(phone) = phone {
        record.add_phone(phone)?;
    }
    directory.add(record)?;
    Ok("Contact added.".to_string())
}

fn add_phone(directory: &mut Directory, args: &[&str]) -> CommandResult {
    let [name, phone, ..] = args else {
        return Err(CommandError::Usage(NEED_NAME_AND_PHONE));
    };
    directory.find_mut(name)?.add_phone(phone)?;
    Ok("Phone added.".to_string())
}

// Record lookup comes before the phone arguments are checked.
fn change_phone(directory: &mut Directory, args: &[&str]) -> CommandResult {
    let [name, phones @ ..] = args else {
        return Err(CommandError::Usage(NEED_NAME));
    };
    let record = directory.find_mut(name)?;
    let [old, new, ..] = phones else {
        return Err(CommandError::Usage(NEED_NAME));
    };
    record.edit_phone(old, new)?;
    Ok("Phone updated.".to_string())
}

fn find_phone(directory: &Directory, args: &[&str]) -> CommandResult {
    let [name, phone, ..] = args else {
        return Err(CommandError::Usage(NEED_NAME_AND_PHONE));
    };
    let record = directory.find(name)?;
    let index = record.find_phone(phone)?;
    Ok(format!("{}: {}.", record.name(), record.phones()[index]))
}

fn delete_phone(directory: &mut Directory, args: &[&str]) -> CommandResult {
    let [name, phone, ..] = args else {
        return Err(CommandError::Usage(NEED_NAME_AND_PHONE));
    };
    directory.find_mut(name)?.delete_phone(phone)?;
    Ok("Phone deleted.".to_string())
}

fn find_record(directory: &Directory, args: &[&str]) -> CommandResult {
    let [name, ..] = args else {
        return Err(CommandError::Usage(NEED_NAME));
    };
    Ok(directory.find(name)?.to_string())
}

fn delete_record(directory: &mut Directory, args: &[&str]) -> CommandResult {
    let [name, ..] = args else {
        return Err(CommandError::Usage(NEED_NAME));
    };
    directory.delete(name)?;
    Ok("Record deleted.".to_string())
}

fn show_all(directory: &Directory) -> String {
    if directory.is_empty() {
        return "No contacts.".to_string();
    }
    let mut out = String::from("All contacts:");
    for record in directory {
        out.push('\n');
        out.push_str(&record.to_string());
    }
    out
}

fn add_birthday(directory: &mut Directory, today: NaiveDate, args: &[&str]) -> CommandResult {
    let [name, rest @ ..] = args else {
        return Err(CommandError::Usage(NEED_NAME));
    };
    let record = directory.find_mut(name)?;
    let [birthday, ..] = rest else {
        return Err(CommandError::Usage(NEED_NAME));
    };
    record.set_birthday(birthday, today)?;
    Ok("Birthday added.".to_string())
}

fn show_birthday(directory: &Directory, args: &[&str]) -> CommandResult {
    let [name, ..] = args else {
        return Err(CommandError::Usage(NEED_NAME));
    };
    let record = directory.find(name)?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{}: {}.", record.name(), birthday)),
        None => Ok(format!("{}: None.", record.name())),
    }
}
