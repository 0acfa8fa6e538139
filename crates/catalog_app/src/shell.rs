use std::io::{BufRead, Write};

use anyhow::Result;
use catalog_core::{CatalogRepository, SiteForm};
use catalog_logging::catalog_warn;

use crate::app::{Action, App};

const HELP: &str = "\
commands:
  search <query>      find sites containing <query> (empty query lists all)
  add <url> | <key points> | <description> | <field> | <magic tags>
                      key points and magic tags are comma separated
  delete <url>        remove every site with exactly this url
  list                show all urls
  log                 show the activity log, newest first
  ask <question>      ask the assistant
  help                show this text
  quit                leave the shell
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Run(Action),
    Help,
    Quit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellCommand::Empty);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let action = match command {
        "search" => Action::Search(rest.to_string()),
        "add" => Action::Add(parse_add(rest)?),
        "delete" => Action::Delete(required(rest, "delete needs a url")?),
        "list" => Action::List,
        "log" => Action::ShowLog,
        "ask" => Action::Ask(required(rest, "ask needs a question")?),
        "help" => return Ok(ShellCommand::Help),
        "quit" | "exit" => return Ok(ShellCommand::Quit),
        other => return Err(format!("unknown command '{other}'; type 'help'")),
    };
    Ok(ShellCommand::Run(action))
}

fn required(rest: &str, message: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(message.to_string())
    } else {
        Ok(rest.to_string())
    }
}

fn parse_add(rest: &str) -> Result<SiteForm, String> {
    let mut parts = rest.split('|').map(str::trim);
    let url = parts.next().unwrap_or_default();
    if url.is_empty() {
        return Err("add needs a url".to_string());
    }
    let mut next = || parts.next().unwrap_or_default().to_string();
    Ok(SiteForm {
        url: url.to_string(),
        key_points: next(),
        description: next(),
        field: next(),
        magic_tags: next(),
    })
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Failed commands are reported and the loop continues.
pub fn run<R, I, W>(app: &mut App<R>, input: I, out: &mut W) -> Result<()>
where
    R: CatalogRepository,
    I: BufRead,
    W: Write,
{
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        match parse_line(&line?) {
            Ok(ShellCommand::Run(action)) => {
                if let Err(err) = app.execute(action, out) {
                    catalog_warn!("Shell command failed: {:#}", err);
                    writeln!(out, "error: {err:#}")?;
                }
            }
            Ok(ShellCommand::Help) => write!(out, "{HELP}")?,
            Ok(ShellCommand::Quit) => return Ok(()),
            Ok(ShellCommand::Empty) => {}
            Err(message) => writeln!(out, "{message}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use catalog_core::{ActivityLog, CatalogStore};
    use catalog_engine::JsonFileRepository;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_line("  "), Ok(ShellCommand::Empty));
        assert_eq!(parse_line("list"), Ok(ShellCommand::Run(Action::List)));
        assert_eq!(parse_line("log"), Ok(ShellCommand::Run(Action::ShowLog)));
        assert_eq!(parse_line("exit"), Ok(ShellCommand::Quit));
        assert_eq!(
            parse_line("search  Video Editing "),
            Ok(ShellCommand::Run(Action::Search("Video Editing".into())))
        );
        assert_eq!(
            parse_line("search"),
            Ok(ShellCommand::Run(Action::Search(String::new())))
        );
    }

    #[test]
    fn parses_add_with_missing_trailing_fields() {
        assert_eq!(
            parse_line("add https://a.example | x,y | desc"),
            Ok(ShellCommand::Run(Action::Add(SiteForm {
                url: "https://a.example".into(),
                key_points: "x,y".into(),
                description: "desc".into(),
                field: String::new(),
                magic_tags: String::new(),
            })))
        );
    }

    #[test]
    fn rejects_incomplete_commands() {
        assert!(parse_line("add").is_err());
        assert!(parse_line("add | a | b").is_err());
        assert!(parse_line("delete").is_err());
        assert!(parse_line("ask").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn session_keeps_activity_between_commands() {
        let temp = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(temp.path().join("websites.json"));
        let store = CatalogStore::open(repo, ActivityLog::new()).unwrap();
        let mut app = App::new(store, None);

        let script = "add https://a.example | alpha | | video | √\nsearch VIDEO\nbogus\nquit\nlist\n";
        let mut out = Vec::new();
        run(&mut app, Cursor::new(script), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("url: https://a.example, key points: alpha"));
        assert!(output.contains("unknown command 'bogus'"));
        // One prompt up front and one after each command before quit.
        assert_eq!(output.matches("> ").count(), 4);

        let log: Vec<&str> = app.activity_snapshot().lines().collect();
        assert_eq!(log.len(), 2);
        assert!(log[0].ends_with("search keyword 'VIDEO' found 1 results"));
        assert!(log[1].ends_with("added site https://a.example"));
    }
}
