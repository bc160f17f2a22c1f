//! Shell state and command dispatch.

use std::{fs, io};

use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;

use crate::config::{Config, ConfigManager};
use crate::currency::format_month_year;
use crate::errors::CoreError;
use crate::ledger::{MonthRef, Transaction};
use crate::storage::{JsonKvStore, TransactionStore};
use crate::summary::{build_dashboard, monthly_breakdown};

use super::{output, screens};

/// How the shell consumes input: a readline loop, or stdin line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Errors that abort the shell entirely.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors reported to the user while the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{input}`.{suggestion}")]
    UnknownCommand { input: String, suggestion: String },
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

const COMMANDS: &[(&str, &str, &str)] = &[
    ("dashboard", "dashboard", "Render the highlight cards and the listing."),
    ("resume", "resume", "Render the selected month's expense breakdown."),
    ("next", "next", "Move the selected month one month forward."),
    ("prev", "prev", "Move the selected month one month back."),
    ("month", "month <MM/YYYY>", "Jump to a specific month."),
    ("user", "user <id>", "Select the active user."),
    ("import", "import <path>", "Replace the active user's list with a JSON file."),
    ("export", "export <path>", "Write the active user's list to a JSON file."),
    ("help", "help", "Show this command list."),
    ("exit", "exit", "Leave the shell."),
];

pub struct ShellContext {
    mode: CliMode,
    theme: ColorfulTheme,
    config_manager: ConfigManager,
    config: Config,
    store: TransactionStore<JsonKvStore>,
    user: Option<String>,
    selected_month: MonthRef,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let store = TransactionStore::new(JsonKvStore::new_default()?, config.namespace.clone());

        let mut context = Self {
            mode,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            store,
            user: None,
            selected_month: MonthRef::containing(Local::now().date_naive()),
        };

        if context.mode == CliMode::Interactive {
            if let Some(user) = context.config.last_user.clone() {
                output::info(format!("Active user `{}` restored from config.", user));
                context.user = Some(user);
            }
        }

        Ok(context)
    }

    pub(crate) fn prompt(&self) -> String {
        match &self.user {
            Some(user) => format!(
                "carteira [{} {:02}/{}] > ",
                user, self.selected_month.month, self.selected_month.year
            ),
            None => "carteira > ".to_string(),
        }
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        COMMANDS.iter().map(|(name, _, _)| *name).collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "help" => {
                self.show_help();
                Ok(LoopControl::Continue)
            }
            "user" => {
                let id = single_arg(args, "Usage: user <id>")?;
                self.set_user(id)?;
                Ok(LoopControl::Continue)
            }
            "dashboard" => self.show_dashboard(),
            "resume" => self.show_resume(),
            "next" => {
                self.selected_month = self.selected_month.next();
                self.report_month();
                Ok(LoopControl::Continue)
            }
            "prev" => {
                self.selected_month = self.selected_month.previous();
                self.report_month();
                Ok(LoopControl::Continue)
            }
            "month" => {
                let raw = single_arg(args, "Usage: month <MM/YYYY>")?;
                self.selected_month = MonthRef::parse(raw).ok_or_else(|| {
                    CommandError::InvalidArguments(format!("`{}` is not a valid MM/YYYY month.", raw))
                })?;
                self.report_month();
                Ok(LoopControl::Continue)
            }
            "import" => {
                let path = single_arg(args, "Usage: import <path>")?;
                self.import(path)?;
                Ok(LoopControl::Continue)
            }
            "export" => {
                let path = single_arg(args, "Usage: export <path>")?;
                self.export(path)?;
                Ok(LoopControl::Continue)
            }
            "exit" | "quit" => Ok(LoopControl::Exit),
            other => Err(self.unknown_command(other)),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        output::error(err);
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit carteira?")
            .default(true)
            .interact()?)
    }

    fn show_help(&self) {
        output::section("Commands");
        for (_, usage, description) in COMMANDS {
            println!("  {:<18} {}", usage, description);
        }
    }

    fn set_user(&mut self, id: &str) -> Result<(), CommandError> {
        self.user = Some(id.to_string());
        self.config.last_user = Some(id.to_string());
        self.config_manager.save(&self.config)?;
        output::success(format!("Active user set to `{}`.", id));
        Ok(())
    }

    fn require_user(&self) -> Result<&str, CommandError> {
        self.user.as_deref().ok_or_else(|| {
            CommandError::InvalidArguments("Select a user first with `user <id>`.".into())
        })
    }

    fn show_dashboard(&mut self) -> Result<LoopControl, CommandError> {
        let user = self.require_user()?.to_string();
        let transactions = self.store.load(&user)?;
        let summary = build_dashboard(&transactions)?;
        self.clear_screen()?;
        screens::render_dashboard(&summary);
        Ok(LoopControl::Continue)
    }

    fn show_resume(&mut self) -> Result<LoopControl, CommandError> {
        let user = self.require_user()?.to_string();
        let transactions = self.store.load(&user)?;
        let totals = monthly_breakdown(&transactions, self.selected_month)?;
        self.clear_screen()?;
        screens::render_resume(self.selected_month, &totals);
        Ok(LoopControl::Continue)
    }

    fn import(&mut self, path: &str) -> Result<(), CommandError> {
        let user = self.require_user()?.to_string();
        let raw = fs::read_to_string(path)?;
        let transactions: Vec<Transaction> =
            serde_json::from_str(&raw).map_err(CoreError::from)?;
        self.store.save(&user, &transactions)?;
        output::success(format!(
            "Imported {} transactions for `{}`.",
            transactions.len(),
            user
        ));
        Ok(())
    }

    fn export(&self, path: &str) -> Result<(), CommandError> {
        let user = self.require_user()?.to_string();
        let transactions = self.store.load(&user)?;
        let raw = serde_json::to_string_pretty(&transactions).map_err(CoreError::from)?;
        fs::write(path, raw)?;
        output::success(format!(
            "Exported {} transactions to `{}`.",
            transactions.len(),
            path
        ));
        Ok(())
    }

    fn report_month(&self) {
        output::info(format!(
            "Selected month: {}.",
            format_month_year(self.selected_month)
        ));
    }

    fn clear_screen(&self) -> Result<(), CommandError> {
        if self.mode == CliMode::Interactive {
            execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn unknown_command(&self, input: &str) -> CommandError {
        let suggestion = self
            .command_names()
            .into_iter()
            .map(|name| (levenshtein(input, name), name))
            .min()
            .filter(|(distance, _)| *distance <= 3)
            .map(|(_, name)| format!(" Did you mean `{}`?", name))
            .unwrap_or_default();
        CommandError::UnknownCommand {
            input: input.to_string(),
            suggestion,
        }
    }
}

fn single_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, CommandError> {
    match args {
        [value] => Ok(*value),
        _ => Err(CommandError::InvalidArguments(usage.to_string())),
    }
}
