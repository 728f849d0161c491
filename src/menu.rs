//! Interactive numbered menu.
//!
//! Reads one choice per line, runs the matching catalog query and prints
//! the result. Every failure inside an action is reported and the menu is
//! shown again; only `0` or the end of input leaves the loop.

use crate::catalog::Catalog;
use crate::console::Console;
use crate::error::{InputError, MenuError};
use crate::fetcher::Fetcher;
use crate::query;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// One catalog action offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SearchTitle,
    ListBooks,
    ListAuthors,
    AuthorsAlive,
    BooksByLanguage,
    TopDownloads,
}

impl Action {
    /// Actions in display order.
    pub const ALL: [Action; 6] = [
        Action::SearchTitle,
        Action::ListBooks,
        Action::ListAuthors,
        Action::AuthorsAlive,
        Action::BooksByLanguage,
        Action::TopDownloads,
    ];

    pub fn number(self) -> u8 {
        match self {
            Action::SearchTitle => 1,
            Action::ListBooks => 2,
            Action::ListAuthors => 3,
            Action::AuthorsAlive => 4,
            Action::BooksByLanguage => 5,
            Action::TopDownloads => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::SearchTitle => "Search book by title",
            Action::ListBooks => "List registered books",
            Action::ListAuthors => "List registered authors",
            Action::AuthorsAlive => "List authors alive in a given year",
            Action::BooksByLanguage => "List books by language",
            Action::TopDownloads => "Top 10 most downloaded books",
        }
    }

    /// Wording used in "Error while ..." messages.
    fn activity(self) -> &'static str {
        match self {
            Action::SearchTitle => "searching for the book",
            Action::ListBooks => "listing books",
            Action::ListAuthors => "listing authors",
            Action::AuthorsAlive => "listing living authors",
            Action::BooksByLanguage => "listing books by language",
            Action::TopDownloads => "listing the most popular books",
        }
    }
}

/// What the user typed at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Action),
    Exit,
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number: i64 = s
            .parse()
            .map_err(|_| InputError::NotANumber(s.to_string()))?;

        if number == 0 {
            return Ok(MenuChoice::Exit);
        }

        Action::ALL
            .into_iter()
            .find(|action| i64::from(action.number()) == number)
            .map(MenuChoice::Run)
            .ok_or(InputError::UnknownOption(number))
    }
}

/// Parses a year typed at the prompt.
pub fn parse_year(s: &str) -> Result<i32, InputError> {
    let s = s.trim();
    s.parse().map_err(|_| InputError::InvalidYear(s.to_string()))
}

/// What one action printed: a heading and its result lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub heading: String,
    pub lines: Vec<String>,
    listing: bool,
}

impl Report {
    fn listing(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            lines,
            listing: true,
        }
    }

    fn message(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
            listing: false,
        }
    }
}

/// The menu loop, bound to one catalog and one input stream.
pub struct Menu<'a, F, R> {
    catalog: &'a Catalog<F>,
    console: &'a Console,
    input: Lines<R>,
}

impl<'a, F, R> Menu<'a, F, R>
where
    F: Fetcher,
    R: AsyncBufRead + Unpin,
{
    pub fn new(catalog: &'a Catalog<F>, console: &'a Console, input: R) -> Self {
        Self {
            catalog,
            console,
            input: input.lines(),
        }
    }

    /// Runs until the user picks `0` or input ends.
    pub async fn run(&mut self) -> std::io::Result<()> {
        loop {
            self.show();

            let Some(line) = self.input.next_line().await? else {
                return Ok(());
            };

            let action = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Run(action)) => action,
                Ok(MenuChoice::Exit) => {
                    self.console.info("Exiting...");
                    return Ok(());
                }
                Err(e) => {
                    self.console.warning(&e.to_string());
                    continue;
                }
            };

            match self.perform(action).await {
                Ok(report) => self.print(&report),
                Err(MenuError::Input(e)) => self.console.warning(&e.to_string()),
                Err(MenuError::Catalog(e)) => self
                    .console
                    .error(&format!("Error while {}: {}", action.activity(), e)),
                Err(MenuError::Io(e)) => return Err(e),
                Err(MenuError::EndOfInput) => return Ok(()),
            }
        }
    }

    /// Runs one action and returns what it would print.
    pub async fn perform(&mut self, action: Action) -> Result<Report, MenuError> {
        match action {
            Action::SearchTitle => {
                let title = self.ask("Enter the title of the book to search for:").await?;
                let results = self.catalog.search(&title).await?;
                Ok(match query::search_by_title(&results, &title) {
                    Some(book) => Report::listing("Book found:", vec![book.to_string()]),
                    None => Report::message("Book not found."),
                })
            }
            Action::ListBooks => {
                let results = self.catalog.books().await?;
                let lines = query::list_titles(&results)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                Ok(Report::listing("Registered books:", lines))
            }
            Action::ListAuthors => {
                let results = self.catalog.books().await?;
                let lines = query::distinct_authors(&results)
                    .into_iter()
                    .map(ToString::to_string)
                    .collect();
                Ok(Report::listing("Registered authors:", lines))
            }
            Action::AuthorsAlive => {
                let year = parse_year(&self.ask("Enter the year to list living authors:").await?)?;
                let results = self.catalog.books().await?;
                let lines = query::authors_alive_in_year(&results, year)
                    .into_iter()
                    .map(ToString::to_string)
                    .collect();
                Ok(Report::listing(format!("Authors alive in {}:", year), lines))
            }
            Action::BooksByLanguage => {
                let language = self
                    .ask("Enter the language code (e.g. 'en' for English):")
                    .await?;
                let results = self.catalog.by_language(&language).await?;
                let lines = query::list_titles(&results)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                Ok(Report::listing(format!("Books in language '{}':", language), lines))
            }
            Action::TopDownloads => {
                let results = self.catalog.books().await?;
                Ok(Report::listing(
                    "Top 10 most downloaded books:",
                    query::top10_by_downloads(&results),
                ))
            }
        }
    }

    fn show(&self) {
        self.console.section("Select an option:");
        for action in Action::ALL {
            println!("{}- {}", action.number(), action.label());
        }
        println!("{}", self.console.muted("0- Exit"));
    }

    fn print(&self, report: &Report) {
        if !report.listing {
            self.console.info(&report.heading);
            return;
        }

        self.console.success(&report.heading);
        if report.lines.is_empty() {
            self.console.info("No results.");
        }
        for line in &report.lines {
            self.console.item(line);
        }
    }

    async fn ask(&mut self, prompt: &str) -> Result<String, MenuError> {
        self.console.prompt(prompt);
        match self.input.next_line().await? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(MenuError::EndOfInput),
        }
    }
}
