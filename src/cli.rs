// src/cli.rs
use std::{env, path::PathBuf};

use color_eyre::eyre::{Result, eyre};

use crate::config::consts::DEFAULT_STORE_FILE;
use crate::core::net::HttpFetcher;
use crate::importer;
use crate::resolver::{GameSession, MissingCategoryPolicy, Resolver};
use crate::store::AnswerStore;

pub enum Command {
    Resolve { category: String },
    Round { categories: Vec<String> },
    Import,
    Add { category: String, letter: char, answer: String },
    Remove { category: String, letter: char, answer: String },
    Answers { category: String },
    List,
    Reset,
}

pub struct Params {
    pub command: Command,
    pub letter: Option<char>,
    pub store: PathBuf,
    pub partial: bool,
}

pub fn run() -> Result<()> {
    execute(parse(env::args().skip(1))?)
}

pub fn execute(params: Params) -> Result<()> {
    let Params { command, letter, store: store_path, partial } = params;
    let mut store = AnswerStore::load(&store_path)?;
    let require_letter = || letter.ok_or_else(|| eyre!("Missing -l/--letter"));

    match command {
        Command::Resolve { category } => {
            let letter = require_letter()?;
            let resolver = Resolver::new(&store, HttpFetcher);
            println!("{}", resolver.resolve(&category, letter)?);
        }
        Command::Round { categories } => {
            let letter = require_letter()?;
            let policy = if partial {
                MissingCategoryPolicy::Partial
            } else {
                MissingCategoryPolicy::Abort
            };
            // ad-hoc single-round session; live play gets these from the driver
            let session = GameSession {
                categories,
                rounds: 1,
                players: 1,
                language: s!("de"),
            };
            let resolver = Resolver::new(&store, HttpFetcher).with_policy(policy);
            let answers = resolver.resolve_round(&session, letter)?;
            for (category, answer) in session.categories.iter().zip(&answers) {
                println!("{}: {}", category, answer);
            }
        }
        Command::Import => {
            let report = importer::import_all(&mut store, &HttpFetcher)?;
            store.save()?;
            println!(
                "Imported {} answers, skipped {} duplicates ({} total in store)",
                report.imported,
                report.skipped,
                store.len()
            );
        }
        Command::Add { category, letter, answer } => {
            store.add_answer(&category, letter, &answer)?;
            store.save()?;
        }
        Command::Remove { category, letter, answer } => {
            store.remove_answer(&category, letter, &answer)?;
            store.save()?;
        }
        Command::Answers { category } => {
            let letter = require_letter()?;
            for answer in store.get_answers(&category, letter)? {
                println!("{}", answer);
            }
        }
        Command::List => {
            for category in store.list_categories() {
                println!("{}", category);
            }
            println!("{} answers total", store.len());
        }
        Command::Reset => {
            store.reset()?;
            println!("Store reset: {}", store.path().display());
        }
    }
    Ok(())
}

pub fn parse<I>(args: I) -> Result<Params>
where
    I: IntoIterator<Item = String>,
{
    let mut command: Option<Command> = None;
    let mut letter = None;
    let mut store = PathBuf::from(DEFAULT_STORE_FILE);
    let mut partial = false;

    fn set(c: &mut Option<Command>, v: Command) -> Result<()> {
        if c.is_some() {
            return Err(eyre!("More than one command given"));
        }
        *c = Some(v);
        Ok(())
    }

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--resolve" => {
                let category = args.next().ok_or_else(|| eyre!("Missing category for --resolve"))?;
                set(&mut command, Command::Resolve { category })?;
            }
            "--round" => {
                let v = args.next().ok_or_else(|| eyre!("Missing category list for --round"))?;
                let categories: Vec<String> = v
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect();
                if categories.is_empty() {
                    return Err(eyre!("Empty category list for --round"));
                }
                set(&mut command, Command::Round { categories })?;
            }
            "--import" => set(&mut command, Command::Import)?,
            "--add" | "--remove" => {
                let category = args.next().ok_or_else(|| eyre!("Missing category for {a}"))?;
                let l = parse_letter(&args.next().ok_or_else(|| eyre!("Missing letter for {a}"))?)?;
                let answer = args.next().ok_or_else(|| eyre!("Missing answer for {a}"))?;
                let cmd = if a == "--add" {
                    Command::Add { category, letter: l, answer }
                } else {
                    Command::Remove { category, letter: l, answer }
                };
                set(&mut command, cmd)?;
            }
            "--answers" => {
                let category = args.next().ok_or_else(|| eyre!("Missing category for --answers"))?;
                set(&mut command, Command::Answers { category })?;
            }
            "--list" => set(&mut command, Command::List)?,
            "--reset" => set(&mut command, Command::Reset)?,
            "-l" | "--letter" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --letter"))?;
                letter = Some(parse_letter(&v)?);
            }
            "--store" => store = PathBuf::from(args.next().ok_or_else(|| eyre!("Missing store path"))?),
            "--partial" => partial = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(eyre!("Unknown arg: {}", a)),
        }
    }

    let command = command.ok_or_else(|| eyre!("No command given (try --help)"))?;
    Ok(Params { command, letter, store, partial })
}

fn parse_letter(v: &str) -> Result<char> {
    let mut chars = v.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(eyre!("Letter must be a single character: {:?}", v)),
    }
}
