//! Line-driven interactive front-end.
//!
//! Re-renders the screen on every state change and turns stdin lines into
//! user actions. The recommendation request runs in the background so the
//! "Searching..." state is visible while it is in flight.

use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use api_client::RecommenderApi;
use model::GenreId;
use session::{RequestRejected, Session};

use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    List,
    Select(String),
    Recommend,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    let input = match word.to_lowercase().as_str() {
        "list" | "ls" => Input::List,
        "select" | "s" if !rest.is_empty() => Input::Select(rest.to_string()),
        "recommend" | "r" => Input::Recommend,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    };
    Some(input)
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  list              show the genre options");
    println!("  select <genre>    choose a genre");
    println!("  recommend         ask for a recommendation");
    println!("  quit              leave");
}

pub async fn run(api: Arc<dyn RecommenderApi>) -> Result<()> {
    // The catalog task is detached; a failed load just leaves the select disabled
    let (session, _catalog) = Session::mount(api);
    let mut updates = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help();
    print!("{}", render::view(&session.view()));

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                print!("{}", render::view(&session.view()));
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match parse(&line) {
                    None => {}
                    Some(Input::List) => print!("{}", render::select(&session.view().select)),
                    Some(Input::Select(genre)) => {
                        if let Err(err) = session.select_genre(GenreId::new(genre)) {
                            println!("{}", err.to_string().yellow());
                        }
                    }
                    Some(Input::Recommend) => spawn_request(&session),
                    Some(Input::Help) => print_help(),
                    Some(Input::Quit) => break,
                    Some(Input::Unknown(text)) => {
                        println!("{} {}", "Unknown command:".yellow(), text);
                    }
                }
            }
        }
    }

    Ok(())
}

fn spawn_request(session: &Session) {
    let session = session.clone();
    tokio::spawn(async move {
        match session.request_recommendation().await {
            Ok(_) => {}
            Err(RequestRejected::AlreadyLoading) => debug!("Ignoring recommend while searching"),
            Err(rejected @ RequestRejected::NoGenreSelected) => {
                println!("{}", rejected.to_string().yellow());
            }
        }
    });
}
