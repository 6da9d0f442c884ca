//! Interactive weather prompt
//!
//! Each line read is submitted as a city. Requests run concurrently; the
//! controller guarantees only the most recent one is displayed. A watcher
//! task renders every state change and keeps the ambient sound in step.

use std::sync::Arc;

use application::{AmbienceService, Locale, QueryController, QueryError, QueryState, WeatherPresenter};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::debug;

use crate::console::Console;
use crate::render::{render_error, render_view};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    Submit(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":q" | "quit" | "exit" | "sair" => Self::Quit,
            _ => Self::Submit(line.to_string()),
        }
    }
}

/// Text shown for a state, if any
pub fn describe(state: &QueryState, presenter: &WeatherPresenter) -> Option<String> {
    let locale = presenter.locale();
    match state {
        QueryState::Idle => None,
        QueryState::Loading { city, .. } => {
            Some(format!("{} {city}", locale.messages().loading_label))
        },
        QueryState::Ready { snapshot, .. } => Some(render_view(&presenter.present(snapshot), locale)),
        QueryState::Failed { error, .. } => Some(render_error(error, locale)),
    }
}

/// Interactive session wiring
#[derive(Debug)]
pub struct Session {
    pub controller: Arc<QueryController>,
    pub presenter: Arc<WeatherPresenter>,
    pub ambience: Arc<AmbienceService>,
    pub console: Console,
}

impl Session {
    /// Run until EOF or a quit command
    ///
    /// On EOF outstanding requests are awaited so piped input still prints
    /// its result; on quit they are cancelled.
    pub async fn run<R>(self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let Self {
            controller,
            presenter,
            ambience,
            console,
        } = self;
        let locale = presenter.locale();

        let watcher = {
            let mut states = controller.subscribe();
            let console = console.clone();
            tokio::spawn(async move {
                while states.changed().await.is_ok() {
                    let state = states.borrow_and_update().clone();
                    ambience.apply(&state);
                    if let Some(text) = describe(&state, &presenter) {
                        console.line(&text);
                    }
                }
            })
        };

        console.line(prompt_hint(locale));

        let mut lines = input.lines();
        let mut pending = JoinSet::new();
        let mut quit = false;

        while let Some(line) = lines.next_line().await? {
            match Input::parse(&line) {
                Input::Quit => {
                    quit = true;
                    break;
                },
                Input::Submit(city) => {
                    let controller = Arc::clone(&controller);
                    let console = console.clone();
                    pending.spawn(async move {
                        // Provider failures surface through the state watcher
                        if let Err(err @ QueryError::Validation { .. }) =
                            controller.submit_city(city).await
                        {
                            console.line(&render_error(&err, locale));
                        }
                    });
                },
            }
        }

        if quit {
            debug!(outstanding = pending.len(), "Cancelling outstanding queries");
            pending.shutdown().await;
        } else {
            while pending.join_next().await.is_some() {}
        }

        // Dropping the last controller closes the state channel; the watcher
        // drains the final state and exits.
        drop(controller);
        let _ = watcher.await;
        Ok(())
    }
}

const fn prompt_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Digite uma cidade e pressione Enter (:q para sair).",
        Locale::En => "Type a city and press Enter (:q to quit).",
    }
}
