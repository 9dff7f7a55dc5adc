use anyhow::Result;
use std::io::{self, BufRead, Write};
use todo_config::{AppConfig, Session};
use todo_store::{Reducer, Store};

mod actions;
mod error;
mod input;
mod logger;
mod middleware;
mod reducers;
mod state;
mod views;

use actions::{Action, TodoAction};
use middleware::{AddTodoFormMiddleware, LoggingMiddleware};
use reducers::app_reducer;
use state::{AppState, Todo};

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting todo-lander, logging to {:?}", log_file);

    let app_config = AppConfig::load();
    let max_cascade = app_config.max_cascade;

    // Initialize store with middleware
    let mut store =
        Store::new(app_reducer::reducer(app_config))?.with_cascade_limit(max_cascade);

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(AddTodoFormMiddleware::new()));

    let mut session = Session::load();
    let restored = session.todos().iter().map(Todo::new).collect();
    store.dispatch(Action::Todo(TodoAction::Restore(restored)))?;

    // Re-render the list whenever it changes
    let mut rendered = store.state().todos.clone();
    store.subscribe(move |state: &AppState| {
        if state.todos == rendered {
            return;
        }
        rendered = state.todos.clone();
        if let Err(e) = views::render_todos(state, &mut io::stdout().lock()) {
            log::error!("Failed to render todos: {}", e);
        }
    });

    views::render(store.state(), &mut io::stdout().lock())?;

    let result = run_app(&mut store);

    session.set_todos(store.state().todos.texts());
    if let Err(e) = session.save() {
        log::error!("Failed to save session: {:#}", e);
        eprintln!("Failed to save session: {:#}", e);
    }

    log::info!("Exiting todo-lander");
    result
}

fn run_app(store: &mut Store<AppState, Action, impl Reducer<AppState, Action>>) -> Result<()> {
    run_loop(store, &mut io::stdin().lock(), &mut io::stdout())
}

fn run_loop(
    store: &mut Store<AppState, Action, impl Reducer<AppState, Action>>,
    reader: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut buf = Vec::new();

    while store.state().running {
        // EOF ends the session like :quit
        let Some(line) = input::read_line(reader, &mut buf)? else {
            writeln!(out)?;
            break;
        };

        for action in input::actions_for_line(&line) {
            if let Err(e) = store.dispatch(action) {
                log::warn!("Dispatch failed: {}", e);
                eprintln!("Error: {}", e);
                break;
            }
        }

        if store.state().running {
            views::render_prompt(store.state(), out)?;
        }
    }

    Ok(())
}
