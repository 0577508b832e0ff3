//! Health chat terminal client
//!
//! Connects to the proxy server (PROXY_URL, default http://127.0.0.1:8082)
//! and runs the chat loop.

use anyhow::Result;

use healthchat::ui::app::App;
use healthchat::ui::event::{self, EventHandler};
use healthchat::ui::{handler, render};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let proxy_url =
        std::env::var("PROXY_URL").unwrap_or_else(|_| "http://127.0.0.1:8082".to_string());

    event::install_panic_hook();
    let mut terminal = event::init()?;

    let mut app = App::new(&proxy_url);
    let mut events = EventHandler::new();

    let result = run(&mut app, &mut terminal, &mut events).await;

    event::restore()?;
    result
}

async fn run(
    app: &mut App,
    terminal: &mut event::Tui,
    events: &mut EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| render::render(app, frame))?;

        if let Some(evt) = events.next().await {
            handler::handle_event(app, evt);
        }

        // Collect a finished request, if any; ticks keep this loop spinning
        // while the answer is pending
        if app.pending.as_ref().map(|t| t.is_finished()).unwrap_or(false) {
            if let Some(task) = app.pending.take() {
                let result = task
                    .await
                    .unwrap_or_else(|e| Err(anyhow::anyhow!("request task failed: {}", e)));
                app.apply_result(result);
            }
        }
    }

    Ok(())
}
