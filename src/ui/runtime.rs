use crate::config::UiConfig;
use crate::store::PostsStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the posts screen until the user quits or a signal arrives.
///
/// Network tasks are spawned on `runtime`; the UI loop itself stays on the
/// calling thread.
pub fn run(store: PostsStore, config: &UiConfig, runtime: &Handle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    forward_store_changes(&store, events.sender(), runtime);
    forward_signals(events.sender(), runtime);

    let mut app = App::new(store);
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StoreChanged) => app.sync_posts(),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Posts screen closed");
    drop(guard);
    Ok(())
}

fn forward_store_changes(store: &PostsStore, tx: mpsc::Sender<AppEvent>, runtime: &Handle) {
    let mut updates = store.subscribe();
    runtime.spawn(async move {
        while updates.changed().await.is_ok() {
            if tx.send(AppEvent::StoreChanged).is_err() {
                break;
            }
        }
    });
}

fn forward_signals(tx: mpsc::Sender<AppEvent>, runtime: &Handle) {
    runtime.spawn(async move {
        wait_for_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = tx.send(AppEvent::Shutdown);
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(err) => {
            tracing::warn!(error = %err, "Cannot listen for SIGTERM");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
