//! Real-time script driver.
//!
//! Replays parsed commands against a [`Session`], keeping the session clock
//! in step with the wall clock so autoplay and deferred focus/play fire as
//! they would in a browser.

use std::io::Write;

use platform::{ElementId, InputEvent, Instant};
use site_ui::{Query, QueryError, Session, SessionError};
use tokio::time::MissedTickBehavior;

use crate::script::Command;

/// Failures while replaying a script.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("element labelled `{0}` takes no input")]
    Inert(String),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("writing output: {0}")]
    Output(#[from] std::io::Error),
    #[error("serializing tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Drives a session from a script, printing trees to `out`.
pub struct Driver<W: Write> {
    session: Session,
    started: tokio::time::Instant,
    tick: std::time::Duration,
    out: W,
}

impl<W: Write> Driver<W> {
    /// `tick` is how often the session clock catches up during `wait`.
    pub fn new(session: Session, tick: std::time::Duration, out: W) -> Self {
        Self {
            session,
            started: tokio::time::Instant::now(),
            tick,
            out,
        }
    }

    /// The driven session.
    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the driver, returning the output sink.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Replay every command in order, stopping at the first failure.
    pub async fn run(&mut self, commands: &[Command]) -> Result<(), DriverError> {
        for (step, command) in commands.iter().enumerate() {
            tracing::debug!(step, "script step");
            self.execute(command).await?;
        }
        self.session.teardown();
        tracing::info!(
            navigations = self.session.navigations().len(),
            "script finished"
        );
        Ok(())
    }

    async fn execute(&mut self, command: &Command) -> Result<(), DriverError> {
        self.sync_clock();
        match command {
            Command::Click(label) => {
                let target = self.resolve(label)?;
                let handled = self.session.click(target)?;
                tracing::info!(%target, handled, "click");
            }
            Command::Hover(page) => {
                self.session
                    .dispatch(ElementId::MenuGroup(*page), InputEvent::PointerEnter)?;
            }
            Command::Leave(page) => {
                self.session
                    .dispatch(ElementId::MenuGroup(*page), InputEvent::PointerLeave)?;
            }
            Command::Key(key) => {
                let handled = self.session.press(*key)?;
                tracing::info!(handled, "key");
            }
            Command::Wait(ms) => self.wait(std::time::Duration::from_millis(*ms)).await,
            Command::Tree => {
                serde_json::to_writer_pretty(&mut self.out, self.session.tree())?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn resolve(&self, label: &str) -> Result<ElementId, DriverError> {
        self.session
            .tree()
            .query_one(&Query::Label(label))?
            .id
            .ok_or_else(|| DriverError::Inert(label.to_string()))
    }

    async fn wait(&mut self, duration: std::time::Duration) {
        let now = tokio::time::Instant::now();
        let deadline = now.checked_add(duration).unwrap_or(now);
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                break;
            }
            tokio::select! {
                _ = ticker.tick() => {}
                () = tokio::time::sleep(remaining) => {}
            }
            self.sync_clock();
        }
        self.sync_clock();
    }

    /// Move the session clock to the wall-clock time since start.
    fn sync_clock(&mut self) {
        let elapsed = self.started.elapsed().as_millis();
        let millis = u64::try_from(elapsed).unwrap_or(u64::MAX);
        self.session.advance_to(Instant::from_millis(millis));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script;
    use site_ui::PageConfig;

    fn driver() -> Driver<Vec<u8>> {
        let session = Session::front_page(PageConfig::default()).unwrap();
        Driver::new(session, std::time::Duration::from_millis(100), Vec::new())
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_then_tree_prints_search_box() {
        let mut driver = driver();
        let commands = script::parse("click Ouvrir la recherche\ntree").unwrap();
        driver.run(&commands).await.unwrap();
        let out = String::from_utf8(driver.into_output()).unwrap();
        assert!(out.contains("Rechercher un article, une enquête..."), "{out}");
        assert!(out.contains("\"role\": \"searchbox\""), "{out}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_follows_wall_clock() {
        let mut driver = driver();
        let commands = script::parse("wait 6000").unwrap();
        driver.execute(&commands[0]).await.unwrap();
        assert_eq!(driver.session().root().hero().carousel().index(), 1);
        assert!(driver.session().now() >= Instant::from_millis(6_000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_keyboard_submenu_focus() {
        let mut driver = driver();
        let commands = script::parse("click Actualités\nkey Escape\nkey ArrowDown").unwrap();
        driver.run(&commands).await.unwrap();
        assert_eq!(
            driver.session().focused(),
            Some(ElementId::SubmenuEntry {
                page: platform::PageId::News,
                index: 0
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_label_stops_script() {
        let mut driver = driver();
        let commands = script::parse("click Nulle part\ntree").unwrap();
        let err = driver.run(&commands).await.unwrap_err();
        assert!(matches!(err, DriverError::Query(QueryError::NotFound { .. })));
        assert!(driver.into_output().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_hover_opens_submenu() {
        let mut driver = driver();
        let commands = script::parse("hover news").unwrap();
        driver.execute(&commands[0]).await.unwrap();
        assert!(driver
            .session()
            .tree()
            .query_one(&Query::Label("Actualités submenu"))
            .is_ok());
    }
}
