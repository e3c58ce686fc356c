//! Front-page UI testing utilities
//!
//! Playwright-inspired headless testing API over the accessibility tree.
//!
//! # Quick start
//!
//! ```no_run
//! use site_testing::TestPage;
//!
//! let mut page = TestPage::new();
//!
//! // Locate by accessible name, act, assert
//! page.click("Ouvrir la recherche").unwrap();
//! page.get_by_placeholder("Rechercher un article, une enquête...").unwrap();
//! page.assert_attr("Ouvrir la recherche", "aria-expanded", "true").unwrap();
//!
//! // Time is simulated
//! page.advance(6_000);
//! ```
//!
//! Every assertion returns `Result<(), String>` with a descriptive message,
//! so tests can `.unwrap()` for a readable failure.
//!
//! # Snapshot testing
//!
//! ```no_run
//! # use site_testing::TestPage;
//! # let page = TestPage::new();
//! // First run: set UPDATE_SNAPSHOTS=1 to create/update the reference file.
//! page.assert_matches_snapshot("tests/snapshots/front_page.json").unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
// println is allowed in tests, warned in lib code
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use std::path::Path;

use platform::{Duration, ElementId, InputEvent, Key, PageId};

pub use site_ui::{HeroConfig, Node, PageConfig, Query, Role, Session};

// ─────────────────────────────────────────────────────────────────────────────
// TestPage
// ─────────────────────────────────────────────────────────────────────────────

/// Headless front page for UI testing.
///
/// Wraps a [`Session`] and adds:
/// - Lookups by label, label prefix, role, placeholder and text
/// - Label-addressed actions (click, focus, key presses, hover)
/// - Attribute, visibility, focus and navigation assertions
/// - JSON snapshot export and golden-file comparison
///
/// Derefs to [`Session`] for direct access to the widgets and the clock.
pub struct TestPage {
    session: Session,
}

impl TestPage {
    /// Front page with default content, current page `home`, at t = 0.
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::with_config(PageConfig::default()).expect("default hero content has slides")
    }

    /// Front page highlighting `current_page`.
    #[allow(clippy::expect_used)]
    pub fn on_page(current_page: PageId) -> Self {
        Self::with_config(PageConfig {
            current_page,
            ..PageConfig::default()
        })
        .expect("default hero content has slides")
    }

    /// Front page with a custom configuration.
    pub fn with_config(config: PageConfig) -> Result<Self, String> {
        let session = Session::front_page(config).map_err(|e| e.to_string())?;
        Ok(Self { session })
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    fn get(&self, query: Query<'_>) -> Result<&Node, String> {
        self.session
            .tree()
            .query_one(&query)
            .map_err(|e| e.to_string())
    }

    fn get_all(&self, query: Query<'_>) -> Result<Vec<&Node>, String> {
        let nodes = self.session.tree().query_all(&query);
        if nodes.is_empty() {
            Err(format!("no element with {query}"))
        } else {
            Ok(nodes)
        }
    }

    fn query(&self, query: Query<'_>) -> Option<&Node> {
        self.session.tree().query_all(&query).into_iter().next()
    }

    /// The single element labelled `label`.
    pub fn get_by_label(&self, label: &str) -> Result<&Node, String> {
        self.get(Query::Label(label))
    }

    /// Every element labelled `label`; `Err` when there is none.
    pub fn get_all_by_label(&self, label: &str) -> Result<Vec<&Node>, String> {
        self.get_all(Query::Label(label))
    }

    /// First element labelled `label`, if any.
    pub fn query_by_label(&self, label: &str) -> Option<&Node> {
        self.query(Query::Label(label))
    }

    /// Every element whose label starts with `prefix`; `Err` when there is none.
    pub fn get_all_by_label_prefix(&self, prefix: &str) -> Result<Vec<&Node>, String> {
        self.get_all(Query::LabelPrefix(prefix))
    }

    /// The single element with `role`.
    pub fn get_by_role(&self, role: Role) -> Result<&Node, String> {
        self.get(Query::Role(role))
    }

    /// Every element with `role` (possibly none).
    pub fn get_all_by_role(&self, role: Role) -> Vec<&Node> {
        self.session.tree().query_all(&Query::Role(role))
    }

    /// First element with `role`, if any.
    pub fn query_by_role(&self, role: Role) -> Option<&Node> {
        self.query(Query::Role(role))
    }

    /// The single element with placeholder `text`.
    pub fn get_by_placeholder(&self, text: &str) -> Result<&Node, String> {
        self.get(Query::Placeholder(text))
    }

    /// First element with placeholder `text`, if any.
    pub fn query_by_placeholder(&self, text: &str) -> Option<&Node> {
        self.query(Query::Placeholder(text))
    }

    /// The single element whose text is `text`.
    pub fn get_by_text(&self, text: &str) -> Result<&Node, String> {
        self.get(Query::Text(text))
    }

    /// Attribute `name` of the element labelled `label`.
    pub fn attr(&self, label: &str, name: &str) -> Result<Option<String>, String> {
        Ok(self
            .get_by_label(label)?
            .get_attr(name)
            .map(str::to_string))
    }

    fn target(&self, label: &str) -> Result<ElementId, String> {
        self.get_by_label(label)?
            .id
            .ok_or_else(|| format!("element labelled {label:?} cannot receive events"))
    }

    // ── Actions ──────────────────────────────────────────────────────────────

    /// Click the element labelled `label`.
    pub fn click(&mut self, label: &str) -> Result<(), String> {
        let target = self.target(label)?;
        self.click_id(target)
    }

    /// Click the element with `id`.
    pub fn click_id(&mut self, id: ElementId) -> Result<(), String> {
        self.session
            .click(id)
            .map(|_| ())
            .map_err(|e| format!("click {id}: {e}"))
    }

    /// Move keyboard focus to the element labelled `label`.
    pub fn focus(&mut self, label: &str) -> Result<(), String> {
        let target = self.target(label)?;
        self.session
            .focus(target)
            .map_err(|e| format!("focus {target}: {e}"))
    }

    /// Press `key` on the focused element.
    pub fn press(&mut self, key: Key) -> Result<(), String> {
        self.session
            .press(key)
            .map(|_| ())
            .map_err(|e| format!("press: {e}"))
    }

    /// Focus the element labelled `label`, then press `key`.
    pub fn press_on(&mut self, label: &str, key: Key) -> Result<(), String> {
        self.focus(label)?;
        self.press(key)
    }

    /// Move the pointer into the menu group of `page`.
    pub fn hover(&mut self, page: PageId) -> Result<(), String> {
        self.pointer(page, InputEvent::PointerEnter)
    }

    /// Move the pointer out of the menu group of `page`.
    pub fn leave(&mut self, page: PageId) -> Result<(), String> {
        self.pointer(page, InputEvent::PointerLeave)
    }

    fn pointer(&mut self, page: PageId, event: InputEvent) -> Result<(), String> {
        let target = ElementId::MenuGroup(page);
        self.session
            .dispatch(target, event)
            .map(|_| ())
            .map_err(|e| format!("pointer on {target}: {e}"))
    }

    /// Let `ms` milliseconds of simulated time pass.
    pub fn advance(&mut self, ms: u64) {
        self.session.advance(Duration::from_millis(ms));
    }

    // ── Assertions ───────────────────────────────────────────────────────────

    /// Assert that exactly one element is labelled `label`.
    pub fn assert_visible(&self, label: &str) -> Result<(), String> {
        self.get_by_label(label)
            .map(|_| ())
            .map_err(|e| format!("assert_visible: {e}"))
    }

    /// Assert that no element is labelled `label`.
    pub fn assert_hidden(&self, label: &str) -> Result<(), String> {
        match self.get_all_by_label(label) {
            Err(_) => Ok(()),
            Ok(nodes) => Err(format!(
                "assert_hidden: {} element(s) labelled {label:?} are rendered",
                nodes.len()
            )),
        }
    }

    /// Assert that some element has `role`.
    pub fn assert_role_visible(&self, role: Role) -> Result<(), String> {
        self.query_by_role(role)
            .map(|_| ())
            .ok_or_else(|| format!("assert_role_visible: no element with role {role}"))
    }

    /// Assert that no element has `role`.
    pub fn assert_role_hidden(&self, role: Role) -> Result<(), String> {
        let count = self.get_all_by_role(role).len();
        if count == 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_role_hidden: {count} element(s) with role {role} are rendered"
            ))
        }
    }

    /// Assert that attribute `name` of the element labelled `label` equals
    /// `expected`.
    pub fn assert_attr(&self, label: &str, name: &str, expected: &str) -> Result<(), String> {
        let actual = self.attr(label, name)?;
        if actual.as_deref() == Some(expected) {
            Ok(())
        } else {
            Err(format!(
                "assert_attr({label:?}, {name:?}): expected {expected:?}, got {actual:?}"
            ))
        }
    }

    /// Assert that `id` has keyboard focus.
    pub fn assert_focused(&self, id: ElementId) -> Result<(), String> {
        match self.session.focused() {
            Some(focused) if focused == id => Ok(()),
            Some(focused) => Err(format!("assert_focused: expected {id}, focus is on {focused}")),
            None => Err(format!("assert_focused: expected {id}, nothing is focused")),
        }
    }

    /// Assert that the most recent navigation went to `page`.
    pub fn assert_navigated_to(&self, page: PageId) -> Result<(), String> {
        match self.session.navigations().last() {
            Some(last) if *last == page => Ok(()),
            Some(last) => Err(format!(
                "assert_navigated_to: expected {page}, last navigation was {last}"
            )),
            None => Err(format!(
                "assert_navigated_to: expected {page}, no navigation happened"
            )),
        }
    }

    /// Assert that the carousel shows slide `index`.
    pub fn assert_slide(&self, index: usize) -> Result<(), String> {
        let actual = self.session.root().hero().carousel().index();
        if actual == index {
            Ok(())
        } else {
            Err(format!("assert_slide: expected slide {index}, showing {actual}"))
        }
    }

    // ── Snapshot utilities ───────────────────────────────────────────────────

    /// The accessibility tree as pretty-printed JSON.
    pub fn snapshot(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self.session.tree())
            .map_err(|e| format!("Failed to serialize tree: {e}"))
    }

    /// The accessibility tree as a JSON value.
    pub fn snapshot_value(&self) -> Result<serde_json::Value, String> {
        serde_json::to_value(self.session.tree())
            .map_err(|e| format!("Failed to serialize tree: {e}"))
    }

    /// Save the current tree as the golden snapshot.
    ///
    /// Parent directories are created automatically.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let p = path.as_ref();
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create '{}': {e}", parent.display()))?;
        }
        std::fs::write(p, self.snapshot()?)
            .map_err(|e| format!("Failed to write snapshot '{}': {e}", p.display()))
    }

    /// Assert the current tree matches a golden JSON snapshot.
    ///
    /// Set the `UPDATE_SNAPSHOTS=1` environment variable to **update** the
    /// golden file instead of asserting:
    ///
    /// ```bash
    /// UPDATE_SNAPSHOTS=1 cargo test
    /// ```
    pub fn assert_matches_snapshot(&self, golden_path: impl AsRef<Path>) -> Result<(), String> {
        let golden_path = golden_path.as_ref();

        if std::env::var("UPDATE_SNAPSHOTS").is_ok() {
            return self.save_snapshot(golden_path);
        }

        let golden = std::fs::read_to_string(golden_path).map_err(|e| {
            format!(
                "Failed to open snapshot '{}': {e}\nRun with UPDATE_SNAPSHOTS=1 to create it.",
                golden_path.display()
            )
        })?;
        let golden: serde_json::Value = serde_json::from_str(&golden)
            .map_err(|e| format!("Snapshot '{}' is not JSON: {e}", golden_path.display()))?;

        if golden == self.snapshot_value()? {
            Ok(())
        } else {
            Err(format!(
                "Tree differs from snapshot '{}':\n{}",
                golden_path.display(),
                self.snapshot()?
            ))
        }
    }

    // ── Session access ───────────────────────────────────────────────────────

    /// The wrapped session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the wrapped session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

impl Default for TestPage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TestPage {
    type Target = Session;
    fn deref(&self) -> &Self::Target {
        &self.session
    }
}

impl std::ops::DerefMut for TestPage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.session
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
