//! Site header: logo, desktop menubar with flyouts, actions, inline search,
//! quick shortcuts, news ticker and the mobile menu panel.

use platform::config::{SITE_NAME, SITE_TAGLINE};
use platform::{Document, ElementId, InputEvent, Instant, Key, PageId};
use ui::content::{MENU, SHORTCUTS, SOCIAL_LINKS, TICKER};
use ui::labels;
use ui::navigation::{Direction, EscapeScope, Gesture, MenuItem, NavigationController};

use crate::a11y::{Node, Role};
use crate::widget::{EventContext, Widget};

/// The header widget.
pub struct Header {
    nav: NavigationController,
}

impl Header {
    /// Header over the site menu, highlighting `current_page`.
    pub fn new(current_page: PageId) -> Self {
        Self::with_items(&MENU, current_page)
    }

    /// Header over custom menu items.
    pub fn with_items(items: &'static [MenuItem], current_page: PageId) -> Self {
        Self {
            nav: NavigationController::new(items, current_page),
        }
    }

    /// The navigation controller.
    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    /// Mutable navigation controller, for hosts that change the current page.
    pub fn navigation_mut(&mut self) -> &mut NavigationController {
        &mut self.nav
    }

    fn select_entry(&mut self, page: PageId, index: usize, cx: &mut EventContext<'_>) -> bool {
        let Some(entry) = self.nav.item(page).and_then(|item| item.submenu.get(index)) else {
            return false;
        };
        self.nav.select_item(entry.page, cx.navigator);
        true
    }

    fn activate_item(&mut self, page: PageId, now: Instant, cx: &mut EventContext<'_>) -> bool {
        let Some(item) = self.nav.item(page) else {
            return false;
        };
        if item.has_submenu() {
            self.nav.toggle_submenu(page, Gesture::Pointer, now);
        } else {
            self.nav.select_item(page, cx.navigator);
        }
        true
    }

    fn render_logo(&self) -> Node {
        Node::new(Role::Button)
            .id(ElementId::Logo)
            .label(SITE_NAME)
            .child(Node::new(Role::Heading).text(SITE_NAME))
            .child(Node::new(Role::Text).text(SITE_TAGLINE))
    }

    fn render_item(&self, item: &MenuItem) -> Node {
        let trigger = self.current(
            Node::new(Role::Menuitem)
                .id(ElementId::MenuItem(item.page))
                .label(item.label),
            item.page,
        );
        if !item.has_submenu() {
            return trigger;
        }

        let expanded = self.nav.is_expanded(item.page);
        let mut group = Node::new(Role::Group)
            .id(ElementId::MenuGroup(item.page))
            .child(
                trigger
                    .attr("aria-haspopup", "true")
                    .flag("aria-expanded", expanded),
            );
        if expanded {
            let entries = item.submenu.iter().enumerate().map(|(index, entry)| {
                self.current(
                    Node::new(Role::Menuitem)
                        .id(ElementId::SubmenuEntry {
                            page: item.page,
                            index,
                        })
                        .label(entry.label),
                    entry.page,
                )
            });
            group = group.child(
                Node::new(Role::Menu)
                    .id(ElementId::Submenu(item.page))
                    .label(format!("{} {}", item.label, labels::SUBMENU_SUFFIX))
                    .children(entries),
            );
        }
        group
    }

    fn render_menubar(&self) -> Node {
        Node::new(Role::Menubar)
            .id(ElementId::Menubar)
            .label(labels::MAIN_NAVIGATION)
            .children(self.nav.items().iter().map(|item| self.render_item(item)))
    }

    fn render_actions(&self) -> Node {
        let state = self.nav.state();
        let social = SOCIAL_LINKS.iter().enumerate().map(|(index, link)| {
            Node::new(Role::Link)
                .id(ElementId::Social(index))
                .label(link.label)
                .text(link.label)
                .attr("href", link.href)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
        });
        Node::new(Role::Group)
            .children(social)
            .child(
                Node::new(Role::Button)
                    .id(ElementId::SearchToggle)
                    .label(labels::SEARCH_TOGGLE)
                    .flag("aria-expanded", state.search_open),
            )
            .child(
                Node::new(Role::Button)
                    .id(ElementId::Account)
                    .label(labels::ACCOUNT),
            )
            .child(
                Node::new(Role::Button)
                    .id(ElementId::MobileMenuToggle)
                    .label(labels::MOBILE_MENU_TOGGLE)
                    .flag("aria-expanded", state.menu_open),
            )
    }

    fn render_shortcuts(&self) -> Node {
        Node::new(Role::Group).children(SHORTCUTS.iter().map(|shortcut| {
            Node::new(Role::Button)
                .id(ElementId::Shortcut(shortcut.page))
                .label(shortcut.label)
        }))
    }

    fn render_mobile_panel(&self) -> Node {
        let items = self.nav.items().iter().flat_map(|item| {
            let mut nodes = vec![self.current(
                Node::new(Role::Button)
                    .id(ElementId::MobileItem(item.page))
                    .label(item.label),
                item.page,
            )];
            if item.has_submenu() && self.nav.is_expanded(item.page) {
                nodes.extend(item.submenu.iter().enumerate().map(|(index, entry)| {
                    Node::new(Role::Button)
                        .id(ElementId::MobileSubmenuEntry {
                            page: item.page,
                            index,
                        })
                        .label(entry.label)
                }));
            }
            nodes
        });
        Node::new(Role::Navigation)
            .id(ElementId::MobilePanel)
            .children(items)
    }

    fn current(&self, node: Node, page: PageId) -> Node {
        if self.nav.is_current(page) {
            node.attr("aria-current", "page")
        } else {
            node
        }
    }
}

impl Widget for Header {
    fn render(&self) -> Node {
        let state = self.nav.state();
        let mut banner = Node::new(Role::Banner)
            .child(self.render_logo())
            .child(self.render_menubar())
            .child(self.render_actions());
        if state.search_open {
            banner = banner.child(
                Node::new(Role::Searchbox)
                    .id(ElementId::SearchInput)
                    .attr("placeholder", labels::SEARCH_PLACEHOLDER),
            );
        }
        banner = banner
            .child(self.render_shortcuts())
            .child(
                Node::new(Role::Marquee)
                    .children(TICKER.iter().map(|headline| Node::new(Role::Text).text(*headline))),
            );
        if state.menu_open {
            banner = banner.child(self.render_mobile_panel());
        }
        banner
    }

    fn handle(&mut self, target: ElementId, event: InputEvent, cx: &mut EventContext<'_>) -> bool {
        let now = cx.now;
        match (target, event) {
            (_, InputEvent::KeyDown(Key::Escape)) => match EscapeScope::of(target) {
                Some(scope) => {
                    self.nav.close_on_escape(scope);
                    true
                }
                None => false,
            },
            (ElementId::Logo, InputEvent::Click) => {
                self.nav.select_item(PageId::Home, cx.navigator);
                true
            }
            (ElementId::MenuGroup(page), InputEvent::PointerEnter) => {
                self.nav.hover_submenu(page);
                true
            }
            (ElementId::MenuGroup(_), InputEvent::PointerLeave) => {
                self.nav.unhover_submenu();
                true
            }
            (ElementId::MenuItem(page) | ElementId::MobileItem(page), InputEvent::Click) => {
                self.activate_item(page, now, cx)
            }
            (ElementId::MenuItem(page), InputEvent::KeyDown(key)) if key.opens_submenu() => {
                if !self.nav.item(page).is_some_and(MenuItem::has_submenu) {
                    return false;
                }
                self.nav.toggle_submenu(page, Gesture::Keyboard, now);
                true
            }
            (
                ElementId::SubmenuEntry { page, index }
                | ElementId::MobileSubmenuEntry { page, index },
                InputEvent::Click,
            ) => self.select_entry(page, index, cx),
            (
                ElementId::SubmenuEntry { page, index }
                | ElementId::MobileSubmenuEntry { page, index },
                InputEvent::KeyDown(Key::Enter | Key::Space),
            ) => self.select_entry(page, index, cx),
            (ElementId::MobileItem(page), InputEvent::KeyDown(Key::Enter | Key::Space)) => {
                self.activate_item(page, now, cx)
            }
            (ElementId::SubmenuEntry { page, index }, InputEvent::KeyDown(key)) => {
                let direction = match key {
                    Key::ArrowDown => Direction::Down,
                    Key::ArrowUp => Direction::Up,
                    _ => return false,
                };
                self.nav
                    .navigate_submenu_item(page, direction, index, cx.document)
                    .is_some()
            }
            (ElementId::SearchToggle, InputEvent::Click) => {
                self.nav.toggle_search();
                true
            }
            (ElementId::MobileMenuToggle, InputEvent::Click) => {
                self.nav.toggle_mobile_menu();
                true
            }
            (ElementId::Shortcut(page), InputEvent::Click) => {
                self.nav.select_item(page, cx.navigator);
                true
            }
            _ => false,
        }
    }

    fn poll(&mut self, now: Instant, document: &mut dyn Document) {
        self.nav.poll(now, document);
    }
}
