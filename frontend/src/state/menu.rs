use std::rc::Rc;
use yew::Reducible;

/// Open/closed flag of the mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    is_open: bool,
}

/// Glyph shown on the mobile menu trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Menu,
    Close,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Following a link always closes the panel.
    pub fn select_link(&mut self) {
        self.is_open = false;
    }

    pub fn icon(&self) -> MenuIcon {
        if self.is_open {
            MenuIcon::Close
        } else {
            MenuIcon::Menu
        }
    }
}

pub enum MenuAction {
    Toggle,
    SelectLink,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            MenuAction::Toggle => next.toggle(),
            MenuAction::SelectLink => next.select_link(),
        }
        log::debug!("mobile menu open: {}", next.is_open);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Menu);
    }

    #[test]
    fn toggle_twice_returns_to_closed() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Close);
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn select_link_always_closes() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.select_link();
        assert!(!menu.is_open());
        menu.select_link();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Menu);
    }

    #[test]
    fn menu_walkthrough_through_reducer() {
        let menu = Rc::new(MenuState::default());
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.is_open());
        let menu = menu.reduce(MenuAction::SelectLink);
        assert!(!menu.is_open());
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.is_open());
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(!menu.is_open());
    }
}
