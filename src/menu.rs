use crate::view::PageView;
use std::cell::Cell;

/// Where a document-level click landed relative to the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    MenuButton,
    MenuPanel,
    Outside,
}

#[derive(Default)]
pub struct NavigationMenu {
    open: Cell<bool>,
}

impl NavigationMenu {
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self, view: &impl PageView) -> bool {
        let next = !self.open.get();
        self.open.set(next);
        view.set_menu_open(next);
        next
    }

    /// Returns whether the menu was open before the call.
    pub fn close(&self, view: &impl PageView) -> bool {
        if !self.open.get() {
            return false;
        }

        self.open.set(false);
        view.set_menu_open(false);
        true
    }

    pub fn on_document_click(&self, view: &impl PageView, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Outside => self.close(view),
            ClickTarget::MenuButton | ClickTarget::MenuPanel => false,
        }
    }

    pub fn on_resize(&self, view: &impl PageView, viewport_width: f64, desktop_min_width: f64) -> bool {
        if viewport_width > desktop_min_width {
            self.close(view)
        } else {
            false
        }
    }
}
