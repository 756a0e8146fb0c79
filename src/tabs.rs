use std::rc::Rc;

use yew::Reducible;

/// Selection over a fixed list of pane ids. Always exactly one active pane.
#[derive(Debug, Clone, PartialEq)]
pub struct TabSelection {
    panes: Vec<&'static str>,
    active: usize,
}

impl TabSelection {
    /// Starts on `first`, the way the page loads with its first trigger clicked.
    pub fn new(first: &'static str, rest: impl IntoIterator<Item = &'static str>) -> Self {
        let mut panes = vec![first];
        panes.extend(rest);
        Self { panes, active: 0 }
    }

    pub fn active(&self) -> &'static str {
        self.panes[self.active]
    }

    pub fn is_active(&self, pane: &str) -> bool {
        self.active() == pane
    }

    pub fn panes(&self) -> &[&'static str] {
        &self.panes
    }

    /// Activates `pane` if it is one of ours. Unknown ids leave the selection alone.
    pub fn select(&mut self, pane: &str) -> bool {
        match self.panes.iter().position(|p| *p == pane) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}

pub struct SelectTab(pub String);

impl Reducible for TabSelection {
    type Action = SelectTab;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.is_active(&action.0) {
            return self;
        }
        let mut next = (*self).clone();
        if next.select(&action.0) {
            Rc::new(next)
        } else {
            self
        }
    }
}
