use url::Url;

use crate::coordinator::PageTransitions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    External,
    Internal,
}

pub fn classify_href(href: &str) -> LinkTarget {
    match Url::parse(href) {
        Ok(_) => LinkTarget::External,
        Err(_) => LinkTarget::Internal,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    BrowserDefault,
    Intercepted { navigated: bool },
}

#[derive(Default)]
pub struct LinkHooks<'a> {
    pub before_transition: Option<Box<dyn FnOnce() + 'a>>,
    pub on_click: Option<Box<dyn FnOnce() + 'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionLink {
    href: String,
    no_transition: bool,
}

impl TransitionLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            no_transition: false,
        }
    }

    pub fn without_transition(mut self) -> Self {
        self.no_transition = true;
        self
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn target(&self) -> LinkTarget {
        classify_href(&self.href)
    }

    pub fn intercepts(&self) -> bool {
        !self.no_transition && self.target() == LinkTarget::Internal
    }

    pub fn click(&self, transitions: &mut impl PageTransitions, hooks: LinkHooks<'_>) -> ClickOutcome {
        if !self.intercepts() {
            if let Some(on_click) = hooks.on_click {
                on_click();
            }
            return ClickOutcome::BrowserDefault;
        }

        if transitions.is_transitioning() {
            return ClickOutcome::Intercepted { navigated: false };
        }

        if let Some(before) = hooks.before_transition {
            before();
        }
        if let Some(on_click) = hooks.on_click {
            on_click();
        }

        let navigated = transitions.request_navigate(&self.href);
        ClickOutcome::Intercepted { navigated }
    }
}

#[cfg(test)]
#[path = "tests/link_tests.rs"]
mod tests;
