//! Home, About and Contact, rendered under the active theme.

pub mod about;
pub mod contact;
pub mod home;

pub use about::render_about;
pub use contact::{
    ContactForm, ContactFormError, ContactFormValidator, ContactSubject, SubmissionOutcome,
    render_contact, submit,
};
pub use home::render_home;

use std::fmt;

/// Navigation targets of the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
