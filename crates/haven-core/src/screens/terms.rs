//! Static text screens.

pub const TERMS_TITLE: &str = "Terms & Conditions";

pub const TERMS_PARAGRAPHS: [&str; 3] = [
    "By opting in to SMS notifications from Link Haven, you agree to receive automated text messages \
regarding service updates, new features, and promotional content. Msg & data rates may apply.",
    "You can opt out at any time by replying STOP. For help, reply HELP. We do not sell or share your data.",
    "Full privacy policy and terms are available upon request.",
];

pub const WELCOME_TITLE: &str = "Welcome to Link Haven";

/// Terms page as plain text, one blank line between paragraphs.
#[must_use]
pub fn render_terms() -> String {
    let mut rendered = String::from(TERMS_TITLE);
    for paragraph in TERMS_PARAGRAPHS {
        rendered.push_str("\n\n");
        rendered.push_str(paragraph);
    }
    rendered
}
