use haven_core::screens::{render_terms, WELCOME_TITLE};

pub fn run_terms() {
    println!("{}", render_terms());
}

pub fn welcome_lines(signed_in_as: Option<&str>) -> Vec<String> {
    let mut lines = vec![WELCOME_TITLE.to_string(), String::new()];
    match signed_in_as {
        Some(email) => {
            lines.push(format!("Signed in as {email}. Try `haven list` or `haven add <URL>`."));
        }
        None => {
            lines.push("Run `haven login` to sign in or `haven signup` to create an account.".to_string());
        }
    }
    lines
}
