//! Human output: the rendered text on one line.

/// The rendered field, with trailing padding kept visible.
pub fn render_human(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(text);
    out.push('\n');
    out
}

pub fn render_refusal_human(message: &str) -> String {
    format!("numrender: {message}\n")
}
