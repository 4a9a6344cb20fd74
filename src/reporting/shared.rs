use std::fmt::Write;

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Number of rank rows to print; `top == 0` means all.
pub(crate) fn visible_rows(total: usize, top: usize) -> usize {
    if top == 0 {
        total
    } else {
        top.min(total)
    }
}

pub(crate) fn format_mass(mass: f64) -> String {
    format!("{mass:.6}")
}

pub(crate) fn format_trace(trace: &[f64]) -> String {
    let mut out = String::new();
    for (step, distance) in trace.iter().enumerate() {
        if step > 0 {
            out.push_str("  ");
        }
        let _ = write!(out, "t{step}={distance:.4}");
    }
    out
}
