use form_observer::{Flag, ObserverContext};
use std::fmt::Write;

/// Human-readable summary: merged flags, then messages per field
pub fn text(ctx: &ObserverContext) -> String {
    let mut out = String::new();

    if ctx.is_empty() {
        out.push_str("No fields registered.\n");
        return out;
    }

    let status = if ctx.flags.valid { "VALID" } else { "INVALID" };
    let _ = writeln!(out, "Form is {status} ({} field(s))", ctx.errors.len());

    let set: Vec<&str> = Flag::ALL
        .iter()
        .filter(|flag| ctx.flags.get(**flag))
        .map(|flag| flag.name())
        .collect();
    let _ = writeln!(out, "Flags: {}", set.join(", "));

    for (vid, messages) in &ctx.errors {
        if messages.is_empty() {
            let _ = writeln!(out, "  {vid}: ok");
        } else {
            for message in messages {
                let _ = writeln!(out, "  {vid}: {message}");
            }
        }
    }

    out
}

pub fn json(ctx: &ObserverContext) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(ctx)?;
    rendered.push('\n');
    Ok(rendered)
}
