use crate::RenderablePlan;

pub fn render_order_markdown(plan: &RenderablePlan) -> String {
    let mut out = String::new();

    out.push_str("# reqcat build plan\n\n");
    let missing = plan.missing().count();
    out.push_str(&format!(
        "- Output: `{}`\n- Files: {} ({} without content)\n\n",
        plan.output,
        plan.entries.len(),
        missing
    ));

    if plan.entries.is_empty() {
        out.push_str("Nothing to concatenate.\n");
        return out;
    }

    out.push_str("## Order\n\n");

    for (ix, entry) in plan.entries.iter().enumerate() {
        out.push_str(&format!("{}. `{}`", ix + 1, entry.id));
        if !entry.has_content {
            out.push_str(" (missing)");
        }
        if !entry.requires.is_empty() {
            let requires: Vec<String> = entry.requires.iter().map(|r| format!("`{r}`")).collect();
            out.push_str(&format!(" requires {}", requires.join(", ")));
        }
        out.push('\n');
    }

    out
}
