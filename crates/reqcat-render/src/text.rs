use crate::RenderablePlan;
use serde_json::{json, Value};

/// One identifier per line, in resolved order.
pub fn render_order_text(plan: &RenderablePlan) -> String {
    let mut out = String::new();
    for entry in &plan.entries {
        out.push_str(&entry.id);
        out.push('\n');
    }
    out
}

pub fn render_order_json(plan: &RenderablePlan) -> Value {
    let entries: Vec<Value> = plan
        .entries
        .iter()
        .map(|e| {
            json!({
                "id": e.id,
                "has_content": e.has_content,
                "requires": e.requires,
            })
        })
        .collect();

    json!({
        "output": plan.output,
        "order": entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanEntry;

    fn plan() -> RenderablePlan {
        RenderablePlan {
            output: "result.txt".to_string(),
            entries: vec![
                PlanEntry {
                    id: "lib/a.txt".to_string(),
                    has_content: true,
                    requires: Vec::new(),
                },
                PlanEntry {
                    id: "main.txt".to_string(),
                    has_content: true,
                    requires: vec!["lib/a.txt".to_string()],
                },
            ],
        }
    }

    #[test]
    fn text_lists_ids_in_order() {
        assert_eq!(render_order_text(&plan()), "lib/a.txt\nmain.txt\n");
    }

    #[test]
    fn json_keeps_order_and_requirements() {
        let v = render_order_json(&plan());
        assert_eq!(v["output"], "result.txt");
        assert_eq!(v["order"][0]["id"], "lib/a.txt");
        assert_eq!(v["order"][1]["requires"][0], "lib/a.txt");
        assert_eq!(v["order"][1]["has_content"], true);
    }
}
