//! Render use case: print a build plan in the requested format.

use reqcat_render::RenderablePlan;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

pub fn render_plan(plan: &RenderablePlan, format: OrderFormat) -> anyhow::Result<String> {
    let out = match format {
        OrderFormat::Text => reqcat_render::render_order_text(plan),
        OrderFormat::Markdown => reqcat_render::render_order_markdown(plan),
        OrderFormat::Json => {
            let mut text = serde_json::to_string_pretty(&reqcat_render::render_order_json(plan))?;
            text.push('\n');
            text
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqcat_render::PlanEntry;

    fn plan() -> RenderablePlan {
        RenderablePlan {
            output: "result.txt".to_string(),
            entries: vec![PlanEntry {
                id: "a.txt".to_string(),
                has_content: true,
                requires: Vec::new(),
            }],
        }
    }

    #[test]
    fn text_is_one_id_per_line() {
        assert_eq!(render_plan(&plan(), OrderFormat::Text).expect("render"), "a.txt\n");
    }

    #[test]
    fn json_is_parseable() {
        let text = render_plan(&plan(), OrderFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["order"][0]["id"], "a.txt");
    }

    #[test]
    fn markdown_smoke() {
        let md = render_plan(&plan(), OrderFormat::Markdown).expect("render");
        assert!(md.starts_with("# reqcat build plan"));
    }
}
