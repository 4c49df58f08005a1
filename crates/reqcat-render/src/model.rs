#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanEntry {
    pub id: String,
    /// False for identifiers that were required but never scanned.
    pub has_content: bool,
    /// Declared dependencies, duplicates removed, declaration order kept.
    pub requires: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderablePlan {
    pub output: String,
    /// Entries in resolved order.
    pub entries: Vec<PlanEntry>,
}

impl RenderablePlan {
    pub fn missing(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| !e.has_content)
    }
}
