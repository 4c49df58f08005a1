use reqcat_domain::policy::MissingPolicy;
use reqcat_types::FileId;
use std::collections::BTreeMap;
use std::io::Write;

/// Written after every emitted file, independent of the host platform.
pub const LINE_SEPARATOR: &str = "\n";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitSummary {
    pub written: usize,
    /// Ordered identifiers without content, in order.
    pub skipped: Vec<FileId>,
    pub bytes: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("no content for `{0}`")]
    MissingContent(FileId),
    #[error("write output")]
    Io(#[from] std::io::Error),
}

/// Write each file's content followed by [`LINE_SEPARATOR`], in `order`.
///
/// With [`MissingPolicy::Fail`] the whole order is checked before the first
/// write, so a missing entry leaves `sink` untouched.
pub fn emit<W: Write>(
    order: &[FileId],
    contents: &BTreeMap<FileId, String>,
    sink: &mut W,
    missing: MissingPolicy,
) -> Result<EmitSummary, EmitError> {
    if missing == MissingPolicy::Fail
        && let Some(id) = order.iter().find(|id| !contents.contains_key(*id))
    {
        return Err(EmitError::MissingContent(id.clone()));
    }

    let mut summary = EmitSummary::default();
    for id in order {
        let Some(content) = contents.get(id) else {
            summary.skipped.push(id.clone());
            continue;
        };
        sink.write_all(content.as_bytes())?;
        sink.write_all(LINE_SEPARATOR.as_bytes())?;
        summary.written += 1;
        summary.bytes += (content.len() + LINE_SEPARATOR.len()) as u64;
    }
    sink.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(entries: &[(&str, &str)]) -> BTreeMap<FileId, String> {
        entries
            .iter()
            .map(|(id, body)| (FileId::new(id), body.to_string()))
            .collect()
    }

    fn order(ids: &[&str]) -> Vec<FileId> {
        ids.iter().map(FileId::new).collect()
    }

    #[test]
    fn writes_content_then_separator_in_order() {
        let contents = contents(&[("a.txt", "A"), ("b.txt", "B\n")]);
        let mut out = Vec::new();

        let summary = emit(
            &order(&["b.txt", "a.txt"]),
            &contents,
            &mut out,
            MissingPolicy::Fail,
        )
        .expect("emit");

        assert_eq!(String::from_utf8(out).expect("utf8"), "B\n\nA\n");
        assert_eq!(summary.written, 2);
        assert_eq!(summary.bytes, 5);
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn empty_order_writes_nothing() {
        let mut out = Vec::new();
        let summary = emit(&[], &BTreeMap::new(), &mut out, MissingPolicy::Fail).expect("emit");
        assert!(out.is_empty());
        assert_eq!(summary, EmitSummary::default());
    }

    #[test]
    fn fail_policy_rejects_missing_before_writing() {
        let contents = contents(&[("a.txt", "A")]);
        let mut out = Vec::new();

        let err = emit(
            &order(&["a.txt", "ghost.txt"]),
            &contents,
            &mut out,
            MissingPolicy::Fail,
        )
        .unwrap_err();

        assert!(matches!(err, EmitError::MissingContent(ref id) if id.as_str() == "ghost.txt"));
        assert!(out.is_empty(), "sink must stay untouched");
    }

    #[test]
    fn skip_policy_writes_nothing_for_missing() {
        let contents = contents(&[("a.txt", "A")]);
        let mut out = Vec::new();

        let summary = emit(
            &order(&["ghost.txt", "a.txt"]),
            &contents,
            &mut out,
            MissingPolicy::Skip,
        )
        .expect("emit");

        assert_eq!(String::from_utf8(out).expect("utf8"), "A\n");
        assert_eq!(summary.skipped, order(&["ghost.txt"]));
        assert_eq!(summary.written, 1);
    }

    #[test]
    fn io_errors_propagate() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let contents = contents(&[("a.txt", "A")]);
        let err = emit(&order(&["a.txt"]), &contents, &mut Broken, MissingPolicy::Fail).unwrap_err();
        assert!(matches!(err, EmitError::Io(_)));
    }
}
