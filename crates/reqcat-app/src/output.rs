use camino::Utf8Path;
use std::io::{ErrorKind, Write};

/// Write `bytes` to `path` through a sibling temp file and a rename.
///
/// Readers see either the previous file or the complete new one. The temp file
/// is removed on every error path.
///
/// A replaced file keeps its permissions; a new one gets the same mode a plain
/// `File::create` would (0666 minus the umask on Unix).
pub fn write_atomic(path: &Utf8Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".reqcat-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir)?;

    match std::fs::metadata(path) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 tempdir")
    }

    #[test]
    fn replaces_existing_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = root(&tmp).join("result.txt");
        std::fs::write(&path, "old").expect("seed");

        write_atomic(&path, b"new\n").expect("write");

        assert_eq!(std::fs::read_to_string(&path).expect("read"), "new\n");
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = root(&tmp);
        write_atomic(&dir.join("result.txt"), b"x").expect("write");

        let names: Vec<String> = std::fs::read_dir(&dir)
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["result.txt".to_string()]);
    }

    #[cfg(unix)]
    fn mode(path: &Utf8Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).expect("metadata").permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn new_file_gets_default_create_mode() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = root(&tmp);
        let plain = dir.join("plain.txt");
        std::fs::write(&plain, "x").expect("plain write");

        let written = dir.join("result.txt");
        write_atomic(&written, b"x").expect("write");

        assert_eq!(mode(&written), mode(&plain));
    }

    #[cfg(unix)]
    #[test]
    fn replaced_file_keeps_its_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let path = root(&tmp).join("result.txt");
        std::fs::write(&path, "old").expect("seed");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).expect("chmod");

        write_atomic(&path, b"new\n").expect("write");

        assert_eq!(mode(&path), 0o640);
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "new\n");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = root(&tmp).join("no/such/dir/result.txt");
        assert!(write_atomic(&path, b"x").is_err());
        assert!(!path.exists());
    }
}
