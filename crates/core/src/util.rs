use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and fold away `.`
/// and `..` components without touching the filesystem, so symlinks are
/// kept as written.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize_lexically(&joined))
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&base.join(path))
    }
}

pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Render a relative path with `/` separators on every platform.
pub fn to_slash(path: &Path) -> Option<String> {
    let parts = path
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize_lexically(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize_lexically(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_resolve_against() {
        assert_eq!(
            resolve_against(Path::new("/proj"), Path::new("./app/assets/_dev/")),
            PathBuf::from("/proj/app/assets/_dev")
        );
        assert_eq!(
            resolve_against(Path::new("/proj"), Path::new("/abs/out")),
            PathBuf::from("/abs/out")
        );
    }

    #[test]
    fn test_to_slash() {
        let rel: PathBuf = ["pages", "top", "index.js"].iter().collect();
        assert_eq!(to_slash(&rel).unwrap(), "pages/top/index.js");
    }

    #[test]
    fn test_absolutize_relative() {
        let abs = absolutize(Path::new("some/./dir")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/dir"));
    }
}
