use super::*;
use std::path::PathBuf;
use tempfile::tempdir;

fn ext(s: &str) -> Extension {
    Extension::try_new(s.to_string()).unwrap()
}

fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, b"").unwrap();
    path
}

fn names(files: &[String], root: &Path) -> Vec<String> {
    let mut names: Vec<String> = files
        .iter()
        .map(|f| {
            Path::new(f)
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    names.sort();
    names
}

/// root/a.txt, root/one/b.txt, root/one/two/c.txt, root/one/two/three/d.txt
fn nested_tree() -> tempfile::TempDir {
    let temp = tempdir().unwrap();
    touch(temp.path(), "a.txt");
    touch(temp.path(), "one/b.txt");
    touch(temp.path(), "one/two/c.txt");
    touch(temp.path(), "one/two/three/d.txt");
    temp
}

mod depth {
    use super::*;

    #[test]
    fn test_depth_zero_lists_root_files_only() {
        let temp = nested_tree();
        let files = scan(temp.path(), &ScanOptions::with_depth(0));
        assert_eq!(names(&files, temp.path()), vec!["a.txt"]);
    }

    #[test]
    fn test_depth_two_reaches_second_level() {
        let temp = nested_tree();
        let files = scan(temp.path(), &ScanOptions::with_depth(2));
        assert_eq!(
            names(&files, temp.path()),
            vec!["a.txt", "one/b.txt", "one/two/c.txt"]
        );
    }

    #[test]
    fn test_large_depth_reaches_everything() {
        let temp = nested_tree();
        let files = scan(temp.path(), &ScanOptions::with_depth(usize::MAX));
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_directories_are_not_listed() {
        let temp = nested_tree();
        let files = scan(temp.path(), &ScanOptions::with_depth(5));
        assert!(files.iter().all(|f| Path::new(f).is_file()));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn test_filters_by_extension_ignoring_case() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "notes.MD");
        touch(temp.path(), "report.pdf");
        touch(temp.path(), "Makefile");
        touch(temp.path(), "docs/guide.md");

        let options = ScanOptions {
            max_depth: 1,
            extensions: vec![ext(".md")],
        };
        let files = scan(temp.path(), &options);
        assert_eq!(names(&files, temp.path()), vec!["docs/guide.md", "notes.MD"]);
    }

    #[test]
    fn test_multiple_extensions() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "a.rs");
        touch(temp.path(), "b.toml");
        touch(temp.path(), "c.lock");

        let options = ScanOptions {
            max_depth: 0,
            extensions: vec![ext("rs"), ext("toml")],
        };
        let files = scan(temp.path(), &options);
        assert_eq!(names(&files, temp.path()), vec!["a.rs", "b.toml"]);
    }

    #[test]
    fn test_hidden_files_included() {
        let temp = tempdir().unwrap();
        touch(temp.path(), ".env");
        touch(temp.path(), ".config/settings.toml");

        let files = scan(temp.path(), &ScanOptions::with_depth(1));
        assert_eq!(
            names(&files, temp.path()),
            vec![".config/settings.toml", ".env"]
        );
    }

    #[test]
    fn test_ignore_files_not_honored() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(".gitignore"), b"*.log\n").unwrap();
        touch(temp.path(), "app.log");

        let options = ScanOptions {
            max_depth: 0,
            extensions: vec![ext("log")],
        };
        assert_eq!(names(&scan(temp.path(), &options), temp.path()), vec!["app.log"]);
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp = tempdir().unwrap();
        let files = scan(&temp.path().join("does-not-exist"), &ScanOptions::default());
        assert!(files.is_empty());
    }

    #[test]
    fn test_file_root_yields_nothing() {
        let temp = tempdir().unwrap();
        let file = touch(temp.path(), "single.txt");
        assert!(scan(&file, &ScanOptions::default()).is_empty());
    }

    #[test]
    fn test_non_ascii_names() {
        let temp = tempdir().unwrap();
        touch(temp.path(), "项目/年度报告.pdf");
        let files = scan(temp.path(), &ScanOptions::with_depth(1));
        assert_eq!(names(&files, temp.path()), vec!["项目/年度报告.pdf"]);
    }
}
