use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A standalone repository with one commit.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    temp_dir
}

/// A parent repository with one extractor registered as a git submodule.
pub(crate) struct Superproject {
    _temp_dir: TempDir,
    root: PathBuf,
    submodule_dir: PathBuf,
}

impl Superproject {
    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn submodule_dir(&self) -> &Path {
        &self.submodule_dir
    }
}

pub(crate) fn create_superproject(submodule_name: &str) -> Superproject {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().canonicalize().unwrap();

    let upstream = base.join("upstream");
    std::fs::create_dir_all(&upstream).unwrap();
    init_repo(&upstream);

    let root = base.join("parent");
    std::fs::create_dir_all(&root).unwrap();
    init_repo(&root);

    let upstream_str = upstream.to_string_lossy().to_string();
    git(
        &root,
        &[
            "-c",
            "protocol.file.allow=always",
            "submodule",
            "add",
            &upstream_str,
            submodule_name,
        ],
    );
    git(&root, &["commit", "-m", "Add extractor submodule"]);

    Superproject {
        submodule_dir: root.join(submodule_name),
        root,
        _temp_dir: temp_dir,
    }
}

fn init_repo(path: &Path) {
    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
