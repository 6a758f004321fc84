#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding a git repository and an isolated config home.
pub struct Sandbox {
    pub root: TempDir,
}

impl Sandbox {
    pub fn repo(&self) -> PathBuf {
        self.root.path().join("repo")
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn timecard_file(&self) -> PathBuf {
        self.repo().join(".timecard")
    }

    pub fn read_timecard(&self) -> String {
        fs::read_to_string(self.timecard_file()).expect("read .timecard")
    }

    /// `timecard --repo <repo>` with HOME pointing inside the sandbox
    pub fn tc(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("timecard");
        cmd.env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .arg("--repo")
            .arg(self.repo());
        cmd
    }
}

/// Sandbox whose repo directory is a plain folder, not a git repository.
pub fn plain_sandbox() -> Sandbox {
    let root = TempDir::new().expect("tempdir");
    fs::create_dir_all(root.path().join("repo")).expect("repo dir");
    fs::create_dir_all(root.path().join("home")).expect("home dir");
    Sandbox { root }
}

/// Sandbox with an initialised git repository holding one commit.
pub fn git_sandbox() -> Sandbox {
    let sb = plain_sandbox();
    let repo = git2::Repository::init(sb.repo()).expect("git init");
    commit_file(&repo, "README.md");
    sb
}

pub fn commit_file(repo: &git2::Repository, name: &str) -> git2::Oid {
    let workdir: &Path = repo.workdir().expect("workdir");
    fs::write(workdir.join(name), name).expect("write file");

    let mut index = repo.index().expect("index");
    index.add_path(Path::new(name)).expect("add");
    index.write().expect("write index");
    let tree = repo
        .find_tree(index.write_tree().expect("write tree"))
        .expect("tree");

    let sig = git2::Signature::now("Tester", "tester@example.com").expect("sig");
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, name, &tree, &parents)
        .expect("commit")
}
