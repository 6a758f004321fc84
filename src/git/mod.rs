//! Git accessor: the timecard only ever needs the current commit hash.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Source of the commit hash a finished session is attributed to.
pub trait HashProvider {
    fn current_hash(&self) -> AppResult<String>;
}

pub struct GitRepo {
    repo: git2::Repository,
}

impl GitRepo {
    /// Open the repository rooted exactly at `path` (no parent discovery).
    pub fn open(path: &Path) -> AppResult<Self> {
        let repo = git2::Repository::open(path)
            .map_err(|_| AppError::NotGitRepo(path.display().to_string()))?;
        Ok(Self { repo })
    }
}

impl HashProvider for GitRepo {
    fn current_hash(&self) -> AppResult<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit.id().to_string())
    }
}

/// Opens the repository only when a hash is actually requested.
#[derive(Debug, Clone)]
pub struct LazyRepo {
    path: PathBuf,
}

impl LazyRepo {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl HashProvider for LazyRepo {
    fn current_hash(&self) -> AppResult<String> {
        GitRepo::open(&self.path)?.current_hash()
    }
}

pub fn is_git_path(path: &Path) -> bool {
    git2::Repository::open(path).is_ok()
}

/// Always answers with the same hash.
#[derive(Debug, Clone)]
pub struct StaticHash(pub String);

impl HashProvider for StaticHash {
    fn current_hash(&self) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn commit_file(repo: &git2::Repository, name: &str) -> git2::Oid {
        let workdir = repo.workdir().unwrap().to_path_buf();
        std::fs::write(workdir.join(name), name).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

        let sig = git2::Signature::now("Tester", "tester@example.com").unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, name, &tree, &parents)
            .unwrap()
    }

    #[test]
    fn non_repository_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(!is_git_path(dir.path()));
        let err = GitRepo::open(dir.path()).err().unwrap();
        assert!(matches!(err, AppError::NotGitRepo(_)));
    }

    #[test]
    fn current_hash_follows_head() {
        let dir = TempDir::new().unwrap();
        let raw = git2::Repository::init(dir.path()).unwrap();
        let first = commit_file(&raw, "a.txt");

        let repo = GitRepo::open(dir.path()).unwrap();
        assert_eq!(repo.current_hash().unwrap(), first.to_string());

        let second = commit_file(&raw, "b.txt");
        assert_eq!(repo.current_hash().unwrap(), second.to_string());
        assert_eq!(repo.current_hash().unwrap().len(), 40);
    }

    #[test]
    fn lazy_repo_only_fails_when_asked_for_a_hash() {
        let dir = TempDir::new().unwrap();
        let lazy = LazyRepo::new(dir.path());
        assert!(matches!(lazy.current_hash(), Err(AppError::NotGitRepo(_))));

        let raw = git2::Repository::init(dir.path()).unwrap();
        let head = commit_file(&raw, "a.txt");
        assert_eq!(lazy.current_hash().unwrap(), head.to_string());
    }

    #[test]
    fn empty_repository_has_no_hash() {
        let dir = TempDir::new().unwrap();
        git2::Repository::init(dir.path()).unwrap();
        let repo = GitRepo::open(dir.path()).unwrap();
        assert!(matches!(repo.current_hash(), Err(AppError::Git(_))));
    }
}
