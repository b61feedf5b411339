//! Built-in cheatsheets.
//!
//! The store is compiled into the binary and built once on first access. It
//! exposes lookups only; there is no way to add, change or remove a topic at
//! runtime.

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// A single shell command and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub command: &'static str,
    pub description: &'static str,
}

impl CommandEntry {
    const fn new(command: &'static str, description: &'static str) -> Self {
        Self {
            command,
            description,
        }
    }
}

impl Display for CommandEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} → {}", self.command, self.description)
    }
}

const GIT: &[CommandEntry] = &[
    CommandEntry::new("git init", "Initialize a new repository"),
    CommandEntry::new("git clone <url>", "Clone a repository"),
    CommandEntry::new("git status", "Show working directory status"),
    CommandEntry::new("git add <file>", "Add file to staging area"),
    CommandEntry::new("git commit -m \"message\"", "Commit changes"),
    CommandEntry::new("git push", "Push changes to remote repository"),
    CommandEntry::new("git pull", "Pull changes from remote repository"),
    CommandEntry::new("git branch", "List branches"),
    CommandEntry::new("git checkout <branch>", "Switch branches"),
    CommandEntry::new("git merge <branch>", "Merge branches"),
    CommandEntry::new("git log", "Show commit history"),
    CommandEntry::new("git reset --hard HEAD", "Reset to last commit"),
];

const DOCKER: &[CommandEntry] = &[
    CommandEntry::new("docker ps", "List running containers"),
    CommandEntry::new("docker stop <container_id>", "Stop a running container"),
    CommandEntry::new("docker images", "List docker images"),
    CommandEntry::new("docker run <image>", "Run a docker image"),
    CommandEntry::new("docker build -t <image_name> .", "Build a docker image"),
    CommandEntry::new("docker rm <container_id>", "Remove a container"),
    CommandEntry::new("docker rmi <image_id>", "Remove an image"),
    CommandEntry::new("docker-compose up", "Start docker compose"),
    CommandEntry::new("docker-compose down", "Stop docker compose"),
];

const LINUX: &[CommandEntry] = &[
    CommandEntry::new("ls -la", "List files with details"),
    CommandEntry::new("cd <directory>", "Change directory"),
    CommandEntry::new("mkdir <directory>", "Make directory"),
    CommandEntry::new("rm <file>", "Remove file"),
    CommandEntry::new("rm -r <directory>", "Remove directory recursively"),
    CommandEntry::new("cp <source> <destination>", "Copy file"),
    CommandEntry::new("mv <source> <destination>", "Move file"),
    CommandEntry::new("grep <pattern> <file>", "Search for pattern in file"),
    CommandEntry::new("chmod +x <file>", "Make file executable"),
    CommandEntry::new("sudo <command>", "Run command as sudo"),
    CommandEntry::new("apt-get install <package>", "Install package"),
    CommandEntry::new("cat <file>", "Display file content"),
];

const REACT: &[CommandEntry] = &[
    CommandEntry::new(
        "npx create-vite@latest my-react-app --template react",
        "Create a new React app with Vite",
    ),
    CommandEntry::new("npm run dev", "Start React development server"),
    CommandEntry::new("npm install <package>", "Install a package"),
    CommandEntry::new("npm run build", "Build for production"),
    CommandEntry::new("npm test", "Run tests"),
];

const NEXTJS: &[CommandEntry] = &[
    CommandEntry::new(
        "npx create-next-app@latest my-next-app",
        "Create a Next.js app",
    ),
    CommandEntry::new("npm run dev", "Start Next.js development server"),
    CommandEntry::new("npm run build", "Build for production"),
    CommandEntry::new("npm run start", "Start production server"),
    CommandEntry::new("npm install <package>", "Install a package"),
];

const NODEJS: &[CommandEntry] = &[
    CommandEntry::new("node index.js", "Run a Node.js script"),
    CommandEntry::new("npm init -y", "Initialize a Node.js project"),
    CommandEntry::new("npm install <package>", "Install a package"),
    CommandEntry::new("npm start", "Start the application"),
];

static BUILTIN: LazyLock<CheatsheetStore> = LazyLock::new(|| {
    CheatsheetStore::from_topics([
        ("git", GIT),
        ("docker", DOCKER),
        ("linux", LINUX),
        ("react", REACT),
        ("nextjs", NEXTJS),
        ("nodejs", NODEJS),
    ])
});

/// Read-only mapping from topic name to its commands, in display order.
#[derive(Debug)]
pub struct CheatsheetStore {
    topics: IndexMap<&'static str, &'static [CommandEntry]>,
}

impl CheatsheetStore {
    /// The cheatsheets shipped with the binary.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn from_topics<I>(topics: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static [CommandEntry])>,
    {
        Self {
            topics: topics.into_iter().collect(),
        }
    }

    /// Looks up a topic by exact, case-sensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TopicNotFound`] if no topic has this name.
    pub fn lookup(&self, topic: &str) -> Result<&'static [CommandEntry]> {
        self.topics
            .get(topic)
            .copied()
            .ok_or_else(|| Error::TopicNotFound(topic.to_string()))
    }

    #[must_use]
    pub fn contains(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    /// Topic names in display order.
    pub fn topics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.topics.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_topic_order() {
        let topics: Vec<&str> = CheatsheetStore::builtin().topics().collect();
        assert_eq!(
            topics,
            vec!["git", "docker", "linux", "react", "nextjs", "nodejs"]
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let store = CheatsheetStore::builtin();
        assert!(store.lookup("git").is_ok());
        assert!(matches!(store.lookup("Git"), Err(Error::TopicNotFound(t)) if t == "Git"));
    }

    #[test]
    fn test_command_entry_display() {
        let entry = CommandEntry::new("git status", "Show working directory status");
        assert_eq!(entry.to_string(), "git status → Show working directory status");
    }

    #[test]
    fn test_from_topics_keeps_insertion_order() {
        let store = CheatsheetStore::from_topics([("zsh", LINUX), ("awk", GIT)]);
        assert_eq!(store.topics().collect::<Vec<_>>(), vec!["zsh", "awk"]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert!(store.contains("awk"));
        assert!(!store.contains("git"));
    }
}
