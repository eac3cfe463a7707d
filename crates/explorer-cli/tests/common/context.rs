use assert_cmd::Command;
use camino_tempfile::{Utf8TempDir as TempDir, tempdir};
use httptest::Server;

pub(crate) struct TestContext {
    home_dir: TempDir,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        // Home
        let home_dir = tempdir().expect("failed to create temp home dir");

        eprintln!("Test environment home directory: {}", home_dir.path());

        Self { home_dir }
    }

    pub(crate) fn home_path(&self) -> &camino::Utf8Path {
        self.home_dir.path()
    }

    pub(crate) fn explorer(&self) -> Command {
        let mut cmd = Command::cargo_bin("explorer").expect("explorer binary exists");

        // Isolate the command
        cmd.current_dir(self.home_path());
        cmd.env("HERON_EXPLORER_HOME", self.home_path());
        cmd.env_remove("HERON_TRACKER_URL");

        cmd
    }

    /// Command pointed at the given tracker through `--tracker-url`.
    pub(crate) fn explorer_with(&self, tracker: &Server) -> Command {
        let mut cmd = self.explorer();
        cmd.args(["--tracker-url", &tracker.url_str("/")]);
        cmd
    }
}
