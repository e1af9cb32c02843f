use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;

const BIN_NAME: &str = "keydedup";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

/// Captured result of running the binary.
pub struct CmdOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config file search at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn dedupe_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("dedupe");
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn run(mut cmd: Command) -> Result<CmdOutput> {
    let output = cmd.output().context("Failed to run keydedup")?;
    Ok(CmdOutput {
        code: output.status.code(),
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
    })
}

/// A translations file with one duplicate in each language block.
pub const TRANSLATIONS: &str = r#"export enum Language {
  EN = 'en',
  HI = 'hi',
}

export const translations = {
  [Language.EN]: {
    greeting: "hi",
    greeting: "hello",
    farewell: "bye",
  },
  [Language.HI]: {
    // greeting: "placeholder",
    greeting: "namaste",
    farewell: "alvida",
    farewell: "phir milenge",
  },
};
"#;

/// `TRANSLATIONS` with the duplicates removed.
pub const DEDUPED: &str = r#"export enum Language {
  EN = 'en',
  HI = 'hi',
}

export const translations = {
  [Language.EN]: {
    greeting: "hi",
    farewell: "bye",
  },
  [Language.HI]: {
    // greeting: "placeholder",
    greeting: "namaste",
    farewell: "alvida",
  },
};
"#;
