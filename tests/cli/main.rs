use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod analyze;
mod classify;
mod init;
mod recode;

const BIN_NAME: &str = "acslang";

pub const FAMILY_TABLE: &str = "\
1, 1199, Indo-European
1201, 1999, Romance
2000, 2999, Sino-Tibetan
3000, 3199, Dravidian
";

pub const LANGUAGE_KEY: &str = "\
625,German
1200,Spanish
1350,Portuguese
2050,Cantonese
3100,Tamil
9500,English only household
9999,English
";

pub const HOUSEHOLD_CSV: &str = "\
RT,SERIALNO,DIVISION,LNGI,HHLANP,HHL
H,2019HU0000001,9,1,9500,1
H,2019HU0000002,9,2,1200,2
H,2019HU0000003,9,2,2050,4
H,2019HU0000004,9,1,3100,4
H,2019HU0000005,9,1,625,3
H,2019HU0000006,9,1,1350,3
";

pub const PERSON_CSV: &str = "\
RT,SERIALNO,SPORDER,AGEP,LANP,LANX,PAP
P,2019HU0000001,1,44,,2,0
P,2019HU0000001,2,12,,2,-1
P,2019HU0000002,1,67,1200,1,3000
P,2019HU0000003,1,51,2050,1,0
P,2019HU0000003,2,49,2050,1,1200
P,2019HU0000004,1,33,3100,1,0
P,2019HU0000005,1,29,625,1,0
P,2019HU0000006,1,58,1350,1,500
";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project directory
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with the default table and survey file names in place.
    pub fn with_survey() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("shortened_fam_labels.txt", FAMILY_TABLE)?;
        test.write_file("language_recode.txt", LANGUAGE_KEY)?;
        test.write_file("psam_h53.csv", HOUSEHOLD_CSV)?;
        test.write_file("psam_p53.csv", PERSON_CSV)?;
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

    pub fn classify_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("classify");
        cmd
    }

    pub fn recode_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("recode");
        cmd
    }

    pub fn analyze_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("analyze");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
