use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::{Path, PathBuf};

pub const MANIFEST_NAME: &str = "namespace.manifest";

#[fixture]
pub fn manifest_text() -> String {
    r#"# two projects sharing lib.c
project $/proj PROJ
file $/proj/readme.txt README
file $/proj/lib.c LIB
project $/proj/sub SUB
file $/proj/sub/main.c MAIN
project $/proj/sub/secrets SECR
file $/proj/sub/secrets/key.txt KEY
project $/app APP
file $/app/lib.c LIB

action PROJ 2001-01-01T00:00:05Z label 1 alice label=beta
action PROJ 2001-01-01T00:00:10Z add 2 alice target=README:readme.txt | import
action PROJ 2001-01-01T00:01:10Z label 3 bob label=v1
action README 2001-01-01T00:00:10Z create 1 alice
action LIB 2001-01-01T00:00:20Z create 1 carol
action SUB 2001-01-01T00:00:30Z add 1 bob target=MAIN:main.c
action SUB 2001-01-01T00:01:20Z destroy 2 bob target=OLD:old.c | cleanup
action MAIN 2001-01-01T00:00:30Z create 1 bob
action MAIN 2001-01-01T00:01:00Z edit 2 carol | fix build
action SECR 2001-01-01T00:00:40Z add 1 dave target=KEY:key.txt
action KEY 2001-01-01T00:00:40Z create 1 dave
corrupt KEY truncated record
"#
    .to_string()
}

#[fixture]
pub fn manifest_dir(manifest_text: String) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    dir.child(MANIFEST_NAME)
        .write_str(&manifest_text)
        .expect("Failed to write manifest");
    dir
}

pub fn manifest_path(dir: &TempDir) -> PathBuf {
    dir.child(MANIFEST_NAME).path().to_path_buf()
}

pub fn run_revscan_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("revscan").expect("Failed to find revscan binary");
    cmd.env_remove("REVSCAN_EXCLUDE");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
