//! Shared test utilities for integration tests
//!
//! Provides fixture texts, temporary workspaces and a preconfigured
//! command builder used across multiple test files.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::prelude::*;

/// Two dated letters in the shape of a published correspondence.
///
/// The splitter yields three segments: the opening date line, then each
/// letter (which carries the next letter's date line). Every segment names
/// a place or correspondent the rule-based tagger recognizes.
pub const CORRESPONDENCE: &str = "\
Halle, den 5. Januar 1874
Lieber Dedekind!
Ich habe über die Mächtigkeit der Mengen nachgedacht.
Ihr ergebener G. Cantor

Halle, den 12. März 1874
Lieber Freund,
Die Frage nach dem Kontinuum beschäftigt mich. Gott hat die ganzen Zahlen gemacht, sagt Kronecker.
Mit herzlichem Gruß
G. Cantor
";

/// Three complete letters, each opening with its salutation.
///
/// Every letter after the first follows a closing phrase, so the splitter
/// finds exactly three boundaries and no preamble.
pub const THREE_LETTERS: &str = "\
Lieber Dedekind!
Die Mengenlehre verlangt, dass wir das Unendliche als vollendet betrachten.
Ihr ergebener G. Cantor

Lieber Freund,
Die Ferien verbringe ich mit der Familie im Harz.
Mit herzlichem Gruß
G. Cantor

Sehr geehrter Herr Weierstrass,
Ich erlaube mir, Ihnen eine kleine Note über trigonometrische Reihen zu senden.
Hochachtungsvoll
Georg Cantor
";

/// Create a workspace with the correspondence as `letters/1874.txt`.
pub fn make_letter_fixture() -> assert_fs::TempDir
{
    // Initialize the temporary project root
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    // Source texts live under letters/ like an acquired collection
    tmp.child("letters/1874.txt")
        .write_str(CORRESPONDENCE)
        .expect("write letters");

    // Return the prepared directory to the caller
    tmp
}

/// `cantor` running inside `dir` against `dir/catalog.db`, quiet and uncolored.
pub fn cantor_in(dir: &assert_fs::TempDir) -> Command
{
    // Build the binary command under test
    let mut cmd = Command::cargo_bin("cantor").expect("binary builds");

    // Pin cwd so config discovery only sees files in the fixture
    cmd.current_dir(dir.path())
        .env_remove("CANTOR_LOG")
        .env_remove("CANTOR__DB_PATH")
        .args(["--no-color", "--db"])
        .arg(dir.path().join("catalog.db"));

    cmd
}
