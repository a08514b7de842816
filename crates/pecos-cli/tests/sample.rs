use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn write_circuit(contents: &str) -> tempfile_path::TempCircuit {
    tempfile_path::TempCircuit::new(contents)
}

/// A tiny scratch-file helper so this test doesn't need an extra crate
/// dependency just to drop a circuit on disk.
mod tempfile_path {
    use std::fs::File;
    use std::io::Write as _;
    use std::path::PathBuf;

    pub struct TempCircuit {
        path: PathBuf,
    }

    impl TempCircuit {
        pub fn new(contents: &str) -> Self {
            let mut path = std::env::temp_dir();
            path.push(format!(
                "pecos-cli-test-{}-{:?}.circuit",
                std::process::id(),
                std::thread::current().id()
            ));
            let mut file = File::create(&path).unwrap();
            file.write_all(contents.as_bytes()).unwrap();
            Self { path }
        }

        pub fn path(&self) -> &std::path::Path {
            &self.path
        }
    }

    impl Drop for TempCircuit {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[test]
fn sample_ascii_output_matches_the_epr_pair_correlation() -> Result<(), Box<dyn std::error::Error>> {
    let circuit = write_circuit("H 0\nCNOT 0 1\nM 0\nM 1\n");

    let mut cmd = Command::cargo_bin("pecos")?;
    let assert = cmd
        .arg("sample")
        .arg(circuit.path())
        .arg("--shots")
        .arg("16")
        .arg("--seed")
        .arg("42")
        .arg("--format")
        .arg("ascii")
        .assert()
        .success();

    let output = assert.get_output();
    let text = String::from_utf8(output.stdout.clone())?;
    for line in text.lines() {
        let bits: Vec<char> = line.chars().collect();
        assert_eq!(bits.len(), 2);
        assert_eq!(bits[0], bits[1], "EPR measurements must agree: {line}");
    }
    Ok(())
}

#[test]
fn sample_rejects_an_unrecognized_gate_name() -> Result<(), Box<dyn std::error::Error>> {
    let circuit = write_circuit("FROB 0\n");

    let mut cmd = Command::cargo_bin("pecos")?;
    cmd.arg("sample")
        .arg(circuit.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized gate name"));
    Ok(())
}
