use std::fs;
use std::path::Path;

use rst2xyz::{Batch, ConvertConfig, PairingMode};

const PDB: &str = "\
REMARK generated by ambpdb
ATOM      1  CA  ALA A   1      11.104   6.134  -6.504
ATOM      2  C   ALA A   1      12.560   6.351  -6.104
ATOM      3  N   GLY A   2       1.000   2.000   3.000
TER
END
";

fn rst_line(values: &[f64]) -> String {
    let mut line: String = values.iter().map(|&v| format!("{v:>12.7}")).collect();
    line.push('\n');
    line
}

fn stage(dir: &Path, frames: &[(&str, String)]) -> (std::path::PathBuf, std::path::PathBuf) {
    let structure = dir.join("model.pdb");
    fs::write(&structure, PDB).unwrap();

    let mut manifest_body = String::new();
    for (name, body) in frames {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        manifest_body.push_str(&format!("{}\n", path.display()));
    }

    let manifest = dir.join("rst_files");
    fs::write(&manifest, manifest_body).unwrap();

    (manifest, structure)
}

fn config(dir: &Path) -> ConvertConfig {
    ConvertConfig {
        output_dir: dir.to_path_buf(),
        ..ConvertConfig::default()
    }
}

#[test]
fn converts_a_manifest_of_restart_files_in_order() {
    let dir = tempfile::tempdir().unwrap();

    let full = format!(
        "frame title\n    3\n{}{}",
        rst_line(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        rst_line(&[7.0, 8.0, 9.0]),
    );
    let truncated = format!("frame title\n    3\n{}", rst_line(&[1.0, 2.0, 3.0]));

    let (manifest, structure) = stage(
        dir.path(),
        &[
            ("frame.10.rst", full),
            ("frame.11.rst", truncated),
        ],
    );

    let batch = Batch::load(&manifest, &structure, config(dir.path())).unwrap();
    let outcome = batch.run(false);

    assert!(outcome.is_clean());
    assert_eq!(
        outcome.written,
        vec![
            dir.path().join("AMBER.points.10.xyz"),
            dir.path().join("AMBER.points.11.xyz"),
        ]
    );

    let complete = fs::read_to_string(&outcome.written[0]).unwrap();
    let lines: Vec<_> = complete.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "3");
    assert_eq!(lines[1], "AMBER.points");
    assert_eq!(
        lines[2],
        "CA    1.0000000000             2.0000000000             3.0000000000"
    );
    assert_eq!(
        lines[3],
        "C     4.0000000000             5.0000000000             6.0000000000"
    );
    assert_eq!(
        lines[4],
        "N     7.0000000000             8.0000000000             9.0000000000"
    );

    // The truncated restart drops the unmatched trailing atoms.
    let short = fs::read_to_string(&outcome.written[1]).unwrap();
    assert_eq!(short.lines().next(), Some("1"));
    assert_eq!(short.lines().count(), 3);
}

#[test]
fn rerunning_the_pipeline_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let body = format!(
        "t\n    3\n{}{}",
        rst_line(&[0.125, -3.5, 9.75, 1.0, 2.0, 3.0]),
        rst_line(&[-0.25, 0.0, 4.5]),
    );
    let (manifest, structure) = stage(dir.path(), &[("frame.4.rst", body)]);

    let first_bytes = {
        let batch = Batch::load(&manifest, &structure, config(dir.path())).unwrap();
        let outcome = batch.run(false);
        fs::read(&outcome.written[0]).unwrap()
    };

    let second_bytes = {
        let batch = Batch::load(&manifest, &structure, config(dir.path())).unwrap();
        let outcome = batch.run(false);
        fs::read(&outcome.written[0]).unwrap()
    };

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn no_valid_coordinate_lines_is_a_zero_atom_frame() {
    let dir = tempfile::tempdir().unwrap();
    let body = "title\n    3\nnot a coordinate line\n".to_string();
    let (manifest, structure) = stage(dir.path(), &[("frame.0.rst", body)]);

    let batch = Batch::load(&manifest, &structure, config(dir.path())).unwrap();
    let outcome = batch.run(false);

    assert!(outcome.is_clean());
    let text = fs::read_to_string(&outcome.written[0]).unwrap();
    assert_eq!(text, "0\nAMBER.points\n");
}

#[test]
fn strict_mode_turns_short_frames_into_failures() {
    let dir = tempfile::tempdir().unwrap();
    let body = format!("t\n    3\n{}", rst_line(&[1.0, 2.0, 3.0]));
    let (manifest, structure) = stage(dir.path(), &[("frame.6.rst", body)]);

    let strict = ConvertConfig {
        pairing: PairingMode::Strict,
        ..config(dir.path())
    };
    let batch = Batch::load(&manifest, &structure, strict).unwrap();
    let outcome = batch.run(false);

    assert!(outcome.written.is_empty());
    assert_eq!(outcome.failures.len(), 1);
}

#[test]
fn custom_basename_and_title_flow_through() {
    let dir = tempfile::tempdir().unwrap();
    let body = format!("t\n    3\n{}", rst_line(&[1.0, 2.0, 3.0]));
    let (manifest, structure) = stage(dir.path(), &[("min.3.rst", body)]);

    let custom = ConvertConfig {
        basename: "points".into(),
        title: "minimized frames".into(),
        ..config(dir.path())
    };
    let batch = Batch::load(&manifest, &structure, custom).unwrap();
    let outcome = batch.run(false);

    assert_eq!(outcome.written, vec![dir.path().join("points.3.xyz")]);
    let text = fs::read_to_string(&outcome.written[0]).unwrap();
    assert_eq!(text.lines().nth(1), Some("minimized frames"));
}
