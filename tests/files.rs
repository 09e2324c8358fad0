use std::fs;

use rhuff::{compress_file, decompress_file, Config, HuffError};
use rstest::*;
use tempfile::TempDir;

#[fixture]
fn workdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[rstest]
#[case::text(b"ABRACADABRA".to_vec())]
#[case::single_byte(vec![b'a'; 1000])]
#[case::binary((0..=255u8).cycle().take(3000).collect())]
fn file_round_trip(workdir: TempDir, #[case] content: Vec<u8>) {
    let config = Config::default();
    let input = workdir.path().join("a.txt");
    fs::write(&input, &content).unwrap();

    let compressed = compress_file(&input, &config).unwrap();
    assert_eq!(compressed, workdir.path().join("a.txt.hh"));

    fs::remove_file(&input).unwrap();
    let expanded = decompress_file(&compressed, &config).unwrap();
    assert_eq!(expanded, input);
    assert_eq!(fs::read(&expanded).unwrap(), content);
}

#[rstest]
fn missing_file_is_reported(workdir: TempDir) {
    let input = workdir.path().join("nope.txt");
    let result = compress_file(&input, &Config::default());
    assert!(matches!(result, Err(HuffError::MissingFile(p)) if p == input));
}

#[rstest]
fn empty_file_is_not_compressed(workdir: TempDir) {
    let input = workdir.path().join("empty.txt");
    fs::write(&input, b"").unwrap();

    let result = compress_file(&input, &Config::default());
    assert!(matches!(result, Err(HuffError::EmptyFile(_))));
    assert!(!workdir.path().join("empty.txt.hh").exists());
}

#[rstest]
fn corrupt_file_fails_to_expand(workdir: TempDir) {
    let config = Config::default();
    let input = workdir.path().join("a.txt");
    fs::write(&input, b"some text that will be cut short").unwrap();
    let compressed = compress_file(&input, &config).unwrap();

    let bytes = fs::read(&compressed).unwrap();
    fs::write(&compressed, &bytes[..bytes.len() - 2]).unwrap();

    assert!(matches!(
        decompress_file(&compressed, &config),
        Err(HuffError::Underflow)
    ));
}

#[rstest]
fn configured_extension_is_used(workdir: TempDir) {
    let config = Config::parse("extension = \"huf\"").unwrap();
    let input = workdir.path().join("notes.md");
    fs::write(&input, b"notes notes notes").unwrap();

    let compressed = compress_file(&input, &config).unwrap();
    assert_eq!(compressed, workdir.path().join("notes.md.huf"));
    assert!(compressed.exists());
}

#[rstest]
fn failed_expansion_leaves_no_output(workdir: TempDir) {
    let compressed = workdir.path().join("junk.txt.hh");
    fs::write(&compressed, [0x58u8, 0x56]).unwrap();

    let result = decompress_file(&compressed, &Config::default());
    assert!(matches!(result, Err(HuffError::CorruptTrie(_))));
    assert!(!workdir.path().join("junk.txt").exists());
}

#[rstest]
fn failed_expansion_keeps_existing_output(workdir: TempDir) {
    let original = workdir.path().join("a.txt");
    fs::write(&original, b"precious contents").unwrap();
    let compressed = workdir.path().join("a.txt.hh");
    fs::write(&compressed, [0x58u8, 0x56]).unwrap();

    let result = decompress_file(&compressed, &Config::default());
    assert!(matches!(result, Err(HuffError::CorruptTrie(_))));
    assert_eq!(fs::read(&original).unwrap(), b"precious contents");

    // nothing left behind besides the two files
    assert_eq!(fs::read_dir(workdir.path()).unwrap().count(), 2);
}

#[rstest]
fn recompressing_replaces_previous_output(workdir: TempDir) {
    let config = Config::default();
    let input = workdir.path().join("a.txt");
    fs::write(&input, b"first version").unwrap();
    compress_file(&input, &config).unwrap();

    fs::write(&input, b"second, longer version of the file").unwrap();
    let compressed = compress_file(&input, &config).unwrap();

    fs::remove_file(&input).unwrap();
    decompress_file(&compressed, &config).unwrap();
    assert_eq!(
        fs::read(&input).unwrap(),
        b"second, longer version of the file"
    );
}
