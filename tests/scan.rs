use std::error::Error;
use std::fs;

use wavname_rs::scan::{dataset_dirs, first_wav};

#[test]
fn dataset_dirs_keeps_only_suffixed_directories() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    let root = temp.path();

    fs::create_dir(root.join("Kick.dataset"))?;
    fs::create_dir(root.join("Other"))?;
    fs::create_dir(root.join("Loud.DATASET"))?;
    fs::write(root.join("notes.txt"), "top-level plain file")?;
    fs::write(root.join("stray.dataset"), "file, not a directory")?;

    let dirs = dataset_dirs(root)?;
    assert_eq!(dirs, vec![root.join("Kick.dataset")]);

    Ok(())
}

#[test]
fn dataset_dirs_does_not_recurse() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    fs::create_dir_all(temp.path().join("outer").join("Inner.dataset"))?;

    let dirs = dataset_dirs(temp.path())?;
    assert!(dirs.is_empty(), "nested dataset should not be discovered");

    Ok(())
}

#[test]
fn first_wav_ignores_other_extensions() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    let dir = temp.path();

    fs::write(dir.join("readme.txt"), "not audio")?;
    fs::write(dir.join("take1.aiff"), "wrong extension")?;
    assert_eq!(first_wav(dir)?, None);

    fs::write(dir.join("take1.wav"), "audio")?;
    assert_eq!(first_wav(dir)?, Some(dir.join("take1.wav")));

    Ok(())
}

#[test]
fn first_wav_returns_one_of_the_candidates() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    let dir = temp.path();

    fs::write(dir.join("a.wav"), "first")?;
    fs::write(dir.join("b.wav"), "second")?;

    // Listing order is filesystem-defined; either candidate is acceptable.
    let found = first_wav(dir)?.expect("a candidate should be found");
    assert!(
        found == dir.join("a.wav") || found == dir.join("b.wav"),
        "unexpected candidate {found:?}"
    );

    Ok(())
}

#[test]
fn first_wav_skips_directories_and_does_not_descend() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    let dir = temp.path();

    fs::create_dir(dir.join("fake.wav"))?;
    fs::create_dir(dir.join("nested"))?;
    fs::write(dir.join("nested").join("deep.wav"), "one level down")?;

    assert_eq!(first_wav(dir)?, None);

    Ok(())
}
