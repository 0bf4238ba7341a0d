use std::{
    fs::File,
    io::{self, ErrorKind, Read, Write},
    path::Path,
};

use fs4::fs_std::FileExt;

/// Reads the whole file under a shared lock. A missing file is reported as `None`.
pub fn read_locked(path: &Path) -> Result<Option<Vec<u8>>, io::Error> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    FileExt::lock_shared(&file)?;
    let mut buffer = Vec::new();
    let result = file.read_to_end(&mut buffer);
    FileExt::unlock(&file)?;
    result?;

    Ok(Some(buffer))
}

/// Replaces the content of the file under an exclusive lock, creating it if needed. The file is
/// truncated and rewritten in place, so a crash mid-write leaves a partial value behind; readers
/// keep a copy of values they cannot parse.
pub fn write_locked(path: &Path, bytes: &[u8]) -> Result<(), io::Error> {
    // Truncation happens after the lock is taken, so readers never see an empty file that
    // belongs to a writer still waiting for the lock.
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    FileExt::lock_exclusive(&file)?;
    let result = overwrite(&mut file, bytes);
    FileExt::unlock(&file)?;
    result
}

fn overwrite(file: &mut File, bytes: &[u8]) -> Result<(), io::Error> {
    file.set_len(0)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_data()
}
