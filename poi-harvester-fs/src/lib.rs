//! Capability-based file helpers for exporters and the CLI.
//!
//! Every helper resolves a directory handle with ambient authority once and
//! performs the actual I/O relative to it through `cap-std`.
#![forbid(unsafe_code)]

use std::io::{self, Read};
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Read a UTF-8 text file into a string.
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Create or truncate the file at `path`, creating missing parent
/// directories first.
pub fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name.as_str())
}

/// Whether `path` names an existing regular file.
pub fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    match dir.metadata(name.as_str()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (anchor, relative) = anchor_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    anchor.create_dir_all(&relative)
}

/// Open the directory containing `path` and return it with the file name.
fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `dir` into an openable anchor and the path below it.
///
/// The anchor is the root, drive prefix or `.`, extended through the last
/// `..` component so the remainder never leaves it.
fn anchor_and_relative(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let (anchor, relative) = split_anchor(dir)?;
    let handle = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((handle, relative))
}

fn split_anchor(dir: &Utf8Path) -> io::Result<(Utf8PathBuf, Utf8PathBuf)> {
    let components: Vec<Component<'_>> = dir.as_std_path().components().collect();
    let last_parent = components
        .iter()
        .rposition(|component| matches!(component, Component::ParentDir));
    if let Some(last) = last_parent {
        let (above, below) = components.split_at(last + 1);
        return Ok((to_utf8(above.iter().collect())?, to_utf8(below.iter().collect())?));
    }
    let anchor = match components.first() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(format!("{prefix}{}", std::path::MAIN_SEPARATOR))
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string()),
        _ => return Ok((Utf8PathBuf::from("."), dir.to_path_buf())),
    };
    let relative = dir
        .strip_prefix(&anchor)
        .map_err(|_| io::Error::other(format!("cannot strip {anchor} from {dir}")))?
        .to_path_buf();
    Ok((anchor, relative))
}

fn to_utf8(path: std::path::PathBuf) -> io::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| io::Error::other(format!("{} is not UTF-8", path.display())))
}
