//! Permission-bit propagation between input and output files.
//!
//! Only the low 12 permission bits travel through the header.

use std::fs;
use std::io;
use std::path::Path;

#[cfg(unix)]
const PERMISSION_MASK: u32 = 0o7777;

/// Permission bits of the file at `path`.
#[cfg(unix)]
pub fn mode_of(path: &Path) -> io::Result<u16> {
    use std::os::unix::fs::PermissionsExt;
    let mode = fs::metadata(path)?.permissions().mode();
    Ok((mode & PERMISSION_MASK) as u16)
}

/// Apply permission bits to the file at `path`.
#[cfg(unix)]
pub fn apply_mode(path: &Path, mode: u16) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode as u32 & PERMISSION_MASK))
}

#[cfg(not(unix))]
pub fn mode_of(path: &Path) -> io::Result<u16> {
    let readonly = fs::metadata(path)?.permissions().readonly();
    Ok(if readonly { 0o444 } else { lz78_core::constants::DEFAULT_PROTECTION })
}

#[cfg(not(unix))]
pub fn apply_mode(path: &Path, mode: u16) -> io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(mode & 0o222 == 0);
    fs::set_permissions(path, perms)
}
