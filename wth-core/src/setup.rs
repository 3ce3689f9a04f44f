//! One-time environment setup: API key in the shell profile and the `wth`
//! command on the system path.

use anyhow::{Context, Result, anyhow};
use directories::BaseDirs;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::API_KEY_VAR;

pub const PROFILE_FILE: &str = ".zshrc";
pub const INSTALL_TARGET: &str = "/usr/local/bin/wth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    AlreadyPresent,
    Added,
}

/// `~/.zshrc` for the current user.
pub fn profile_path() -> Result<PathBuf> {
    let dirs = BaseDirs::new().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(dirs.home_dir().join(PROFILE_FILE))
}

/// Whether the profile already assigns the API key. A missing profile has no key.
pub fn profile_has_key(profile: &Path) -> Result<bool> {
    if !profile.exists() {
        return Ok(false);
    }

    let contents = fs::read_to_string(profile)
        .with_context(|| format!("Failed to read shell profile: {}", profile.display()))?;

    Ok(contents.contains(&format!("{API_KEY_VAR}=")))
}

/// Append an export line for the key, creating the profile if needed.
pub fn append_key(profile: &Path, key: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(profile)
        .with_context(|| format!("Failed to open shell profile: {}", profile.display()))?;

    write!(file, "\nexport {API_KEY_VAR}={key}\n")
        .with_context(|| format!("Failed to write shell profile: {}", profile.display()))?;

    Ok(())
}

/// Make sure the profile exports the key, asking for it only when absent.
pub fn ensure_api_key(profile: &Path, ask: impl FnOnce() -> Result<String>) -> Result<KeyStatus> {
    if profile_has_key(profile)? {
        return Ok(KeyStatus::AlreadyPresent);
    }

    let key = ask()?;
    append_key(profile, key.trim())?;
    Ok(KeyStatus::Added)
}

/// Point `target` at `source`, replacing whatever was installed there before.
#[cfg(unix)]
pub fn install_command(source: &Path, target: &Path) -> Result<()> {
    use std::os::unix::fs::{PermissionsExt, symlink};

    fs::set_permissions(source, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to make {} executable", source.display()))?;

    // symlink_metadata so a dangling link is replaced too.
    if fs::symlink_metadata(target).is_ok() {
        fs::remove_file(target)
            .with_context(|| format!("Failed to remove existing {}", target.display()))?;
    }

    symlink(source, target).with_context(|| {
        format!("Failed to link {} -> {}", target.display(), source.display())
    })?;

    Ok(())
}

#[cfg(not(unix))]
pub fn install_command(_source: &Path, target: &Path) -> Result<()> {
    Err(anyhow!(
        "Installing {} is only supported on Unix-like systems",
        target.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_has_no_key() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!profile_has_key(&dir.path().join(".zshrc")).unwrap());
    }

    #[test]
    fn key_is_appended_once() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join(".zshrc");
        fs::write(&profile, "alias ll='ls -l'").unwrap();

        let status = ensure_api_key(&profile, || Ok("abc123\n".into())).unwrap();
        assert_eq!(status, KeyStatus::Added);

        let status = ensure_api_key(&profile, || panic!("must not ask twice")).unwrap();
        assert_eq!(status, KeyStatus::AlreadyPresent);

        let contents = fs::read_to_string(&profile).unwrap();
        assert_eq!(contents, "alias ll='ls -l'\nexport WEATHER_API_KEY=abc123\n");
    }

    #[test]
    fn profile_is_created_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join(".zshrc");

        ensure_api_key(&profile, || Ok("k".into())).unwrap();

        assert!(profile_has_key(&profile).unwrap());
    }

    #[test]
    fn prompt_failure_leaves_profile_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join(".zshrc");

        let res = ensure_api_key(&profile, || Err(anyhow!("cancelled")));

        assert!(res.is_err());
        assert!(!profile.exists());
    }

    #[cfg(unix)]
    #[test]
    fn install_replaces_previous_link() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("old-wth");
        let new = dir.path().join("wth-bin");
        let target = dir.path().join("wth");
        fs::write(&old, "old").unwrap();
        fs::write(&new, "new").unwrap();

        install_command(&old, &target).unwrap();
        install_command(&new, &target).unwrap();

        assert_eq!(fs::read_link(&target).unwrap(), new);
        let mode = fs::metadata(&new).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[cfg(unix)]
    #[test]
    fn install_replaces_dangling_link() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("wth-bin");
        let target = dir.path().join("wth");
        fs::write(&source, "bin").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), &target).unwrap();

        install_command(&source, &target).unwrap();

        assert_eq!(fs::read_link(&target).unwrap(), source);
    }
}
