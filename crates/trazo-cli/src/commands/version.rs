//! Library version synchronization.
//!
//! The measured DSP library declares its version as three `#define`s in a C
//! header; documentation and test files repeat the version as a plain
//! `x.y.z` string and as a `_VERSION_CHECK(x, y, z)` macro call. This
//! command reads the defines, optionally bumps one component, and rewrites
//! every occurrence so the files never drift apart.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

#[derive(Args)]
pub struct VersionArgs {
    /// Bump action: bump-patch, bump-minor or bump-major; omit to just report
    #[arg(value_name = "ACTION")]
    action: Option<String>,

    /// Root of the library checkout to synchronize
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Header file holding the version defines, relative to the root
    #[arg(long, default_value = "dsp/common.h")]
    header: PathBuf,

    /// Macro prefix of the version defines (`<PREFIX>_VERSION_MAJOR` etc.)
    #[arg(long, default_value = "DSP")]
    macro_prefix: String,

    /// Additional files whose version strings are rewritten, relative to the root
    #[arg(long)]
    sync: Vec<PathBuf>,
}

/// A three-part version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Version {
    fn check_macro(&self, prefix: &str) -> String {
        format!(
            "{prefix}_VERSION_CHECK({}, {}, {})",
            self.major, self.minor, self.patch
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bump {
    Patch,
    Minor,
    Major,
}

impl Bump {
    fn parse(action: &str) -> Option<Bump> {
        match action {
            "bump-patch" => Some(Bump::Patch),
            "bump-minor" => Some(Bump::Minor),
            "bump-major" => Some(Bump::Major),
            _ => None,
        }
    }

    fn apply(self, version: Version) -> Version {
        match self {
            Bump::Patch => Version {
                patch: version.patch + 1,
                ..version
            },
            Bump::Minor => Version {
                major: version.major,
                minor: version.minor + 1,
                patch: 0,
            },
            Bump::Major => Version {
                major: version.major + 1,
                minor: 0,
                patch: 0,
            },
        }
    }
}

pub fn run(args: VersionArgs) -> anyhow::Result<()> {
    let header_path = args.root.join(&args.header);
    let header = fs::read_to_string(&header_path)
        .with_context(|| format!("failed to read '{}'", header_path.display()))?;
    let current = read_version(&header, &args.macro_prefix).with_context(|| {
        format!(
            "no {}_VERSION_* defines in '{}'",
            args.macro_prefix,
            header_path.display()
        )
    })?;

    let next = match args.action.as_deref() {
        None => current,
        Some(action) => match Bump::parse(action) {
            Some(bump) => bump.apply(current),
            None => {
                eprintln!("Unrecognised action: {action}");
                std::process::exit(1);
            }
        },
    };

    let updated = rewrite_header(&header, &args.macro_prefix, current, next);
    if updated != header {
        fs::write(&header_path, updated)
            .with_context(|| format!("failed to write '{}'", header_path.display()))?;
    }

    for file in &args.sync {
        let path = args.root.join(file);
        sync_file(&path, &args.macro_prefix, current, next)?;
    }

    println!("{next}");
    Ok(())
}

/// Read the current version from the `#define` lines of a header.
fn read_version(header: &str, prefix: &str) -> Option<Version> {
    let field = |name: &str| -> Option<u32> {
        let define = format!("#define {prefix}_VERSION_{name} ");
        header
            .lines()
            .find_map(|line| line.strip_prefix(&define))
            .and_then(|rest| rest.trim().parse().ok())
    };
    Some(Version {
        major: field("MAJOR")?,
        minor: field("MINOR")?,
        patch: field("PATCH")?,
    })
}

/// Rewrite the version defines and the version-string define.
fn rewrite_header(header: &str, prefix: &str, current: Version, next: Version) -> String {
    let fields = [
        ("MAJOR", current.major, next.major),
        ("MINOR", current.minor, next.minor),
        ("PATCH", current.patch, next.patch),
    ];
    let mut updated = header.to_string();
    for (name, old, new) in fields {
        updated = updated.replace(
            &format!("#define {prefix}_VERSION_{name} {old}"),
            &format!("#define {prefix}_VERSION_{name} {new}"),
        );
    }
    updated.replace(
        &format!("#define {prefix}_VERSION_STRING \"{current}\""),
        &format!("#define {prefix}_VERSION_STRING \"{next}\""),
    )
}

/// Rewrite version occurrences in one synchronized file.
///
/// Empty files are left untouched; files without any occurrence come back
/// byte-identical and are not rewritten.
fn sync_file(path: &Path, prefix: &str, current: Version, next: Version) -> anyhow::Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    if text.is_empty() {
        return Ok(());
    }
    let updated = text
        .replace(&current.to_string(), &next.to_string())
        .replace(&current.check_macro(prefix), &next.check_macro(prefix));
    if updated != text {
        fs::write(path, updated)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "synchronized version");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\
#define DSP_VERSION_MAJOR 1\n\
#define DSP_VERSION_MINOR 4\n\
#define DSP_VERSION_PATCH 2\n\
#define DSP_VERSION_STRING \"1.4.2\"\n";

    #[test]
    fn reads_version_from_defines() {
        let version = read_version(HEADER, "DSP").unwrap();
        assert_eq!(version.to_string(), "1.4.2");
    }

    #[test]
    fn missing_define_is_none() {
        assert!(read_version("#define DSP_VERSION_MAJOR 1\n", "DSP").is_none());
        assert!(read_version(HEADER, "OTHER").is_none());
    }

    #[test]
    fn bump_rules_reset_lower_components() {
        let version = read_version(HEADER, "DSP").unwrap();
        assert_eq!(Bump::Patch.apply(version).to_string(), "1.4.3");
        assert_eq!(Bump::Minor.apply(version).to_string(), "1.5.0");
        assert_eq!(Bump::Major.apply(version).to_string(), "2.0.0");
    }

    #[test]
    fn unknown_action_does_not_parse() {
        assert_eq!(Bump::parse("bump-patch"), Some(Bump::Patch));
        assert_eq!(Bump::parse("patch"), None);
    }

    #[test]
    fn rewrite_header_updates_defines_and_string() {
        let current = read_version(HEADER, "DSP").unwrap();
        let next = Bump::Minor.apply(current);
        let updated = rewrite_header(HEADER, "DSP", current, next);
        assert!(updated.contains("#define DSP_VERSION_MINOR 5"));
        assert!(updated.contains("#define DSP_VERSION_PATCH 0"));
        assert!(updated.contains("\"1.5.0\""));
        assert!(!updated.contains("1.4.2"));
    }

    #[test]
    fn sync_file_rewrites_string_and_check_macro() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "Needs 1.4.2 and DSP_VERSION_CHECK(1, 4, 2).\n").unwrap();

        let current = read_version(HEADER, "DSP").unwrap();
        let next = Bump::Major.apply(current);
        sync_file(&path, "DSP", current, next).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Needs 2.0.0 and DSP_VERSION_CHECK(2, 0, 0).\n");
    }

    #[test]
    fn sync_file_leaves_unrelated_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "nothing versioned here\n").unwrap();

        let current = read_version(HEADER, "DSP").unwrap();
        sync_file(&path, "DSP", current, Bump::Patch.apply(current)).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "nothing versioned here\n"
        );
    }
}
