//! Binding/enum stub writer.
//!
//! Emits two fixed-content Kotlin declaration files the sample app compiles
//! against: an interface with two observable fields and a three-member enum.
//! The content is not derived from the layer tree; this is a deliberately
//! separate example-stub feature. Files are overwritten on every run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Package-relative path of the binding interface file.
pub const BINDING_FILE: &str = "com/sample/myapplication/binding/SampleBinding.kt";

/// Package-relative path of the enum file.
pub const ENUM_FILE: &str = "com/sample/myapplication/enums/Test.kt";

/// Source text of the binding interface declaration.
pub fn binding_stub() -> String {
    "package com.sample.myapplication.binding\n\
     \n\
     import androidx.databinding.ObservableField\n\
     import com.sample.myapplication.enums.Test\n\
     \n\
     interface SampleBinding {\n\
     \n\
     \x20   val name: ObservableField<String>\n\
     \x20   val mode: Test\n\
     \n\
     }\n"
        .to_string()
}

/// Source text of the enum declaration.
pub fn enum_stub() -> String {
    "package com.sample.myapplication.enums\n\
     \n\
     enum class Test {\n\
     \x20   AAA,\n\
     \x20   BBB,\n\
     \x20   CCC\n\
     }\n"
        .to_string()
}

/// Write both stub files under a Kotlin source root, creating package
/// directories as needed. Returns the two file paths written.
pub fn write_stubs_under(src_root: &Path) -> Result<(PathBuf, PathBuf)> {
    let binding_path = src_root.join(BINDING_FILE);
    let enum_path = src_root.join(ENUM_FILE);
    write_stub(&binding_path, &binding_stub())?;
    write_stub(&enum_path, &enum_stub())?;
    Ok((binding_path, enum_path))
}

fn write_stub(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_binding_stub_content() {
        let stub = binding_stub();
        assert!(stub.starts_with("package com.sample.myapplication.binding\n"));
        assert!(stub.contains("val name: ObservableField<String>"));
        assert!(stub.contains("val mode: Test"));
    }

    #[test]
    fn test_enum_stub_content() {
        let stub = enum_stub();
        assert!(stub.contains("enum class Test {"));
        for member in ["AAA", "BBB", "CCC"] {
            assert!(stub.contains(member));
        }
    }

    #[test]
    fn test_write_stubs_creates_package_dirs() {
        let dir = tempdir().unwrap();
        let (binding, enumeration) = write_stubs_under(dir.path()).unwrap();

        assert!(binding.is_file());
        assert!(enumeration.is_file());
        assert!(binding.ends_with(BINDING_FILE));
    }

    #[test]
    fn test_write_stubs_overwrites() {
        let dir = tempdir().unwrap();
        let (binding, _) = write_stubs_under(dir.path()).unwrap();
        fs::write(&binding, "stale").unwrap();

        write_stubs_under(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&binding).unwrap(), binding_stub());
    }
}
