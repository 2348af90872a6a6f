#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the cdoc-guard binary.
#[macro_export]
macro_rules! cdoc_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("cdoc-guard"))
    };
}

/// Temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file (and its parent directories) with the given content.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".cdoc-guard.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

/// A function whose Doxygen comment agrees with the declaration.
pub const DOCUMENTED_C: &str = "\
#include <stdlib.h>

/**
 * Fry some eggs.
 *
 * @param[in] count
 *              How many eggs.
 * @param[in,out] pan
 *              Pan to use.
 * @return Number of eggs fried.
 */
int fry(int count, pan_t *pan)
{
    if (count > 0) {
        return count;
    }
    return 0;
}
";

/// Two functions: one undocumented, one with a stale parameter list.
pub const BROKEN_C: &str = "\
int boil(int minutes);

/**
 * Poach.
 *
 * @param[in] egg
 * @param[in] vinegar
 */
void poach(int egg);
";

/// The same function documented in the EDT dialect, with a blank line gap.
pub const EDT_C: &str = "\
/*
 * edt: * function scramble
 *
 * Scramble eggs.
 *
 * Return: cerrno
 *   Whether it worked.
 *
 * Argument: whisk
 *   IN:     Whisk to use.
 */

cerrno scramble(whisk_t whisk);
";
