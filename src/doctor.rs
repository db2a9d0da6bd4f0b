//! Health check and diagnostics module.

use crate::{
    git::{GitConfig, HOOKS_PATH_KEY, HooksSource, resolve_hooks_path},
    hooks::{
        HookState, RECOGNIZED_HOOKS, discover_hooks, hook_path, hook_state, is_recognized,
        strip_sample_suffix,
    },
};
use std::path::{Path, PathBuf};

/// Run doctor command to check the hooks directory and every hook in it.
///
/// Returns exit code: 0 if healthy, 1 if issues found.
#[must_use]
pub fn run_doctor<G: GitConfig + ?Sized>(git: &G) -> i32 {
    println!("🏥 git-hooks health check");
    println!("========================");
    println!();

    let mut has_errors = false;
    let mut has_warnings = false;

    let hooks_dir = check_hooks_directory(git, &mut has_errors);
    println!();

    if let Some(hooks_dir) = hooks_dir {
        check_recognized_hooks(&hooks_dir, &mut has_warnings);
        println!();

        check_other_hooks(&hooks_dir, &mut has_errors, &mut has_warnings);
        println!();
    }

    // Summary
    if has_errors {
        println!("❌ Issues found - see above for details");
        1
    } else if has_warnings {
        println!("⚠️  Warnings found - hooks may need attention");
        0 // Warnings don't cause failure
    } else {
        println!("✨ Everything looks healthy!");
        0
    }
}

fn check_hooks_directory<G: GitConfig + ?Sized>(
    git: &G,
    has_errors: &mut bool,
) -> Option<PathBuf> {
    println!("Hooks Directory:");
    match resolve_hooks_path(git) {
        Ok(location) => {
            match location.source {
                HooksSource::Config => println!(
                    "  ✅ From {HOOKS_PATH_KEY}: {}",
                    location.path.display()
                ),
                HooksSource::Default => {
                    println!("  ✅ Default location: {}", location.path.display());
                }
            }

            if location.path.is_dir() {
                println!("  ✅ Directory exists");
                Some(location.path)
            } else {
                println!("  ❌ Directory does not exist");
                *has_errors = true;
                None
            }
        }
        Err(e) => {
            println!("  ❌ {e}");
            *has_errors = true;
            None
        }
    }
}

fn check_recognized_hooks(hooks_dir: &Path, has_warnings: &mut bool) {
    println!("Recognized Hooks:");

    let mut samples = 0;
    let mut missing = 0;
    for hook_name in RECOGNIZED_HOOKS {
        match hook_state(hooks_dir, hook_name) {
            HookState::Active => {
                report_active(hooks_dir, hook_name, has_warnings);
            }
            HookState::SampleOnly => samples += 1,
            HookState::Missing => missing += 1,
        }
    }

    if samples > 0 {
        println!("  ℹ️  {samples} hook(s) only present as .sample");
    }
    if missing > 0 {
        println!("  ℹ️  {missing} hook(s) not installed");
    }
}

fn check_other_hooks(hooks_dir: &Path, has_errors: &mut bool, has_warnings: &mut bool) {
    println!("Other Hooks:");
    match discover_hooks(hooks_dir) {
        Ok(files) => {
            let others: Vec<&String> = files
                .iter()
                .filter(|name| !is_recognized(&strip_sample_suffix(name)))
                .collect();

            if others.is_empty() {
                println!("  ✅ None");
            }
            for name in others {
                if name.ends_with(crate::hooks::SAMPLE_SUFFIX) {
                    println!("  ℹ️  {name} (sample)");
                } else {
                    report_active(hooks_dir, name, has_warnings);
                }
            }
        }
        Err(e) => {
            println!("  ❌ {e}");
            *has_errors = true;
        }
    }
}

fn report_active(hooks_dir: &Path, hook_name: &str, has_warnings: &mut bool) {
    if is_executable(&hook_path(hooks_dir, hook_name)) {
        println!("  ✅ {hook_name}");
    } else {
        println!("  ⚠️  {hook_name} is not executable, git will skip it");
        *has_warnings = true;
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
