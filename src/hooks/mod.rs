//! Hook file resolution and listing

pub mod listing;
pub mod recognized;
pub mod resolver;

pub use listing::{discover_hooks, list_hooks, merge_hook_names};
pub use recognized::{RECOGNIZED_HOOKS, SAMPLE_SUFFIX, is_recognized, strip_sample_suffix};
pub use resolver::{
    HookState, Resolution, hook_path, hook_state, make_executable, resolve_hook_file, sample_path,
};
