//! Shell completion generation with hook name suggestions.

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::{self, Write};

use super::{Cli, HOOK_HELP};
use crate::hooks::RECOGNIZED_HOOKS;

/// Print the completion script for `shell`, offering recognized hook names
/// for the positional hook argument.
///
/// # Errors
///
/// Returns an error if the script cannot be written to stdout
pub fn generate_completions(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(shell, &mut stdout)
}

/// Write the completion script for `shell` to `out`
///
/// # Errors
///
/// Returns an error if clap produces a non UTF-8 script or writing fails
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let mut buffer = Vec::new();
    clap_complete::generate(shell, &mut cmd, &bin_name, &mut buffer);

    let script = String::from_utf8(buffer).context("clap_complete generated invalid UTF-8")?;
    let augmented = augment_script(shell, &bin_name, script);

    out.write_all(instructions(shell, &bin_name).as_bytes())
        .and_then(|()| out.write_all(augmented.as_bytes()))
        .context("failed to write completions")
}

fn instructions(shell: Shell, bin_name: &str) -> String {
    let mut text = format!(
        "# Shell completion for {bin_name}\n#\n# To enable completions, add this to your shell config:\n#\n"
    );

    match shell {
        Shell::Bash => {
            text.push_str("# For bash (~/.bashrc):\n");
            text.push_str(&format!("#   source <({bin_name} --completions bash)\n"));
        }
        Shell::Zsh => {
            text.push_str("# For zsh (~/.zshrc):\n");
            text.push_str(&format!(
                "#   {bin_name} --completions zsh > ~/.zsh/completions/_{bin_name}\n"
            ));
            text.push_str("#   # Ensure fpath includes ~/.zsh/completions\n");
        }
        Shell::Fish => {
            text.push_str("# For fish (~/.config/fish/config.fish):\n");
            text.push_str(&format!("#   {bin_name} --completions fish | source\n"));
        }
        _ => {
            text.push_str(&format!("# For {shell}:\n"));
            text.push_str(&format!(
                "#   {bin_name} --completions {shell} > /path/to/completions/_{bin_name}\n"
            ));
        }
    }

    text.push('\n');
    text
}

fn augment_script(shell: Shell, bin_name: &str, script: String) -> String {
    match shell {
        Shell::Bash => augment_bash(bin_name, script),
        Shell::Zsh => augment_zsh(bin_name, script),
        Shell::Fish => augment_fish(bin_name, script),
        _ => script,
    }
}

fn hook_names() -> String {
    RECOGNIZED_HOOKS.join(" ")
}

fn augment_bash(bin_name: &str, script: String) -> String {
    let mut updated = script;

    let wrapper = format!(
        concat!(
            "\n_{sanitized}_with_hooks() {{\n",
            "    local cur prev\n",
            "    cur=\"${{COMP_WORDS[COMP_CWORD]}}\"\n",
            "    prev=\"${{COMP_WORDS[COMP_CWORD-1]}}\"\n",
            "    case \"${{prev}}\" in\n",
            "        -t|--text-editor|--completions)\n",
            "            _{bin_name} \"$@\"\n",
            "            return 0\n",
            "            ;;\n",
            "    esac\n",
            "    if [[ ${{cur}} != -* ]]; then\n",
            "        COMPREPLY=( $(compgen -W \"{hooks}\" -- \"${{cur}}\") )\n",
            "        return 0\n",
            "    fi\n",
            "    _{bin_name} \"$@\"\n",
            "}}\n",
            "\ncomplete -F _{sanitized}_with_hooks -o bashdefault -o default {bin_name}\n"
        ),
        sanitized = bin_name.replace('-', "_"),
        bin_name = bin_name,
        hooks = hook_names()
    );

    updated.push_str(&wrapper);
    updated
}

fn augment_zsh(bin_name: &str, script: String) -> String {
    let sanitized = bin_name.replace('-', "_");
    let hooks_func = format!("_{sanitized}_hook_names");

    let mut updated = script.replace(
        &format!(":hook -- {HOOK_HELP}:_default"),
        &format!(":hook -- {HOOK_HELP}:{hooks_func}"),
    );

    let helper = format!(
        concat!(
            "\n{func}() {{\n",
            "    local -a hooks\n",
            "    hooks=({hooks})\n",
            "    _describe 'git hooks' hooks\n",
            "}}\n"
        ),
        func = hooks_func,
        hooks = hook_names()
    );

    updated.push_str(&helper);
    updated
}

fn augment_fish(bin_name: &str, script: String) -> String {
    let mut updated = script;
    let sanitized = bin_name.replace('-', "_");
    let helper = format!(
        concat!(
            "\nfunction __fish_{sanitized}_needs_hook\n",
            "    set -l tokens (commandline -opc)\n",
            "    set -e tokens[1]\n",
            "    for token in $tokens\n",
            "        switch $token\n",
            "        case '-*'\n",
            "            continue\n",
            "        case '*'\n",
            "            return 1\n",
            "        end\n",
            "    end\n",
            "    return 0\n",
            "end\n",
            "\ncomplete -c {bin_name} -n \"__fish_{sanitized}_needs_hook\" -f -a \"{hooks}\" -d 'git hook'\n"
        ),
        bin_name = bin_name,
        sanitized = sanitized,
        hooks = hook_names()
    );

    updated.push_str(&helper);
    updated
}
