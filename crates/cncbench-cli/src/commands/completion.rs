// Dweve CNCBench - CNC Operation Sheet Benchmarking
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Shell completion generation - Tab completion for various shells

use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Generate a shell completion script to stdout for a given command.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::shells::Bash;
/// use cncbench_cli::commands::generate_completion_for_command;
///
/// # fn main() -> Result<(), String> {
/// let mut cmd = Command::new("cncbench");
/// generate_completion_for_command(Bash, &mut cmd)?;
/// # Ok(())
/// # }
/// ```
pub fn generate_completion_for_command<G: Generator>(generator: G, cmd: &mut Command) -> Result<(), String> {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
    Ok(())
}

/// Installation instructions for shell completions.
///
/// Shell names are case-insensitive.
///
/// ```
/// use cncbench_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions("bash").contains("~/.bashrc"));
/// assert_eq!(print_installation_instructions("unknown"), "Unsupported shell");
/// ```
pub fn print_installation_instructions(shell: &str) -> String {
    match shell.to_lowercase().as_str() {
        "bash" => {
            r#"# Bash completion installation:

# For current session only:
eval "$(cncbench completion bash)"

# For persistent installation, add to your ~/.bashrc:
echo 'eval "$(cncbench completion bash)"' >> ~/.bashrc
"#
        }
        "zsh" => {
            r#"# Zsh completion installation:

# For current session only:
eval "$(cncbench completion zsh)"

# Or save to a directory in $fpath:
cncbench completion zsh > ~/.zsh/completions/_cncbench
"#
        }
        "fish" => {
            r#"# Fish completion installation:

cncbench completion fish > ~/.config/fish/completions/cncbench.fish
"#
        }
        "powershell" | "pwsh" => {
            r#"# PowerShell completion installation:

# Add to your PowerShell profile ($PROFILE):
cncbench completion powershell | Out-String | Invoke-Expression
"#
        }
        "elvish" => {
            r#"# Elvish completion installation:

cncbench completion elvish >> ~/.elvish/rc.elv
"#
        }
        _ => "Unsupported shell",
    }
    .to_string()
}
