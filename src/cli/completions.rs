use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    sparsevn completions bash > ~/.bash_completion.d/sparsevn\n\n\
                  Generate zsh completions:\n    sparsevn completions zsh > ~/.zfunc/_sparsevn\n\n\
                  Generate fish completions:\n    sparsevn completions fish > ~/.config/fish/completions/sparsevn.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
