use clap::Parser;

use crate::constants::{DEFAULT_SHIFT, MAX_SHIFT};

#[derive(Parser, Debug)]
#[command(name = "caesar", version, about = "Interactive Caesar cipher")]
pub struct Cli {
    #[arg(
        long,
        default_value_t = DEFAULT_SHIFT,
        value_parser = clap::value_parser!(u8).range(0..=MAX_SHIFT as i64),
        help = "Shift offered as the default at the prompt"
    )]
    pub shift: u8,
    #[arg(long, help = "Default to encoding punctuation")]
    pub encode_punct: bool,
    #[arg(long, help = "Default to encoding spaces")]
    pub encode_space: bool,
    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}

/// Answers used when the user just presses Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptDefaults {
    pub shift: u8,
    pub encode_punct: bool,
    pub encode_space: bool,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        PromptDefaults {
            shift: DEFAULT_SHIFT,
            encode_punct: false,
            encode_space: false,
        }
    }
}

impl From<&Cli> for PromptDefaults {
    fn from(cli: &Cli) -> Self {
        PromptDefaults {
            shift: cli.shift,
            encode_punct: cli.encode_punct,
            encode_space: cli.encode_space,
        }
    }
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
