//! Command Line Interpretation - uses the external CLAP crate.

use clap::Parser;
use log::LevelFilter;

/// Command line arguments for the huffcode binary.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman text codec",
    long_about = "
    Builds a Huffman tree either from the symbol frequencies of the input
    text or from an external symbol:weight table, then encodes the text
    into a '0'/'1' code string and decodes it back, reporting the
    compression ratio against a fixed 8 bits per symbol.

    It is done in the spirit of learning, both learning Rust and learning
    compression techniques."
)]
pub struct Args {
    /// Text to encode and decode
    #[clap(default_value = "HELLO WORLD")]
    pub text: String,

    /// Initialize the tree from a symbol:weight table file instead of
    /// counting the input text
    #[clap(short = 'w', long = "weights")]
    pub weight_file: Option<String>,

    /// Print the Huffman tree after initialization
    #[clap(short = 't', long = "show-tree")]
    pub show_tree: bool,

    /// Sets verbosity. -v adds debug detail, -vv adds trace detail
    #[clap(short = 'v', parse(from_occurrences))]
    pub verbose: usize,

    /// Suppress all output except errors
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Map the verbosity flags onto a log level. The demo output itself is
    /// logged at info, so that is the default.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Args;
    use clap::Parser;
    use log::LevelFilter;

    #[test]
    fn defaults_to_hello_world_at_info() {
        let args = Args::parse_from(["huffcode"]);
        assert_eq!(args.text, "HELLO WORLD");
        assert!(args.weight_file.is_none());
        assert!(!args.show_tree);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn verbosity_ladder() {
        assert_eq!(
            Args::parse_from(["huffcode", "-v"]).log_level(),
            LevelFilter::Debug
        );
        assert_eq!(
            Args::parse_from(["huffcode", "-vv"]).log_level(),
            LevelFilter::Trace
        );
        assert_eq!(
            Args::parse_from(["huffcode", "-q"]).log_level(),
            LevelFilter::Error
        );
    }

    #[test]
    fn weight_file_option() {
        let args = Args::parse_from(["huffcode", "-w", "letter-weight.txt", "HI"]);
        assert_eq!(args.weight_file.as_deref(), Some("letter-weight.txt"));
        assert_eq!(args.text, "HI");
    }
}
