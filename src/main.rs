//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use clap::Parser;
use log::info;
use simplelog::{Config, TermLogger, TerminalMode};

use huffcode::coding::HuffmanCodec;
use huffcode::tools::cli::Args;
use huffcode::tools::report::{compression_ratio, render_tree};

fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        args.log_level(),
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    //----- Initialize the codec from whichever weight source was requested
    let codec = match &args.weight_file {
        Some(path) => {
            info!("Initializing Huffman tree from weight table {}", path);
            HuffmanCodec::from_weight_file(path)?
        }
        None => {
            info!("Initializing Huffman tree from input text frequencies");
            HuffmanCodec::from_text(&args.text)?
        }
    };

    let encoded = codec.encode(&args.text)?;
    let decoded = codec.decode(&encoded)?;

    info!("Original text: {}", args.text);
    info!("Encoded text: {}", encoded);
    info!("Decoded text: {}", decoded);
    info!(
        "Compression ratio: {:.3}",
        compression_ratio(args.text.chars().count(), encoded.len())
    );

    if args.show_tree {
        info!("Huffman tree:\n{}", render_tree(codec.root()));
    }

    info!("Done.\n");
    Ok(())
}
