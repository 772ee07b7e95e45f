use clap::Parser;
use std::path::PathBuf;

/// Encrypt or decrypt a file by XOR-combining it with an LCG keystream.
///
/// The transform is self-inverse: running it a second time with the same
/// parameters restores the original file.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The file to encrypt or decrypt.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// The path for the output file.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// LCG seed; emitted verbatim as the first keystream element.
    #[arg(short = 'x', long = "seed", default_value_t = 0)]
    pub seed: u32,

    /// LCG multiplier.
    #[arg(short = 'a', long = "multiplier", default_value_t = 0)]
    pub multiplier: u32,

    /// LCG increment.
    #[arg(short = 'c', long = "increment", default_value_t = 0)]
    pub increment: u32,

    /// LCG modulus. Must be non-zero.
    #[arg(short = 'm', long = "modulus", value_parser = clap::value_parser!(u32).range(1..))]
    pub modulus: u32,

    /// Number of worker threads to use. [0 = auto-detect based on CPU cores]
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}

/// Parses command-line arguments using `clap`.
///
/// Missing required flags and a zero modulus are rejected here, with usage
/// text on stderr, before any file is touched.
pub fn run() -> Result<Args, Box<dyn std::error::Error>> {
    let args = Args::parse();
    Ok(args)
}
