use clap::{Parser, Subcommand};

mod speed;
mod vectors;

/// Correctness and timing harness for big-integer arithmetic.
#[derive(Parser)]
#[command(name = "bnh")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate golden test vectors as ten parallel hex artifacts.
    Vectors {
        /// Number of records to generate.
        #[arg(short, long, default_value_t = 1000)]
        count: usize,
        /// Directory receiving the artifact files.
        #[arg(short, long, default_value = ".")]
        output_dir: String,
        /// Bit width of operand X.
        #[arg(long, default_value_t = 256)]
        x_bits: usize,
        /// Bit width of operand Y.
        #[arg(long, default_value_t = 192)]
        y_bits: usize,
        /// Bit width of operand Z.
        #[arg(long, default_value_t = 256)]
        z_bits: usize,
        /// Filename tag appended to each artifact name.
        #[arg(long, default_value = "8")]
        tag: String,
    },
    /// Time the five dominant operations on 2048-bit operands.
    Speed {
        /// Iterations per looped operation.
        #[arg(short, long, default_value_t = 100)]
        count: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Vectors {
            count,
            output_dir,
            x_bits,
            y_bits,
            z_bits,
            tag,
        } => vectors::run(*count, output_dir, *x_bits, *y_bits, *z_bits, tag),
        Commands::Speed { count } => speed::run(*count),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
