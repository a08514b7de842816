// PECOS/crates/pecos-cli/src/main.rs
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info};
use pecos::pecos_qsim::stab::{BulkFrameSim, Circuit, Program, SampleFormat};
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pecos",
    version = env!("CARGO_PKG_VERSION"),
    about = "A stabilizer-circuit quantum simulator",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a circuit once and sample it across many shots.
    Sample(SampleArgs),
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Raw,
    B8,
    Ascii,
}

impl From<OutputFormat> for SampleFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Raw => SampleFormat::Raw,
            OutputFormat::B8 => SampleFormat::B8,
            OutputFormat::Ascii => SampleFormat::Ascii,
        }
    }
}

#[derive(Args)]
struct SampleArgs {
    /// Path to a circuit text file (see the circuit text format in the docs).
    circuit: PathBuf,

    /// Number of shots to draw.
    #[arg(short, long, default_value_t = 1)]
    shots: usize,

    /// Seed the RNG for reproducible output; omit to seed from the system
    /// random source.
    #[arg(long)]
    seed: Option<u64>,

    /// Output encoding for the sampled measurements.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Write samples to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run_sample(args: &SampleArgs) -> Result<(), Box<dyn Error>> {
    debug!("reading circuit from {}", args.circuit.display());
    let text = fs::read_to_string(&args.circuit)?;
    let circuit = Circuit::from_text(&text)?;
    info!(
        "parsed circuit: {} qubits, {} operations",
        circuit.num_qubits,
        circuit.operations.len()
    );

    let program = match args.seed {
        Some(seed) => Program::record_with_seed(&circuit, seed),
        None => Program::record(&circuit),
    };
    info!("recorded {} cycles, {} measurements", program.cycles.len(), program.num_measurements);

    let mut sim = match args.seed {
        Some(seed) => BulkFrameSim::with_seed(circuit.num_qubits, args.shots, seed),
        None => BulkFrameSim::new(circuit.num_qubits, args.shots),
    };
    sim.clear_and_run(&program);

    let format: SampleFormat = args.format.into();
    if matches!(format, SampleFormat::Raw) {
        sim.canonicalize_for_raw();
    }

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(fs::File::create(path)?);
            sim.write_samples(&mut writer, format)?;
            writer.flush()?;
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            sim.write_samples(&mut writer, format)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Sample(args) => run_sample(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
