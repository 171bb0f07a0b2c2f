//! knapsack: key generation, encryption and decryption CLI
//!
//! Generates knapsack key files, encrypts text/files/stdin to a hex
//! ciphertext, decrypts it again, and runs the general subset-sum solver on
//! small instances for comparison.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use knapsack_pke::cipher::{decrypt_bytes, encrypt_bytes};
use knapsack_pke::keyfile::{export_public_json, load_private_key, load_public_key, save_key_pair};
use knapsack_pke::keys::generate_with_options;
use knapsack_pke::math::KeySampler;
use knapsack_pke::params::{GenerateOptions, KnapsackParams, DEFAULT_KEY_LENGTH};
use knapsack_pke::solve::solve_knapsack;

#[derive(Parser)]
#[command(name = "knapsack")]
#[command(about = "Merkle-Hellman knapsack public-key encryption")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new knapsack key pair
    New(NewArgs),
    /// Encrypt stdin (default), text, or a file using a public key
    Encrypt(EncryptArgs),
    /// Decrypt stdin (default), hex text, or a file using a private key
    Decrypt(DecryptArgs),
    /// Solve a general subset-sum instance
    Solve(SolveArgs),
}

#[derive(Args)]
struct NewArgs {
    /// Desired public/private key length
    #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
    length: usize,

    /// Output directory for public/private key files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Random seed for deterministic key generation (testing only)
    #[arg(long)]
    seed: Option<u64>,

    /// Give up on the multiplier search after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Also write the public key as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InputArgs {
    /// Input given directly on the command line
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Input file
    #[arg(short, long = "in")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct EncryptArgs {
    /// Path of public key file to use for encryption
    #[arg(short, long = "pubfile")]
    pubfile: PathBuf,

    #[command(flatten)]
    io: InputArgs,
}

#[derive(Args)]
struct DecryptArgs {
    /// Path of private key file to use for decryption
    #[arg(short, long = "privfile")]
    privfile: PathBuf,

    #[command(flatten)]
    io: InputArgs,
}

#[derive(Args)]
struct SolveArgs {
    /// Comma-separated positive weights
    #[arg(long, value_delimiter = ',', required = true)]
    weights: Vec<u64>,

    /// Knapsack size to fill exactly
    #[arg(long)]
    target: u64,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    match cli.command {
        Command::New(args) => run_new(args),
        Command::Encrypt(args) => run_encrypt(args),
        Command::Decrypt(args) => run_decrypt(args),
        Command::Solve(args) => run_solve(args),
    }
}

fn run_new(args: NewArgs) -> Result<()> {
    let params = KnapsackParams::with_key_length(args.length);
    params
        .validate()
        .map_err(|e| eyre::eyre!("Invalid parameters: {}", e))?;

    info!("Generating new knapsack with key length {}...", params.key_length);
    let start = Instant::now();

    let mut sampler = match args.seed {
        Some(seed) => KeySampler::with_seed(seed),
        None => KeySampler::new(),
    };
    let options = GenerateOptions {
        deadline: args.timeout_secs.map(Duration::from_secs),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Generating key pair...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let pair = generate_with_options(&params, &options, &mut sampler)
        .with_context(|| "Failed to generate key pair")?;

    pb.finish_with_message("Key pair generated");
    info!("Generation time: {:.2?}", start.elapsed());

    let (public_path, private_path) = save_key_pair(&pair, &args.out_dir)
        .with_context(|| format!("Failed to save keys to {}", args.out_dir.display()))?;

    info!(
        "Saved public key {} to {}",
        pair.public_key().id(),
        public_path.display()
    );
    info!(
        "Saved private key {} to {}",
        pair.private_key().id(),
        private_path.display()
    );

    if args.json {
        let json_path = args.out_dir.join("knapsack_public.json");
        export_public_json(pair.public_key(), &json_path)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        info!("Public key JSON saved to {}", json_path.display());
    }

    Ok(())
}

fn run_encrypt(args: EncryptArgs) -> Result<()> {
    let public_key = load_public_key(&args.pubfile)
        .with_context(|| format!("Failed to load public key {}", args.pubfile.display()))?;
    info!("Encrypting using public key {}...", public_key.id());

    let input = read_input(&args.io)?;
    let ct = encrypt_bytes(&public_key, &input).with_context(|| "Failed to encrypt")?;
    let encoded = hex::encode(ct);

    match &args.io.out {
        Some(path) => {
            write_output(path, encoded.as_bytes())?;
            info!("Successfully encrypted and saved to {}", path.display());
        }
        None => println!("{}", encoded),
    }
    Ok(())
}

fn run_decrypt(args: DecryptArgs) -> Result<()> {
    let private_key = load_private_key(&args.privfile)
        .with_context(|| format!("Failed to load private key {}", args.privfile.display()))?;
    info!("Decrypting using private key {}...", private_key.id());

    // Input to decrypt is always hex encoded
    let raw = read_input(&args.io)?;
    let text = String::from_utf8(raw).with_context(|| "Ciphertext is not valid hex text")?;
    let ct = hex::decode(text.trim()).with_context(|| "Ciphertext is not valid hex")?;

    let plaintext = decrypt_bytes(&private_key, &ct);

    match &args.io.out {
        Some(path) => {
            write_output(path, &plaintext)?;
            info!("Successfully decrypted and saved to {}", path.display());
        }
        None => println!("{}", String::from_utf8_lossy(&plaintext)),
    }
    Ok(())
}

fn run_solve(args: SolveArgs) -> Result<()> {
    info!(
        "Solving knapsack of size {} over {} weights...",
        args.target,
        args.weights.len()
    );
    let start = Instant::now();
    let solution = solve_knapsack(&args.weights, args.target)
        .with_context(|| "Failed to run solver")?;
    info!("Solve time: {:.2?}", start.elapsed());

    match solution {
        Some(subset) => println!("{:?}", subset),
        None => println!("no solution"),
    }
    Ok(())
}

fn read_input(io_args: &InputArgs) -> Result<Vec<u8>> {
    if let Some(text) = &io_args.text {
        return Ok(text.as_bytes().to_vec());
    }
    if let Some(path) = &io_args.input {
        return fs::read(path).with_context(|| format!("Failed to read {}", path.display()));
    }

    info!("Reading input from stdin...");
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .with_context(|| "Failed to read stdin")?;
    Ok(buf)
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
