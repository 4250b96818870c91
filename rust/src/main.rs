use std::process;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use idgen::{
    Alphabet, CanonicalRequest, Generated, NanoIdRequest, ProquintRequest, WordRequest,
    decode, decode_canonical, encode_canonical, fnv1a64, interpret, is_proquint, parse_wordlist,
    select_word,
};

const ALPHABET_ENV: &str = "IDGEN_NANOID_ALPHABET";
const LENGTH_ENV: &str = "IDGEN_NANOID_LENGTH";
const GROUP_SIZE_ENV: &str = "IDGEN_GROUP_SIZE";
const WORDLIST_ENV: &str = "IDGEN_WORDLIST";

#[derive(Debug, Parser)]
#[command(name = "idgen", version, about = "NanoID, Proquint and word identifiers")]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Random string over an alphabet.
    Nanoid(NanoidArgs),
    /// Pronounceable CVCVC words.
    Proquint(ProquintArgs),
    /// Canonical proquint of an IPv4 address, integer or hex value.
    Canonical(CanonicalArgs),
    /// Decode a proquint back to bytes.
    Decode { proquint: String },
    /// Pick a word from a list.
    Word(WordArgs),
    /// Show how an input is interpreted as a seed.
    Seed { input: String },
    /// Check the built-in reference vectors.
    Selftest,
}

#[derive(Debug, Args)]
struct NanoidArgs {
    /// `alphanumeric`, `numeric`, `readable` or a custom alphabet.
    #[arg(long, env = ALPHABET_ENV, default_value = "readable")]
    alphabet: String,
    #[arg(long, env = LENGTH_ENV, default_value_t = idgen::DEFAULT_LENGTH)]
    length: usize,
    #[arg(long)]
    seed: Option<String>,
    #[arg(long, env = GROUP_SIZE_ENV, default_value_t = 0)]
    group_size: usize,
}

#[derive(Debug, Args)]
struct ProquintArgs {
    /// Length in characters including separators (11 = two words).
    #[arg(long, default_value_t = idgen::CANONICAL_LEN_32)]
    length: usize,
    #[arg(long)]
    seed: Option<String>,
    #[arg(long, env = GROUP_SIZE_ENV, default_value_t = 0)]
    group_size: usize,
}

#[derive(Debug, Args)]
struct CanonicalArgs {
    value: String,
    #[arg(long, default_value_t = 0)]
    group_size: usize,
}

#[derive(Debug, Args)]
struct WordArgs {
    #[arg(long)]
    seed: Option<String>,
    /// Comma-separated custom list.
    #[arg(long, env = WORDLIST_ENV, default_value = "")]
    wordlist: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(kind: &str, out: &Generated, json_out: bool) -> Result<()> {
    for warning in &out.warnings {
        warn!(kind, "{warning}");
    }

    if json_out {
        let payload = json!({
            "kind": kind,
            "id": out.id,
            "warnings": out.warnings,
        });
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{}", out.id);
    }
    Ok(())
}

fn run_nanoid(args: NanoidArgs, json_out: bool) -> Result<()> {
    let request = NanoIdRequest {
        alphabet: Alphabet::parse(&args.alphabet),
        length: args.length,
        seed: args.seed,
        group_size: args.group_size,
    };
    emit("nanoid", &request.generate()?, json_out)
}

fn run_proquint(args: ProquintArgs, json_out: bool) -> Result<()> {
    let request = ProquintRequest {
        length: args.length,
        seed: args.seed,
        group_size: args.group_size,
    };
    emit("proquint", &request.generate()?, json_out)
}

fn run_canonical(args: CanonicalArgs, json_out: bool) -> Result<()> {
    let request = CanonicalRequest {
        value: args.value,
        group_size: args.group_size,
    };
    emit("canonical", &request.generate()?, json_out)
}

fn run_word(args: WordArgs, json_out: bool) -> Result<()> {
    let request = WordRequest {
        seed: args.seed,
        wordlist: parse_wordlist(&args.wordlist),
    };
    emit("word", &request.generate(), json_out)
}

fn run_decode(proquint: &str, json_out: bool) -> Result<()> {
    let bytes = decode(proquint)?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    let value = decode_canonical(proquint).ok();

    if json_out {
        let payload = json!({
            "proquint": proquint,
            "hex": hex,
            "value": value,
        });
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        match value {
            Some(value) => println!("{hex} {value}"),
            None => println!("{hex}"),
        }
    }
    Ok(())
}

fn seed_payload(input: &str) -> Value {
    json!({
        "input": input,
        "seed": interpret(input),
    })
}

fn run_seed(input: &str, json_out: bool) -> Result<()> {
    let seed = interpret(input);
    if json_out {
        println!("{}", serde_json::to_string(&seed_payload(input))?);
    } else {
        println!("seed={} direct_encode={}", seed.value, seed.direct_encode);
    }
    Ok(())
}

fn run_selftest() -> Result<()> {
    let vectors: [(u64, &str); 7] = [
        (0x7f00_0001, "lusab-babad"),
        (0x3f54_dcc1, "gutih-tugad"),
        (0, "babab-babab"),
        (4_294_967_295, "zuzuz-zuzuz"),
        (4_294_967_296, "babab-babad-babab-babab"),
        (9_223_372_036_854_775_807, "luzuz-zuzuz-zuzuz-zuzuz"),
        (u64::MAX, "zuzuz-zuzuz-zuzuz-zuzuz"),
    ];
    for (value, expected) in vectors {
        let got = encode_canonical(value);
        if got != expected {
            bail!("selftest failed: {value} encoded to {got}, expected {expected}");
        }
        if decode_canonical(expected)? != value {
            bail!("selftest failed: {expected} did not decode to {value}");
        }
    }

    if fnv1a64(b"hello world") != 0x779a_65e7_023c_d2e7 {
        bail!("selftest failed: fnv1a64 mismatch");
    }

    let a = NanoIdRequest {
        alphabet: Alphabet::Numeric,
        length: 12,
        seed: Some("42".to_string()),
        group_size: 0,
    };
    if a.generate()?.id != a.generate()?.id {
        bail!("selftest failed: seeded nanoid is not deterministic");
    }

    let sample = ProquintRequest {
        length: 11,
        ..Default::default()
    }
    .generate()?;
    if !is_proquint(&sample.id) {
        bail!("selftest failed: {} is not a proquint", sample.id);
    }

    let word = select_word::<String>("seed-4711", &[]);
    info!(word = %word, "selftest word pick");
    println!("ok");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Nanoid(args) => run_nanoid(args, cli.json),
        Command::Proquint(args) => run_proquint(args, cli.json),
        Command::Canonical(args) => run_canonical(args, cli.json),
        Command::Decode { proquint } => run_decode(&proquint, cli.json),
        Command::Word(args) => run_word(args, cli.json),
        Command::Seed { input } => run_seed(&input, cli.json),
        Command::Selftest => run_selftest(),
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
