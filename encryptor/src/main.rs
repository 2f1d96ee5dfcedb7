//! Command-line front end for the substitution cipher toolkit.
//!
//! Reads from `--input-file` or stdin, writes to `--output-file` or stdout.
//! Logs go to stderr so piped output stays clean.

mod io;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use substitution::hack::{hack_dictionary, hack_frequency, WordList};
use substitution::{Cipher, CipherKind, FrequencyModel, SubstitutionCipher};

/// Command-line arguments for the cipher program.
#[derive(Parser, Debug)]
#[command(name = "encryptor", version, about = "Caesar and Vigenère ciphers with key recovery")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt text with a known key
    Encode(CipherArgs),

    /// Decrypt text with a known key
    Decode(CipherArgs),

    /// Add the letter counts of a sample to a frequency model
    Train {
        #[arg(long, help = "Path to the frequency model file")]
        model_file: PathBuf,

        #[arg(long, help = "Path to the input file (stdin if omitted)")]
        input_file: Option<PathBuf>,
    },

    /// Recover the Caesar key of a ciphertext and decrypt it
    Hack {
        #[command(subcommand)]
        method: HackMethod,
    },
}

#[derive(Subcommand, Debug)]
enum HackMethod {
    /// Pick the key producing the most words from a word list
    Base {
        #[arg(long, help = "Path to the word list, one word per line")]
        base_file: PathBuf,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Pick the key whose letter frequencies best match a trained model
    Model {
        #[arg(long, help = "Path to the frequency model file")]
        model_file: PathBuf,

        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Args, Debug)]
struct CipherArgs {
    #[arg(long, help = "Cipher to use (caesar/vigenere)")]
    cipher: CipherKind,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Integer shift for caesar, keyword for vigenere"
    )]
    key: String,

    #[command(flatten)]
    io: IoArgs,
}

#[derive(Args, Debug)]
struct IoArgs {
    #[arg(long, help = "Path to the input file (stdin if omitted)")]
    input_file: Option<PathBuf>,

    #[arg(long, help = "Path to the output file (stdout if omitted)")]
    output_file: Option<PathBuf>,
}

/// Main entry point for the cipher program.
fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli.command)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Encode(args) => transform(args, Direction::Encrypt),
        Command::Decode(args) => transform(args, Direction::Decrypt),
        Command::Train {
            model_file,
            input_file,
        } => train(&model_file, input_file.as_deref()),
        Command::Hack { method } => hack(method),
    }
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn transform(args: CipherArgs, direction: Direction) -> Result<()> {
    // Validate the key before touching any input.
    let cipher = Cipher::from_key(args.cipher, &args.key)
        .with_context(|| format!("Invalid {} key", args.cipher))?;

    let content = io::read_input(args.io.input_file.as_deref())?;
    let result = match direction {
        Direction::Encrypt => cipher.encrypt(&content),
        Direction::Decrypt => cipher.decrypt(&content),
    };

    io::write_output(args.io.output_file.as_deref(), &result)
}

fn train(model_file: &Path, input_file: Option<&Path>) -> Result<()> {
    let sample = io::read_input(input_file)?;
    let model = FrequencyModel::train(model_file, &sample)?;

    info!(
        model = %model_file.display(),
        total = model.total(),
        "model trained"
    );
    Ok(())
}

fn hack(method: HackMethod) -> Result<()> {
    let (recovery, output_file) = match method {
        HackMethod::Base { base_file, io: paths } => {
            let words = WordList::load(&base_file)?;
            let ciphertext = io::read_input(paths.input_file.as_deref())?;
            (hack_dictionary(&ciphertext, &words)?, paths.output_file)
        }
        HackMethod::Model { model_file, io: paths } => {
            let model = FrequencyModel::load(&model_file)?;
            let ciphertext = io::read_input(paths.input_file.as_deref())?;
            (hack_frequency(&ciphertext, &model)?, paths.output_file)
        }
    };

    info!(key = recovery.key, score = recovery.score, "detected cipher key");
    io::write_output(output_file.as_deref(), &recovery.plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Result<Command> {
        let cli = Cli::try_parse_from(std::iter::once("encryptor").chain(args.iter().copied()))?;
        Ok(cli.command)
    }

    fn run_args(args: &[&str]) -> Result<()> {
        run(parse(args)?)
    }

    #[test]
    fn test_parse_negative_caesar_key() {
        let command = parse(&["encode", "--cipher", "caesar", "--key", "-3"]).unwrap();
        match command {
            Command::Encode(args) => {
                assert_eq!(args.cipher, CipherKind::Caesar);
                assert_eq!(args.key, "-3");
                assert!(args.io.input_file.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_cipher_and_method() {
        assert!(parse(&["encode", "--cipher", "enigma", "--key", "1"]).is_err());
        assert!(parse(&["hack", "guess", "--model-file", "m.bin"]).is_err());
        assert!(parse(&["train"]).is_err());
    }

    #[test]
    fn test_encode_decode_files() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let secret = dir.path().join("secret.txt");
        let back = dir.path().join("back.txt");
        fs::write(&plain, "Attack at dawn!").unwrap();

        run_args(&[
            "encode",
            "--cipher",
            "vigenere",
            "--key",
            "Lemon",
            "--input-file",
            plain.to_str().unwrap(),
            "--output-file",
            secret.to_str().unwrap(),
        ])
        .unwrap();
        run_args(&[
            "decode",
            "--cipher",
            "vigenere",
            "--key",
            "lemon",
            "--input-file",
            secret.to_str().unwrap(),
            "--output-file",
            back.to_str().unwrap(),
        ])
        .unwrap();

        assert_ne!(fs::read_to_string(&secret).unwrap(), "Attack at dawn!");
        assert_eq!(fs::read_to_string(&back).unwrap(), "Attack at dawn!");
    }

    #[test]
    fn test_invalid_key_writes_nothing() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let out = dir.path().join("out.txt");
        fs::write(&plain, "hello").unwrap();

        let result = run_args(&[
            "encode",
            "--cipher",
            "vigenere",
            "--key",
            "k3y",
            "--input-file",
            plain.to_str().unwrap(),
            "--output-file",
            out.to_str().unwrap(),
        ]);

        assert!(result.is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_train_then_hack_base_and_model() {
        let dir = tempdir().unwrap();
        let sample = dir.path().join("sample.txt");
        let model = dir.path().join("model.bin");
        let words = dir.path().join("words.txt");
        let secret = dir.path().join("secret.txt");
        let out = dir.path().join("out.txt");

        fs::write(&sample, "the quick brown fox jumps over the lazy dog").unwrap();
        fs::write(&words, "the\nquick\nbrown\nfox\n").unwrap();
        fs::write(&secret, "wkh txlfn eurzq ira").unwrap();

        run_args(&[
            "train",
            "--model-file",
            model.to_str().unwrap(),
            "--input-file",
            sample.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(FrequencyModel::load(&model).unwrap().total(), 35);

        run_args(&[
            "hack",
            "base",
            "--base-file",
            words.to_str().unwrap(),
            "--input-file",
            secret.to_str().unwrap(),
            "--output-file",
            out.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "the quick brown fox");

        run_args(&[
            "hack",
            "model",
            "--model-file",
            model.to_str().unwrap(),
            "--input-file",
            secret.to_str().unwrap(),
            "--output-file",
            out.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "the quick brown fox");
    }
}
