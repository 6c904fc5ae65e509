//! Command-line tool for signing, verifying, and inspecting tokens.

use std::io::{self, Read as _};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::{Parser, Subcommand};

use jot::{decode_unverified, generate_secret, sign, verify, Algorithm, JsonObject};

#[derive(Parser)]
#[command(name = "jot", version, about = "Sign, verify, and inspect HMAC-signed JSON Web Tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign a JSON payload into a compact token.
    Sign {
        /// Algorithm name: HS256, HS384, HS512, or none.
        #[arg(short, long, default_value = "HS256")]
        algorithm: String,

        /// Secret file path. Raw bytes unless --hex-secret or --b64-secret.
        #[arg(short, long)]
        secret: String,

        /// Interpret the secret file as hex.
        #[arg(long, default_value_t = false, conflicts_with = "b64_secret")]
        hex_secret: bool,

        /// Interpret the secret file as standard base64, the
        /// generate-secret output format.
        #[arg(long, default_value_t = false)]
        b64_secret: bool,

        /// Payload as a JSON object. Reads stdin if omitted.
        #[arg(short, long)]
        payload: Option<String>,
    },

    /// Verify a token and print its decoded contents.
    ///
    /// Exits with status 1 when the signature does not match.
    Verify {
        /// Secret file path. Raw bytes unless --hex-secret or --b64-secret.
        #[arg(short, long)]
        secret: String,

        /// Interpret the secret file as hex.
        #[arg(long, default_value_t = false, conflicts_with = "b64_secret")]
        hex_secret: bool,

        /// Interpret the secret file as standard base64.
        #[arg(long, default_value_t = false)]
        b64_secret: bool,

        /// Token string. Reads stdin if omitted.
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Decode a token's header and payload without verifying it.
    Inspect {
        /// Token string. Reads stdin if omitted.
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Generate a random secret sized for an algorithm.
    GenerateSecret {
        /// Algorithm name: HS256, HS384, or HS512.
        #[arg(short, long, default_value = "HS256")]
        algorithm: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Sign {
            algorithm,
            secret,
            hex_secret,
            b64_secret,
            payload,
        } => cmd_sign(&algorithm, &secret, hex_secret, b64_secret, payload),
        Command::Verify {
            secret,
            hex_secret,
            b64_secret,
            token,
        } => cmd_verify(&secret, hex_secret, b64_secret, token),
        Command::Inspect { token } => cmd_inspect(token),
        Command::GenerateSecret { algorithm } => cmd_generate_secret(&algorithm),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn cmd_sign(
    algorithm: &str,
    secret_path: &str,
    hex_secret: bool,
    b64_secret: bool,
    payload_arg: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = Algorithm::from_name(algorithm)?;
    let secret = read_secret_file(secret_path, hex_secret, b64_secret)?;
    let payload_text = read_arg_or_stdin(payload_arg)?;
    let payload: JsonObject = serde_json::from_str(&payload_text)
        .map_err(|e| format!("payload is not a JSON object: {e}"))?;

    println!("{}", sign(&payload, &secret, algorithm)?);
    Ok(())
}

fn cmd_verify(
    secret_path: &str,
    hex_secret: bool,
    b64_secret: bool,
    token_arg: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let secret = read_secret_file(secret_path, hex_secret, b64_secret)?;
    let token = read_arg_or_stdin(token_arg)?;
    let result = verify(token.trim(), &secret)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    if !result.is_verified {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_inspect(token_arg: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let token = read_arg_or_stdin(token_arg)?;
    let token = token.trim();
    let decoded = decode_unverified(token)?;
    let signature = token.rsplit('.').next().unwrap_or_default();

    let output = serde_json::json!({
        "header": decoded.header,
        "payload": decoded.payload,
        "signature": signature,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn cmd_generate_secret(algorithm: &str) -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = Algorithm::from_name(algorithm)?;
    let secret = generate_secret(algorithm)?;

    let output = serde_json::json!({
        "algorithm": algorithm.name(),
        "secret_base64": secret,
        "secret_bytes": algorithm.secret_len().unwrap_or_default(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Read a value from a CLI argument or, if absent, from stdin.
fn read_arg_or_stdin(arg: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(value) => Ok(value),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Read secret bytes from a file, hex- or base64-decoding when asked.
fn read_secret_file(
    path: &str,
    hex_secret: bool,
    b64_secret: bool,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let raw = std::fs::read(path)?;
    if hex_secret {
        let text = String::from_utf8(raw).map_err(|_| "hex secret file is not valid UTF-8")?;
        Ok(hex::decode(text.trim())?)
    } else if b64_secret {
        let text = String::from_utf8(raw).map_err(|_| "base64 secret file is not valid UTF-8")?;
        Ok(STANDARD.decode(text.trim())?)
    } else {
        Ok(raw)
    }
}
