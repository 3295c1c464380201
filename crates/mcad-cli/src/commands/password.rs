use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use mcad_core::password::{normalize_username, Dictionary, PasswordPolicy};

#[derive(Args)]
pub struct CheckPasswordArgs {
    /// Word list (one word per line) of forbidden dictionary words
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Account name; stored lowercased
    #[arg(long)]
    pub username: Option<String>,
}

pub fn run(args: &CheckPasswordArgs) -> Result<()> {
    let dictionary = match args.dictionary {
        Some(ref path) => Dictionary::load(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?,
        None => Dictionary::empty(),
    };
    let policy = PasswordPolicy::new(dictionary);

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']);

    match policy.check(password) {
        Ok(()) => {
            match args.username {
                Some(ref name) => println!("Password accepted for {}", normalize_username(name)),
                None => println!("Password accepted"),
            }
            Ok(())
        }
        Err(violation) => bail!("Password rejected: {violation}"),
    }
}
