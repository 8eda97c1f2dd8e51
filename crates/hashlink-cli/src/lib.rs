//! # hashlink CLI
//!
//! The driver: produce a chain of records and print each one as it is made.
//! Output goes to any [`Write`] so it can be captured in tests.

use std::io::Write;

use clap::Args;

use hashlink::{Chain, ChainConfig, ChainLink, DEFAULT_CHAIN_LENGTH};

/// Separator printed before each record in text mode.
pub const SEPARATOR: &str =
    "----------------------------------------------------------------";

/// Arguments for a chain run.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of records to produce.
    #[arg(short = 'n', long, default_value_t = DEFAULT_CHAIN_LENGTH)]
    pub count: u64,

    /// Also print the canonical bytes hashed for each record.
    #[arg(long)]
    pub dump: bool,

    /// Print one JSON object per record instead of text.
    #[arg(long, conflicts_with = "dump")]
    pub json: bool,
}

impl RunArgs {
    /// The chain configuration these arguments describe.
    pub fn config(&self) -> ChainConfig {
        ChainConfig { length: self.count }
    }
}

/// Produce the chain and write it to `out`.
pub fn run(args: &RunArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let chain = Chain::run_with(&args.config(), |link| {
        if args.json {
            write_json(out, &link)
        } else {
            write_text(out, &link, args.dump)
        }
    })?;

    tracing::info!(head = %chain.head_digest(), "chain complete");
    Ok(())
}

fn write_text(out: &mut impl Write, link: &ChainLink, dump: bool) -> anyhow::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Record {}:  {}", link.record.height, link.record)?;
    if dump {
        let bytes = link.record.canonical_bytes()?;
        writeln!(out, "  bytes:  {}", hex::encode(bytes))?;
        writeln!(out, "  digest: {}", link.digest)?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, link: &ChainLink) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, link)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashlink::NULL_DIGEST;

    fn args(count: u64, dump: bool, json: bool) -> RunArgs {
        RunArgs { count, dump, json }
    }

    fn run_to_string(args: &RunArgs) -> String {
        let mut buf = Vec::new();
        run(args, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_text_output() {
        let output = run_to_string(&args(DEFAULT_CHAIN_LENGTH, false, false));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], SEPARATOR);
        assert_eq!(
            lines[1],
            format!("Record 1:  {{prev_digest:{} height:1}}", NULL_DIGEST)
        );
        assert!(lines[9].starts_with("Record 5:  {prev_digest:"));
        assert!(lines[9].ends_with("height:5}"));
    }

    #[test]
    fn test_dump_output() {
        let output = run_to_string(&args(1, true, false));
        assert!(output.contains(
            "  bytes:  00000000000000000000000000000000000000000000000000000000000000000100000000000000"
        ));
        assert!(output.contains(
            "  digest: 19ea44be89eece0fd4ec7482049f472a11af19384bffb38a88e77b3b1dd54c19"
        ));
    }

    #[test]
    fn test_json_output() {
        let output = run_to_string(&args(3, false, true));
        let links: Vec<ChainLink> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(links.len(), 3);
        assert_eq!(links[2].record.height, 3);
        assert_eq!(links[2].record.prev_digest, links[1].digest);
    }

    #[test]
    fn test_zero_count_fails() {
        let mut buf = Vec::new();
        let err = run(&args(0, false, false), &mut buf).unwrap_err();
        assert!(err.to_string().contains("chain length must be at least 1"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_config_from_args() {
        assert_eq!(args(7, false, false).config(), ChainConfig { length: 7 });
    }
}
