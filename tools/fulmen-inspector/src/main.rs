//! Decodes hex-dumped Fulmen wire bytes and prints what they contain.

use clap::Parser;
use fulmen::internal::packet::PacketHeader;

#[derive(Parser)]
#[command(name = "fulmen-inspector", about = "Inspect Fulmen wire bytes")]
struct Args {
    /// Wire bytes as a hex string, e.g. 030000000000000001
    hex: String,

    /// Decode a bare little-endian u64 instead of a packet header
    #[arg(long)]
    as_u64: bool,
}

fn main() {
    let args = Args::parse();

    let buf = match hex::decode(args.hex.trim()) {
        Ok(buf) => buf,
        Err(err) => {
            eprintln!("invalid hex input: {err}");
            std::process::exit(1);
        }
    };

    let result = if args.as_u64 {
        fulmen::decode::<u64>(&buf).map(|(val, read)| (format!("u64 {val}"), read))
    } else {
        fulmen::decode::<PacketHeader>(&buf)
            .map(|(header, read)| (format!("{header:?}"), read))
    };

    match result {
        Ok((rendered, read)) => {
            println!("{rendered}");
            println!("consumed {read} of {} bytes", buf.len());
        }
        Err(err) => {
            eprintln!("decode failed: {err}");
            std::process::exit(1);
        }
    }
}
