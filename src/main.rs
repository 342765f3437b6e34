use clap::{Parser, ValueEnum};
use rand_replay::*;
use std::io::{ErrorKind, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Generator {
    Mt,
    MtFast,
    Poke,
    PokeR,
    Xd,
    XdR,
    A,
    AR,
    Bw,
    BwR,
}

/// Streams generator output to stdout, as raw little-endian words or as hex lines.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Generator to run.
    #[arg(short, long, value_enum, default_value_t = Generator::Mt)]
    generator: Generator,

    /// Seed, decimal or 0x-prefixed hexadecimal. 32-bit generators use the low 32 bits.
    #[arg(short, long, default_value = "0", value_parser = parse_seed)]
    seed: u64,

    /// Outputs to skip before streaming.
    #[arg(long, default_value_t = 0)]
    skip: u64,

    /// Number of outputs to write. Streams until the pipe closes when omitted.
    #[arg(short = 'n', long)]
    count: Option<u64>,

    /// Write one hexadecimal value per line instead of raw bytes.
    #[arg(long)]
    hex: bool,

    /// Output budget of the fast Mersenne Twister.
    #[arg(long, default_value_t = FAST_MAX_SIZE)]
    fast_size: usize,
}

fn parse_seed(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid seed {:?}: {}", s, e))
}

fn stream<R>(rng: &mut R, args: &Args, bytes: usize) -> std::io::Result<()>
where
    R: Stepping,
    R::Output: Into<u64>,
{
    let mut stdout = std::io::stdout().lock();
    let mut v: Vec<u8> = Vec::new();
    let mut n: u64 = 0;

    rng.skip(args.skip);

    while args.count.map_or(true, |count| n < count) {
        let x: u64 = rng.step().into();
        if args.hex {
            writeln!(v, "{:01$x}", x, bytes * 2)?;
        } else {
            // Always use Little-Endian.
            v.extend_from_slice(&x.to_le_bytes()[0 .. bytes]);
        }

        if v.len() >= 0x10000 {
            stdout.write_all(v.as_slice())?;
            v.clear();
        }

        n += 1;
    }

    stdout.write_all(v.as_slice())?;
    stdout.flush()
}

fn run(args: &Args) -> std::io::Result<()> {
    let seed32 = args.seed as u32;

    match args.generator {
        Generator::Mt => stream(&mut MersenneTwister::new(seed32), args, 4),
        Generator::MtFast => {
            // The fast engine is only valid for `fast_size` outputs per seeding.
            let budget = args.skip.saturating_add(args.count.unwrap_or(u64::MAX));
            if args.fast_size > FAST_MAX_SIZE || budget > args.fast_size as u64 {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("mt-fast needs --count with skip + count <= fast size <= {}", FAST_MAX_SIZE),
                ));
            }
            stream(&mut MersenneTwisterFast::new(seed32, args.fast_size), args, 4)
        }
        Generator::Poke => stream(&mut PokeRng::new(seed32), args, 4),
        Generator::PokeR => stream(&mut PokeRngR::new(seed32), args, 4),
        Generator::Xd => stream(&mut XdRng::new(seed32), args, 4),
        Generator::XdR => stream(&mut XdRngR::new(seed32), args, 4),
        Generator::A => stream(&mut ARng::new(seed32), args, 4),
        Generator::AR => stream(&mut ARngR::new(seed32), args, 4),
        Generator::Bw => stream(&mut BwRng::new(args.seed), args, 8),
        Generator::BwR => stream(&mut BwRngR::new(args.seed), args, 8),
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    match run(&args) {
        // Output piped into a consumer that stopped reading.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}
