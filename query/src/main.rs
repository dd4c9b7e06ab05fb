use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use warshall::{Solution, WarshallError};

use clap::Parser;
use csv_core::ReadFieldResult;

#[derive(Parser, Debug)]
#[clap(
    name = "query",
    about = "Answers shortest-path queries given as `from,to` rows on stdin"
)]
struct Args {
    /// Solution file written by `compute`.
    #[clap(short = 'i', long)]
    solution_filename: String,
}

/// Splits a CSV row into fields, resolving quotes.
fn parse_csv_row(row: &str) -> Option<Vec<String>> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = vec![0; row.len().max(1)];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty | ReadFieldResult::End => true,
            ReadFieldResult::Field { .. } => false,
            ReadFieldResult::OutputFull => return None,
        };
        fields.push(String::from_utf8(output[..nout].to_vec()).ok()?);
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    Some(fields)
}

/// Writes the answer to a query, or returns the lookup error of an unknown name.
fn answer<W>(solution: &Solution, from: &str, to: &str, mut wtr: W) -> Result<(), Box<dyn Error>>
where
    W: Write,
{
    let cost = match solution.cost(from, to)? {
        Some(cost) => cost,
        None => {
            writeln!(wtr, "{from}\t{to}\tunreachable")?;
            return Ok(());
        }
    };
    if !solution.shortest_paths().has_paths() {
        writeln!(wtr, "{from}\t{to}\t{cost}")?;
        return Ok(());
    }
    match solution.path(from, to) {
        Ok(path) => writeln!(wtr, "{from}\t{to}\t{cost}\t{}", path.join(" -> "))?,
        Err(WarshallError::NoPath(_)) => writeln!(wtr, "{from}\t{to}\tunreachable")?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the solution...");
    let reader = BufReader::new(File::open(args.solution_filename)?);
    let solution = Solution::read(reader)?;
    eprintln!("Ready to query :)");

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let [from, to] = match parse_csv_row(line).map(<[String; 2]>::try_from) {
            Some(Ok(row)) => row,
            _ => {
                eprintln!("Skipped a row other than from,to: {line}");
                continue;
            }
        };
        match answer(&solution, &from, &to, &mut out) {
            Ok(()) => (),
            Err(e) if e.downcast_ref::<WarshallError>().is_some() => eprintln!("{e}"),
            Err(e) => return Err(e),
        }
    }
    out.flush()?;

    Ok(())
}
