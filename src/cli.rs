use crate::rewrite::{self, Logger, Outcome};
use crate::{Options, Value, encode_with};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] PATH VALUE [INPUT]\n\
         \n\
         Set the value at PATH (dot-separated keys and indices) to VALUE.\n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         VALUE is JSON text, inserted as-is unless --string is given.\n\
         \n\
         Options:\n\
           -o, --output FILE         Write output to FILE (default stdout)\n\
               --in-place            Overwrite INPUT file\n\
               --pad                 Overwrite the old value and pad with spaces when it fits\n\
               --string              Encode VALUE as a JSON string\n\
               --ensure-ascii        Escape non-ASCII as \\uXXXX (with --string)\n\
               --log                 Print how the path was resolved to stderr\n\
           -h, --help                Show this help\n\
         \n\
         Exit status: 0 when the value was set, 1 when PATH did not resolve\n\
         (the document is written unchanged), 2 on errors.\n",
        prog = program
    );
}

struct CliMode {
    path: String,
    value: String,
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    pad: bool,
    string: bool,
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonsplice".to_string());
    if !args.is_empty() {
        args.remove(0);
    }

    let mut opts = Options::default();
    let mut positional: Vec<String> = Vec::new();
    let mut output: Option<String> = None;
    let mut in_place = false;
    let mut pad = false;
    let mut string = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--in-place" => {
                in_place = true;
            }
            "--pad" => {
                pad = true;
            }
            "--string" => {
                string = true;
            }
            "--ensure-ascii" => {
                opts.ensure_ascii = true;
            }
            "--log" => {
                opts.logging = true;
            }
            // everything after -- is positional, so paths or values may start with '-'
            "--" => {
                positional.extend(args[i + 1..].iter().cloned());
                break;
            }
            s if s.starts_with('-') && s.len() > 1 && !s[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    let (Some(path), Some(value)) = (positional.next(), positional.next()) else {
        print_help(&program);
        std::process::exit(2);
    };
    let input = positional.next();
    if let Some(extra) = positional.next() {
        eprintln!("Unexpected argument: {}", extra);
        std::process::exit(2);
    }

    let mode = CliMode {
        path,
        value,
        input,
        output,
        in_place,
        pad,
        string,
    };
    (opts, mode)
}

/// Run the command line tool. Returns whether the value was set.
pub fn run() -> Result<Outcome, Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let mut json = match &mode.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let val = if mode.string {
        encode_with(Value::Str(&mode.value), &opts)?
    } else {
        mode.value.clone().into_bytes()
    };

    let mut logger = Logger::new(opts.logging, opts.log_context_window);
    let outcome = if mode.pad {
        rewrite::rewrite_in_place(&mut json, &mode.path, &val, &mut logger)
    } else {
        match rewrite::rewrite(&json, &mode.path, &val, &mut logger) {
            Some(out) => {
                json = out;
                Outcome::Spliced
            }
            None => Outcome::Unchanged,
        }
    };

    for entry in logger.into_entries() {
        eprintln!(
            "{}: {} at {} near {:?}",
            entry.path.as_deref().unwrap_or(""),
            entry.message,
            entry.position,
            entry.context
        );
    }

    if mode.in_place {
        let inp = mode
            .input
            .as_ref()
            .ok_or("--in-place requires INPUT file")?;
        fs::write(inp, &json)?;
        return Ok(outcome);
    }

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    out_writer.write_all(&json)?;
    out_writer.flush()?;
    Ok(outcome)
}
