use rayon::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

use charidx::{Coverage, SymbolCodec};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Encode,
    Decode,
    Check,
}

struct Args {
    mode: Mode,
    json: bool,
    nfc: bool,
    recursive: bool,
    ignore: Vec<String>,
    help: bool,
    version: bool,
    paths: Vec<String>,
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args {
        mode: Mode::Encode,
        json: false,
        nfc: false,
        recursive: false,
        ignore: Vec::new(),
        help: false,
        version: false,
        paths: Vec::new(),
    };

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-V" | "--version" => args.version = true,
            "-h" | "--help" => args.help = true,
            "-d" | "--decode" => args.mode = Mode::Decode,
            "-c" | "--check" => args.mode = Mode::Check,
            "--json" => args.json = true,
            "--nfc" => args.nfc = true,
            "-r" | "--recursive" => args.recursive = true,
            "--ignore" => {
                i += 1;
                if i >= argv.len() {
                    eprintln!("Error: --ignore requires a value");
                    std::process::exit(1);
                }
                args.ignore.push(argv[i].clone());
            }
            s if s.starts_with('-') => {
                eprintln!("Error: unknown option: {}", s);
                std::process::exit(1);
            }
            _ => args.paths.push(argv[i].clone()),
        }
        i += 1;
    }
    args
}

fn print_help() {
    println!(
        "Usage: charidx [options] [path...]\n\
         \n\
         Map text to alphabet indices (85-symbol fixed alphabet) and back.\n\
         \n\
         Options:\n\
         \x20 -d, --decode         Read whitespace-separated indices, print text\n\
         \x20 -c, --check          Report alphabet coverage instead of encoding\n\
         \x20 --json               Machine-readable output\n\
         \x20 --nfc                NFC-normalize input before encoding/checking\n\
         \x20 -r, --recursive      Recurse into directories (binary files skipped)\n\
         \x20 --ignore <pattern>   Skip files/dirs matching pattern (repeatable)\n\
         \x20 -V, --version        Show version\n\
         \x20 -h, --help           Show this help\n\
         \n\
         When no paths are given, reads from stdin.\n\
         Encoding is strict: any character outside the alphabet fails that\n\
         input. Use --check first to find offending characters."
    );
}

fn is_binary(path: &Path) -> bool {
    let Ok(f) = fs::File::open(path) else {
        return false;
    };
    let mut buf = [0u8; 8192];
    let n = io::Read::read(&mut f.take(8192), &mut buf).unwrap_or(0);
    buf[..n].contains(&0)
}

fn glob_match(pattern: &str, text: &str) -> bool {
    let mut re = String::from("^");
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '*' && i + 1 < chars.len() && chars[i + 1] == '*' {
            re.push_str(".*");
            i += 2;
        } else if chars[i] == '*' {
            re.push_str("[^/]*");
            i += 1;
        } else {
            let c = chars[i];
            if ".+^${}()|[]\\".contains(c) {
                re.push('\\');
            }
            re.push(c);
            i += 1;
        }
    }
    re.push('$');
    fancy_regex::Regex::new(&re)
        .map(|r| r.is_match(text).unwrap_or(false))
        .unwrap_or(false)
}

fn matches_ignore(file_path: &Path, base_dir: &Path, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let rel = match file_path.strip_prefix(base_dir) {
        Ok(r) => r.to_string_lossy().to_string(),
        Err(_) => return false,
    };
    let basename = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    for pat in patterns {
        let target = if pat.contains('/') { &rel } else { &basename };
        if glob_match(pat, target) {
            return true;
        }
        if !pat.contains('*') && (rel == *pat || rel.starts_with(&format!("{}/", pat))) {
            return true;
        }
    }
    false
}

fn expand_dir(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(&path, files);
            } else if path.is_file() && !is_binary(&path) {
                files.push(path);
            }
        }
    }
    walk(dir, &mut files);
    files.sort();
    files
}

fn expand_paths(paths: &[String], recursive: bool, ignore_patterns: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for p in paths {
        let path = PathBuf::from(p);
        if !path.exists() {
            eprintln!("Error: {}: No such file or directory", p);
            std::process::exit(1);
        }
        if path.is_dir() {
            if !recursive {
                eprintln!("Error: {}: Is a directory (use -r to recurse)", p);
                std::process::exit(1);
            }
            for f in expand_dir(&path) {
                if !matches_ignore(&f, &path, ignore_patterns) {
                    files.push(f);
                }
            }
        } else if path.is_file() {
            files.push(path);
        }
    }
    files
}

struct Input {
    name: Option<String>,
    text: String,
}

fn read_inputs(args: &Args) -> Vec<Input> {
    if args.paths.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        });
        return vec![Input {
            name: None,
            text: buf,
        }];
    }
    let files = expand_paths(&args.paths, args.recursive, &args.ignore);
    files
        .into_iter()
        .map(|f| {
            let text = fs::read_to_string(&f).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {}", f.display(), e);
                std::process::exit(1);
            });
            Input {
                name: Some(f.to_string_lossy().to_string()),
                text,
            }
        })
        .collect()
}

fn normalize(text: &str, nfc: bool) -> String {
    if nfc {
        text.nfc().collect()
    } else {
        text.to_string()
    }
}

fn label(input: &Input) -> &str {
    input.name.as_deref().unwrap_or("stdin")
}

fn encode_input(
    codec: &SymbolCodec,
    input: &Input,
    nfc: bool,
    json: bool,
) -> Result<String, String> {
    let text = normalize(&input.text, nfc);
    let indices = codec
        .encode(&text)
        .map_err(|e| format!("{}: {}", label(input), e))?;
    if json {
        let obj = serde_json::json!({ "name": label(input), "indices": indices });
        Ok(obj.to_string())
    } else {
        let joined: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
        Ok(joined.join(" "))
    }
}

fn decode_input(codec: &SymbolCodec, input: &Input, json: bool) -> Result<String, String> {
    let mut indices = Vec::new();
    for tok in input.text.split_whitespace() {
        let i: usize = tok
            .parse()
            .map_err(|_| format!("{}: not an index: {:?}", label(input), tok))?;
        indices.push(i);
    }
    let text = codec
        .decode(&indices)
        .map_err(|e| format!("{}: {}", label(input), e))?;
    if json {
        let obj = serde_json::json!({ "name": label(input), "text": text });
        Ok(obj.to_string())
    } else {
        Ok(text)
    }
}

fn check_input(codec: &SymbolCodec, input: &Input, nfc: bool, json: bool) -> String {
    let text = normalize(&input.text, nfc);
    let cov = Coverage::scan(codec, &text);
    if json {
        let unknown: serde_json::Map<String, serde_json::Value> = cov
            .unknown
            .iter()
            .map(|(ch, n)| (ch.to_string(), serde_json::json!(n)))
            .collect();
        let obj = serde_json::json!({
            "name": label(input),
            "total": cov.total,
            "covered": cov.covered,
            "full": cov.is_full(),
            "unknown": unknown,
        });
        return obj.to_string();
    }
    let mut out = format!("  {}\n", label(input));
    out.push_str(&format!("{:>8} chars\n", cov.total));
    out.push_str(&format!("{:>8} in alphabet\n", cov.covered));
    for (ch, n) in &cov.unknown {
        out.push_str(&format!("{:>8} {:?} (U+{:04X})\n", n, ch, *ch as u32));
    }
    out
}

fn main() {
    let args = parse_args();

    if args.version {
        println!("charidx {}", VERSION);
        return;
    }
    if args.help {
        print_help();
        return;
    }

    let inputs = read_inputs(&args);
    let codec = SymbolCodec::global();
    let use_parallel = inputs.len() > 1;

    match args.mode {
        Mode::Encode | Mode::Decode => {
            let run = |input: &Input| -> Result<String, String> {
                if args.mode == Mode::Encode {
                    encode_input(codec, input, args.nfc, args.json)
                } else {
                    decode_input(codec, input, args.json)
                }
            };
            let results: Vec<Result<String, String>> = if use_parallel {
                inputs.par_iter().map(run).collect()
            } else {
                inputs.iter().map(run).collect()
            };
            let mut failed = false;
            for (input, result) in inputs.iter().zip(results) {
                match result {
                    Ok(out) => {
                        if args.mode == Mode::Decode && !args.json {
                            print!("{}", out);
                        } else if inputs.len() > 1 && !args.json {
                            println!("{}: {}", label(input), out);
                        } else {
                            println!("{}", out);
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        failed = true;
                    }
                }
            }
            if failed {
                std::process::exit(1);
            }
        }
        Mode::Check => {
            let run = |input: &Input| check_input(codec, input, args.nfc, args.json);
            let reports: Vec<String> = if use_parallel {
                inputs.par_iter().map(run).collect()
            } else {
                inputs.iter().map(run).collect()
            };
            for report in reports {
                if args.json {
                    println!("{}", report);
                } else {
                    print!("{}", report);
                }
            }
        }
    }
}
