use clap::Parser;
use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;
use wordseg::{CostModel, WordSplitter};

#[derive(Debug, Parser)]
#[command(name = "wordseg")]
#[command(about = "Split space-free text into dictionary words")]
struct Args {
    /// Ranked word list, one word per line, most frequent first.
    #[arg(long)]
    dict: PathBuf,

    /// Extra words to treat as most frequent (repeatable).
    #[arg(long = "add", value_name = "WORD")]
    add: Vec<String>,

    /// Treat camel-case humps as separators.
    #[arg(long)]
    camel_case: bool,

    /// Upper-case the first letter of every word.
    #[arg(long)]
    capitalize: bool,

    /// Print one space-joined line per input instead of one word per line.
    #[arg(long)]
    join: bool,

    #[arg(long, default_value = "warn")]
    log: String,

    /// Text to split. Reads stdin line by line when omitted.
    text: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(io::stderr)
        .init();

    run(args, io::stdin().lock(), &mut io::stdout().lock())
}

fn run(args: Args, input: impl BufRead, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let mut model = CostModel::from_file(&args.dict)?;
    model.extend(&args.add);
    tracing::info!(
        words = model.len(),
        max_word_len = model.max_word_len(),
        "dictionary ready"
    );

    let splitter = WordSplitter::builder(model.into_shared())
        .camel_case_splitter(args.camel_case)
        .capitalize_first_letter(args.capitalize)
        .build();

    if args.text.is_empty() {
        for line in input.lines() {
            emit(&splitter, &line?, args.join, out)?;
        }
    } else {
        for text in &args.text {
            emit(&splitter, text, args.join, out)?;
        }
    }
    Ok(())
}

fn emit(
    splitter: &WordSplitter,
    text: &str,
    join: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let tokens = splitter.split_sentence(text)?;
    if join {
        writeln!(out, "{}", tokens.join(" "))?;
    } else {
        for token in tokens {
            writeln!(out, "{token}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};

    const WORDS: &str = "this\nis\na\ntest\nfoo\nbar\n";

    fn splitter() -> WordSplitter {
        WordSplitter::new(CostModel::from_reader(WORDS.as_bytes()).unwrap())
    }

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wordseg").chain(argv.iter().copied())).unwrap()
    }

    /// Writes the test dictionary to a per-test file under the temp dir.
    fn dict_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wordseg-{}-{name}.txt", std::process::id()));
        fs::write(&path, WORDS).unwrap();
        path
    }

    fn run_to_string(args: Args, stdin: &str) -> String {
        let mut out = Vec::new();
        run(args, stdin.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn emit_joined_line() {
        let mut out = Vec::new();
        emit(&splitter(), "thisisatest", true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "this is a test\n");
    }

    #[test]
    fn emit_one_word_per_line() {
        let mut out = Vec::new();
        emit(&splitter(), "foobar, test", false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "foo\nbar\ntest\n");
    }

    #[test]
    fn flags_parse() {
        let a = args(&[
            "--dict", "w.txt", "--add", "ninja", "--add", "wordninja", "--camel-case",
            "--capitalize", "--join", "one", "two",
        ]);
        assert_eq!(a.dict, Path::new("w.txt"));
        assert_eq!(a.add, ["ninja", "wordninja"]);
        assert!(a.camel_case && a.capitalize && a.join);
        assert_eq!(a.text, ["one", "two"]);
        assert_eq!(a.log, "warn");
    }

    #[test]
    fn dict_is_required() {
        assert!(Args::try_parse_from(["wordseg", "thisisatest"]).is_err());
    }

    #[test]
    fn run_with_positional_text_and_options() {
        let dict = dict_file("positional");
        let a = args(&[
            "--dict",
            dict.to_str().unwrap(),
            "--add",
            "wordninja",
            "--camel-case",
            "--capitalize",
            "--join",
            "fooBar",
            "wordninjatest",
        ]);
        assert_eq!(run_to_string(a, ""), "Foo Bar\nWordninja Test\n");
        fs::remove_file(dict).unwrap();
    }

    #[test]
    fn run_reads_stdin_when_no_text() {
        let dict = dict_file("stdin");
        let a = args(&["--dict", dict.to_str().unwrap()]);
        assert_eq!(run_to_string(a, "thisisa\ntest\n"), "this\nis\na\ntest\n");
        fs::remove_file(dict).unwrap();
    }

    #[test]
    fn run_fails_on_missing_dictionary() {
        let a = args(&["--dict", "/definitely/not/here.txt", "thisisatest"]);
        let mut out = Vec::new();
        let err = run(a, io::empty(), &mut out).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
        assert!(out.is_empty());
    }
}
