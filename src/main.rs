use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use setlang::{
    error::{Error, ScriptError},
    session::{EXIT_COMMAND, Session, is_blank},
    source::SourceFile,
};

/// setlang is a tiny line-oriented language for variables, arithmetic and
/// equality checks. Without arguments it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells setlang to look at a file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the value of every line instead of only the last one.
    #[arg(short, long)]
    echo: bool,

    /// Prints the token stream of every line to stderr.
    #[arg(long)]
    tokens: bool,

    /// Prints the syntax tree of every line to stderr.
    #[arg(long)]
    ast: bool,

    /// The script to run, or its path with `--file`.
    contents: Option<String>,
}

impl Args {
    /// Runs one line through the session, printing the requested dumps.
    fn run_line(&self, session: &mut Session, line: &str) -> Result<String, Error> {
        if self.tokens {
            let tokens = Session::tokenize_line(line)?;
            let dump: Vec<String> = tokens.iter().map(ToString::to_string).collect();
            eprintln!("{}", dump.join(" "));
        }

        let program = Session::parse_line(line)?;
        if self.ast {
            eprintln!("{program}");
        }

        session.eval_program(&program)
    }
}

fn main() {
    let args = Args::parse();

    let Some(contents) = &args.contents else {
        repl(&args);
        return;
    };

    let script = if args.file {
        match SourceFile::open(contents) {
            Ok(file) => file.read().to_string(),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    } else {
        contents.clone()
    };

    if let Err(e) = run_script(&args, &script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Evaluates every non-blank line of `script` and prints the results.
fn run_script(args: &Args, script: &str) -> Result<(), ScriptError> {
    let mut session = Session::new();
    let mut last = None;

    for (index, line) in script.lines().enumerate() {
        if is_blank(line) {
            continue;
        }
        let value = args.run_line(&mut session, line)
                        .map_err(|error| ScriptError { line: index + 1, error })?;
        if args.echo {
            println!("{value}");
        }
        last = Some(value);
    }

    if !args.echo && let Some(value) = last {
        println!("{value}");
    }

    Ok(())
}

/// Reads lines from the terminal until `exit`, Ctrl-C or Ctrl-D.
fn repl(args: &Args) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the prompt: {e}");
            std::process::exit(1);
        },
    };
    let mut session = Session::new();

    loop {
        let line = match editor.readline(">>> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            },
        };

        if line.trim() == EXIT_COMMAND {
            break;
        }
        if is_blank(&line) {
            continue;
        }
        let _ = editor.add_history_entry(line.as_str());

        match args.run_line(&mut session, &line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
