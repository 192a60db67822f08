use std::io::Write;

use serde_json::json;
use tortuga_lexer::tokenize;
use tortuga_syntax::TokenKind;

use crate::args::CliArgs;
use crate::commands::common;

pub(crate) fn run(args: &CliArgs) {
    if args.positional.len() != 1 {
        eprintln!("Missing <file>");
        std::process::exit(2);
    }
    let table = match common::build_table(&args.locale) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let source = match common::read_input_path(args.positional[0].as_str()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let tokens = tokenize(source.text.as_str(), &table);
    let mut out = std::io::stdout().lock();
    for t in &tokens {
        let (line, col) = source.text.line_col(t.span.start.0);
        let written = if args.json_out {
            let obj = json!({
                "kind": kind_label(t.kind),
                "primitive": t.primitive().map(|p| p.name()),
                "start": t.span.start.0,
                "end": t.span.end.0,
                "line": line + 1,
                "col": col + 1,
                "text": t.text,
            });
            writeln!(out, "{obj}")
        } else {
            writeln!(
                out,
                "{:?}\t{}..{}\t{}:{}\t{}",
                t.kind,
                t.span.start.0,
                t.span.end.0,
                line + 1,
                col + 1,
                escape_visible(t.text)
            )
        };
        if let Err(e) = written {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                return;
            }
            eprintln!("stdout error: {e}");
            std::process::exit(2);
        }
    }
}

fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Delimiter => "delimiter",
        TokenKind::Number => "number",
        TokenKind::Primitive(_) => "primitive",
        TokenKind::Variable => "variable",
        TokenKind::ProcedureName => "procedure-name",
    }
}

fn escape_visible(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
