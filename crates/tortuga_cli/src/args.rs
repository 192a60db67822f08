use tortuga_lexer::locales;

pub(crate) struct CliArgs {
    pub cmd: String,
    pub locale: String,
    pub json_out: bool,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: tortuga <tokens|locales> [<locale>] [json] <args>"
}

pub(crate) fn parse_args() -> Result<CliArgs, String> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();
    let cmd = argv.first().cloned().ok_or_else(|| usage().to_string())?;
    argv.remove(0);

    let mut locale = String::from("en");
    let mut json_out = false;
    let mut positional: Vec<String> = Vec::new();

    for a in argv {
        if a.starts_with("--") {
            return Err(format!("Unknown option: {a}"));
        }
        if a == "json" {
            json_out = true;
        } else if locales::REGISTRY.contains_key(a.as_str()) {
            locale = a;
        } else {
            positional.push(a);
        }
    }

    Ok(CliArgs {
        cmd,
        locale,
        json_out,
        positional,
    })
}
