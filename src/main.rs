mod args;
mod env;
mod props;

use anyhow::anyhow;
use clap::Parser;
use colored::*;

use crate::args::Args;
use crate::env::EnvTable;

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(value) => println!(">> {value}"),
        Err(err) => {
            eprintln!("{}", format!("Error: {err}").red());
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let cwd = std::env::current_dir()?;
    let path = props::resolve_path(&cwd, &args.file);

    let mut env = EnvTable::from_process();
    props::load_into(&path, &mut env)?;

    env.get(&args.key).map(str::to_string).ok_or_else(|| {
        anyhow!(
            "no value for `{}` in {} or the environment",
            args.key,
            path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Component, Path};

    // `run` resolves against the real working directory, so tests reach a
    // tempdir by climbing back to the filesystem root first.
    fn fragment_for(target: &Path) -> String {
        let cwd = std::env::current_dir().unwrap();
        let ups = cwd
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count();
        let mut fragment = "/..".repeat(ups);
        fragment.push_str(target.to_str().unwrap());
        fragment
    }

    #[test]
    fn prints_value_loaded_from_properties_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let props = dir.path().join(".venv").join("local.properties");
        fs::create_dir_all(props.parent().unwrap()).unwrap();
        fs::write(&props, "open_ai_key2=sk-test123\n").unwrap();

        let args = Args {
            file: fragment_for(&props),
            key: "open_ai_key2".into(),
        };

        assert_eq!(run(&args).unwrap(), "sk-test123");
    }

    #[test]
    fn absent_key_with_no_file_is_a_hard_error() {
        let args = Args {
            file: "/no-such-dir/no-such.properties".into(),
            key: "envpeek_key_that_is_never_exported".into(),
        };

        let err = run(&args).unwrap_err();
        assert!(
            err.to_string()
                .contains("envpeek_key_that_is_never_exported")
        );
    }
}
