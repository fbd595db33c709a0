mod areas;
mod artifacts;
mod commands;
mod errors;

use crate::areas::repository::Repository;
use crate::errors::GitletError;
use anyhow::bail;
use phf::phf_map;

/// Expected argument count (command word included) per fixed-arity command.
/// `checkout` is the one variable-arity command and is dispatched by shape.
static COMMAND_ARITIES: phf::Map<&'static str, usize> = phf_map! {
    "init" => 1,
    "add" => 2,
    "commit" => 2,
    "rm" => 2,
    "log" => 1,
    "global-log" => 1,
    "find" => 2,
    "status" => 1,
    "branch" => 2,
    "rm-branch" => 2,
    "reset" => 2,
    "merge" => 2,
};

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    if let Err(error) = run(&args) {
        std::process::exit(report(error));
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let Some(command) = args.first().map(String::as_str) else {
        bail!(GitletError::NoCommand);
    };

    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    if command == "checkout" {
        repository.ensure_initialized()?;
        return dispatch_checkout(&repository, args);
    }

    let Some(&arity) = COMMAND_ARITIES.get(command) else {
        bail!(GitletError::BadCommand);
    };

    if command != "init" {
        repository.ensure_initialized()?;
    }
    if args.len() != arity {
        bail!(GitletError::BadOperands);
    }

    match command {
        "init" => repository.init(),
        "add" => repository.add(&args[1]),
        "commit" => repository.commit(&args[1]),
        "rm" => repository.remove(&args[1]),
        "log" => repository.log(),
        "global-log" => repository.global_log(),
        "find" => repository.find(&args[1]),
        "status" => repository.status(),
        "branch" => repository.branch(&args[1]),
        "rm-branch" => repository.remove_branch(&args[1]),
        "reset" => repository.reset(&args[1]),
        "merge" => repository.merge(&args[1]),
        _ => bail!(GitletError::BadCommand),
    }
}

/// The three `checkout` forms, told apart by shape:
/// `checkout -- <file>`, `checkout <commit id> -- <file>`, `checkout <branch>`.
fn dispatch_checkout(repository: &Repository, args: &[String]) -> anyhow::Result<()> {
    match args {
        [_, separator, file_name] if separator == "--" => repository.checkout_file(file_name),
        [_, commit_id, separator, file_name] if separator == "--" => {
            repository.checkout_file_from_commit(commit_id, file_name)
        }
        [_, branch_name] => repository.checkout_branch(branch_name),
        _ => bail!(GitletError::BadOperands),
    }
}

/// Contractual failures print their fixed message on stdout and exit 0, like
/// the porcelain they mimic; anything else is an internal error on stderr.
fn report(error: anyhow::Error) -> i32 {
    match error.downcast_ref::<GitletError>() {
        Some(gitlet_error) => {
            println!("{gitlet_error}");
            0
        }
        None => {
            eprintln!("{error:#}");
            1
        }
    }
}
