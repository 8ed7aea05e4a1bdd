use rand::SeedableRng;
use rand::rngs::StdRng;
use shortle::cli::{Cli, CliInterface, Mode, parse_cli};
use shortle::logging::{default_log_path, init_logger};
use shortle::tui::TuiInterface;
use shortle::words::{
    ANSWER_LIST_FILE, EMBEDDED_ANSWER_LIST, EMBEDDED_GUESS_LIST, GUESS_LIST_FILE, WordList,
    resolve_word_list,
};
use shortle::{GameRecord, GameStatus, LetterVariant, PartVariant, Variant, game_loop};
use std::io;
use std::process::ExitCode;

fn report_rejected(name: &str, list: &WordList) {
    let overlong = list.overlong().count();
    if overlong > 0 {
        log::warn!("{name}: {overlong} entries longer than the word length were skipped");
    }
    if !list.rejected.is_empty() {
        log::info!("{name}: {} entries rejected in total", list.rejected.len());
    }
}

fn load_letters(cli: &Cli) -> Result<LetterVariant, Box<dyn std::error::Error>> {
    let answers = resolve_word_list(
        cli.answers_path.as_deref(),
        ANSWER_LIST_FILE,
        EMBEDDED_ANSWER_LIST,
    )?;
    let guesses = resolve_word_list(
        cli.guesses_path.as_deref(),
        GUESS_LIST_FILE,
        EMBEDDED_GUESS_LIST,
    )?;
    report_rejected(ANSWER_LIST_FILE, &answers);
    report_rejected(GUESS_LIST_FILE, &guesses);

    let variant = LetterVariant::from_lists(answers, guesses)?;
    log::info!(
        "Loaded {} answer words and {} guess words",
        variant.answers().len(),
        variant.guess_count()
    );
    Ok(variant)
}

fn play<V: Variant>(variant: &V, tui: bool, rng: &mut StdRng) -> io::Result<Vec<GameRecord>> {
    if tui {
        game_loop(variant, TuiInterface::new()?, rng)
    } else {
        game_loop(variant, CliInterface::new(io::stdin().lock()), rng)
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_file = if cli.tui { default_log_path() } else { None };
    if let Err(e) = init_logger(cli.verbose, log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = match cli.mode {
        Mode::Letters => match load_letters(&cli) {
            Ok(variant) => play(&variant, cli.tui, &mut rng),
            Err(e) => {
                eprintln!("Failed to load word lists: {e}");
                return ExitCode::FAILURE;
            }
        },
        Mode::Parts => play(&PartVariant::default(), cli.tui, &mut rng),
    };

    match result {
        Ok(records) => {
            let wins = records.iter().filter(|r| r.status == GameStatus::Won).count();
            log::info!("Played {} games, won {}", records.len(), wins);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
