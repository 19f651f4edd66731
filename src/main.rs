use std::io;

use anyhow::Context;
use beat_them_all::{Console, Game, GameConfig, logging};
use error::{GameError, handle_error};
use tracing::info;
use trivia::QuestionBank;

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let config = GameConfig::load().context("Failed to load configuration")?;
    info!("Configuration: {:?}", config);

    let questions = QuestionBank::load(&config.questions_path);
    let pacing = config.pacing();

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    console.say("Welcome to Beat them all!");
    console.wait(pacing.line_delay);
    console.say("Fight your way to the end of the map. Answer well, hit harder.\n");

    let result = Game::setup(config, questions, console).and_then(|mut game| game.run());
    match result {
        Ok(outcome) => {
            info!("Finished with a {}", outcome);
            Ok(())
        }
        Err(GameError::InputClosed) => {
            eprintln!("{}", handle_error(&GameError::InputClosed));
            Ok(())
        }
        Err(e) => Err(e).context("Game aborted"),
    }
}
