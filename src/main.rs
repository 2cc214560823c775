use log::{debug, error};
use std::env;
use std::process::ExitCode;

use cookie_recipes::{
    AppConfig, Catalog, ConsoleInteraction, CookieRecipesApp, FileStorage, RecipeError,
    RecipesRepository,
};

fn run() -> Result<(), RecipeError> {
    // Optional recipes file path from command-line arguments
    let config = AppConfig::load(env::args().nth(1))?;
    debug!("{:#?}", config);

    let catalog = Catalog::new();
    let repository = RecipesRepository::new(FileStorage, &catalog);
    let interaction = ConsoleInteraction::stdio(&catalog, config.pause_on_exit);

    CookieRecipesApp::new(repository, interaction).run(&config.file)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
