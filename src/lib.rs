pub mod config;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod locate;
pub mod model;
pub mod scrape;

pub use config::ScraperConfig;
pub use decode::decode_recipe;
pub use error::ScrapeError;
pub use fetch::{Fetch, HttpFetcher};
pub use locate::locate_recipe_block;
pub use model::{InstructionStep, ParsedRecipe};
pub use scrape::RecipeScraper;

/// Scrape a recipe from a URL with the default HTTP fetcher.
pub async fn scrape_recipe(url: &str) -> Result<ParsedRecipe, ScrapeError> {
    RecipeScraper::new().scrape_recipe(url).await
}
