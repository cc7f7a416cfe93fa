use std::env;

use recipe_scraper::{HttpFetcher, RecipeScraper, ScraperConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the URL from command-line arguments
    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let config = ScraperConfig::load()?;
    let scraper = RecipeScraper::with_fetcher(Box::new(HttpFetcher::from_config(&config)));

    let recipe = scraper.scrape_recipe(url).await?;
    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
