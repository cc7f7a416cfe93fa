use log::debug;
use scraper::Html;

use crate::decode::decode_recipe;
use crate::error::ScrapeError;
use crate::fetch::{Fetch, HttpFetcher};
use crate::locate::locate_recipe_block;
use crate::model::ParsedRecipe;

/// Runs the scrape pipeline: fetch the page, locate the recipe JSON-LD
/// block, decode it into a [`ParsedRecipe`].
///
/// The stages run strictly in order and fail fast; retry policy belongs to
/// the [`Fetch`] implementation. Each call is a self-contained value-in,
/// value-out pipeline with no shared state, so scrapes may run concurrently
/// without coordination.
pub struct RecipeScraper {
    fetcher: Box<dyn Fetch>,
}

impl RecipeScraper {
    pub fn new() -> Self {
        Self::with_fetcher(Box::new(HttpFetcher::default()))
    }

    /// Build a scraper around a custom fetch capability.
    pub fn with_fetcher(fetcher: Box<dyn Fetch>) -> Self {
        Self { fetcher }
    }

    pub async fn scrape_recipe(&self, url: &str) -> Result<ParsedRecipe, ScrapeError> {
        let body = self.fetcher.fetch(url).await?;
        debug!("Fetched {} bytes from {url}", body.len());

        // Parsing is permissive: imperfect recipe-site HTML still yields a tree
        let document = Html::parse_document(&body);
        let block = locate_recipe_block(&document)?;

        decode_recipe(&block)
    }
}

impl Default for RecipeScraper {
    fn default() -> Self {
        Self::new()
    }
}
