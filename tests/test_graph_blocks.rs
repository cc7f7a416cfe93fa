use recipe_scraper::scrape_recipe;

fn create_recipe_html(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            <script type="application/ld+json">
                {json_ld}
            </script>
        </head>
        <body>
            <h1>Recipe</h1>
        </body>
        </html>
        "#
    )
}

#[tokio::test]
async fn test_scrape_recipe_nested_in_graph() {
    // WordPress-style page: one ld+json block describing the site, the page
    // and the recipe as @graph entries
    let mut server = mockito::Server::new_async().await;
    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Organization",
                "name": "Tasty Site",
                "url": "https://example.com"
            },
            {
                "@type": "WebPage",
                "name": "Lemon Cake - Tasty Site"
            },
            {
                "@type": "Recipe",
                "name": "Lemon Cake",
                "author": { "@type": "Person", "name": "Lemon Fan" },
                "recipeYield": "8 slices",
                "recipeIngredient": ["2 lemons", "200g sugar"],
                "recipeInstructions": [
                    { "@type": "HowToStep", "text": "Zest the lemons" },
                    { "@type": "HowToStep", "text": "Bake" }
                ]
            }
        ]
    }
    "#;

    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(create_recipe_html(json_ld))
        .create_async()
        .await;

    let url = format!("{}/recipe", server.url());
    let recipe = scrape_recipe(&url).await.unwrap();

    // Round trip through re-serialization keeps the graph entry's own fields
    assert_eq!(recipe.name.as_deref(), Some("Lemon Cake"));
    assert_eq!(recipe.author.as_deref(), Some("Lemon Fan"));
    assert_eq!(recipe.recipe_yield, Some(vec!["8 slices".to_string()]));
    assert_eq!(
        recipe.ingredients,
        Some(vec!["2 lemons".to_string(), "200g sugar".to_string()])
    );
    assert_eq!(recipe.instructions.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_first_recipe_block_wins_over_later_blocks() {
    // Two script blocks both carrying a recipe: the earlier one is used even
    // though the later one is more complete
    let mut server = mockito::Server::new_async().await;
    let body = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <script type="application/ld+json">
                {"@graph": [{"@type": "Recipe", "name": "Sparse Recipe"}]}
            </script>
            <script type="application/ld+json">
                {
                    "@type": "Recipe",
                    "name": "Rich Recipe",
                    "recipeIngredient": ["everything"],
                    "recipeInstructions": "Do it all."
                }
            </script>
        </head>
        <body></body>
        </html>
    "#;

    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await;

    let url = format!("{}/recipe", server.url());
    let recipe = scrape_recipe(&url).await.unwrap();

    assert_eq!(recipe.name.as_deref(), Some("Sparse Recipe"));
    assert!(recipe.ingredients.is_none());
}

#[tokio::test]
async fn test_minimal_graph_recipe_decodes_with_absent_fields() {
    let mut server = mockito::Server::new_async().await;
    let json_ld = r#"{"@graph": [{"@type": "Recipe", "name": "Nested Recipe"}]}"#;

    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(create_recipe_html(json_ld))
        .create_async()
        .await;

    let url = format!("{}/recipe", server.url());
    let recipe = scrape_recipe(&url).await.unwrap();

    assert_eq!(recipe.name.as_deref(), Some("Nested Recipe"));
    assert!(recipe.images.is_none());
    assert!(recipe.ingredients.is_none());
    assert!(recipe.instructions.is_none());
}
