use character_browser::CharacterBrowser;

#[tokio::main]
async fn main() {
    env_logger::init();

    let browser = CharacterBrowser::new();
    browser.load_characters().await;

    if let Some(query) = std::env::args().nth(1) {
        browser.set_search(query);
    }

    let characters = browser.visible_characters();
    println!("{} character(s) visible\n", characters.len());

    browser.ensure_first_episodes(&characters).await;

    for character in &characters {
        let first_seen = browser
            .episodes()
            .get(character.id())
            .map(|episode| episode.name().clone())
            .unwrap_or_else(|| "loading...".to_string());

        println!("{}", character.name());
        println!("  {} - {}", character.status(), character.species());
        println!("  Last known location: {}", character.location().name());
        println!("  First seen in: {}", first_seen);
        println!();
    }

    println!("Episode cache: {:?}", browser.episodes().stats());
}
