use canonical::IdentityStemmer;
use matcher::{Engine, MatchError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MatchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut engine = Engine::new(IdentityStemmer);
    for stopword in ["the", "of", "whole"] {
        engine.add_ignore(stopword)?;
    }
    engine.add_phrase("rice flour", 2)?;
    engine.add_phrase("flour", 1)?;
    engine.add_phrase("cup of tea", 3)?;

    let text = "Mix the rice whole flour with a cup of tea.";
    let chain = engine.process(text);

    for token in chain.tokens() {
        let best = token
            .top_match()
            .map(|m| format!("{m} (weight {}, size {})", m.weight(), m.size()))
            .unwrap_or_default();
        println!(
            "{:>3} {:<8?} ignored={:<5} {}",
            token.index(),
            token.content(),
            token.is_ignored(),
            best
        );
    }
    println!("coverage: {:.2}", chain.coverage());
    println!();
    print!("{}", engine.registry().trie().debug_string());

    Ok(())
}
