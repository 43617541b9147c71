//! End-to-end matching behaviour through the umbrella crate.

use phrasespot::{
    engine_from_config, Engine, IdentityStemmer, MatchError, PhraseSpotConfig, TokenRef,
};

fn contents<'c>(tokens: &[TokenRef<'c>]) -> Vec<&'c str> {
    tokens.iter().map(|t| t.content()).collect()
}

fn recipe_engine() -> Result<Engine, MatchError> {
    let cfg = PhraseSpotConfig::from_yaml("version: \"1.0\"\nname: recipes\n")
        .expect("inline config is valid");
    let mut engine = engine_from_config(&cfg, |w: &str| {
        w.strip_suffix('s').unwrap_or(w).to_string()
    })?;
    for stop in ["whole", "of", "the"] {
        engine.add_ignore(stop)?;
    }
    engine.add_phrase("rice flour", 1)?;
    engine.add_phrase("brown rice", 3)?;
    engine.add_phrase("cup of sugar", 2)?;
    Ok(engine)
}

#[test]
fn round_trip_reports_registered_weight_and_text() -> Result<(), MatchError> {
    let engine = recipe_engine()?;
    let chain = engine.process("brown rice");

    let last = chain.tokens().last().expect("non-empty chain");
    let top = last.top_match().expect("phrase matched");
    assert_eq!(top.weight(), 3);
    assert_eq!(top.size(), 2);
    assert_eq!(top.to_string(), "brown rice");
    assert_eq!(top.original(), Some("brown rice"));
    Ok(())
}

#[test]
fn overlapping_phrases_resolve_by_weight() -> Result<(), MatchError> {
    let engine = recipe_engine()?;
    let chain = engine.process("Brown rice flours");
    let tokens: Vec<_> = chain.tokens().collect();
    assert_eq!(contents(&tokens), ["Brown", " ", "rice", " ", "flours"]);

    // "rice" sits in both phrases; the heavier one wins there.
    let rice = tokens[2];
    assert_eq!(rice.matches().len(), 2);
    assert_eq!(rice.top_match().map(|m| m.to_string()), Some("brown rice".into()));

    // The stemmer maps "flours" onto the registered "flour".
    let flour = tokens[4];
    assert_eq!(flour.top_match().map(|m| m.to_string()), Some("rice flour".into()));

    assert_eq!(
        chain
            .top_matches()
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>(),
        ["brown rice", "rice flour"]
    );
    Ok(())
}

#[test]
fn stop_words_are_transparent_inside_phrases() -> Result<(), MatchError> {
    let engine = recipe_engine()?;
    let chain = engine.process("rice whole flour");
    let tokens: Vec<_> = chain.tokens().collect();
    assert_eq!(tokens.len(), 5);

    for token in &tokens {
        let top = token.top_match().expect("every token is covered");
        assert_eq!(top.size(), 2);
        assert_eq!(top.to_string(), "rice flour");
    }
    assert!(tokens[2].is_ignored());
    assert_eq!(chain.coverage(), 1.0);
    Ok(())
}

#[test]
fn stop_words_dropped_from_registered_phrase() -> Result<(), MatchError> {
    let engine = recipe_engine()?;
    // Registered as "cup of sugar" but stored as the two keys "cup sugar".
    let chain = engine.process("one cup sugar");
    let tokens: Vec<_> = chain.tokens().collect();
    let sugar = tokens.last().expect("tokens");
    let top = sugar.top_match().expect("matched");
    assert_eq!(top.size(), 2);
    assert_eq!(top.to_string(), "cup sugar");
    assert_eq!(top.original(), Some("cup of sugar"));
    assert!(!tokens[0].is_matched());
    Ok(())
}

#[test]
fn token_count_follows_word_separator_runs() {
    let engine = Engine::new(IdentityStemmer);
    let chain = engine.process("a, b.");
    let tokens: Vec<_> = chain.tokens().collect();
    assert_eq!(contents(&tokens), ["a", ", ", "b", "."]);
    assert_eq!(chain.len(), 4);

    // Offsets reassemble the input.
    let rebuilt: String = tokens.iter().map(|t| t.content()).collect();
    assert_eq!(rebuilt, "a, b.");
    assert_eq!((tokens[2].start(), tokens[2].end()), (3, 4));
}

#[test]
fn reversed_word_order_is_a_distinct_phrase() -> Result<(), MatchError> {
    let mut engine = Engine::default();
    engine.add_phrase("rice flour", 1)?;
    engine.add_phrase("flour rice", 1)?;
    assert_eq!(engine.phrase_count(), 2);

    let chain = engine.process("flour rice flour");
    let tokens: Vec<_> = chain.tokens().collect();
    // The middle word closes "flour rice" and opens "rice flour".
    assert_eq!(tokens[2].matches().len(), 2);
    Ok(())
}

#[test]
fn empty_input_gives_empty_chain() {
    let engine = Engine::default();
    let chain = engine.process("");
    assert!(chain.is_empty());
    assert!(chain.head().is_none());
    assert_eq!(chain.coverage(), 0.0);
}

#[test]
fn chain_walks_both_directions() -> Result<(), MatchError> {
    let engine = recipe_engine()?;
    let chain = engine.process("brown rice, please");

    let mut forward = Vec::new();
    let mut cursor = chain.head();
    let mut tail = None;
    while let Some(token) = cursor {
        forward.push(token.content());
        tail = Some(token);
        cursor = token.next();
    }

    let mut backward = Vec::new();
    let mut cursor = tail;
    while let Some(token) = cursor {
        backward.push(token.content());
        cursor = token.previous();
    }
    backward.reverse();
    assert_eq!(forward, backward);
    Ok(())
}
