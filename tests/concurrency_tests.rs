//! Concurrency and thread safety tests for phrasespot

use std::sync::{Arc, RwLock};
use std::thread;

use phrasespot::{Engine, MatchError};

fn shared_engine() -> Result<Arc<Engine>, MatchError> {
    let mut engine = Engine::default();
    engine.add_ignore("whole")?;
    engine.add_phrase("rice flour", 1)?;
    engine.add_phrase("brown rice", 2)?;
    Ok(Arc::new(engine))
}

#[test]
fn engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();
}

#[test]
fn concurrent_process_same_engine() -> Result<(), MatchError> {
    let engine = shared_engine()?;
    let text = "brown rice and whole rice flour";

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let chain = engine.process(text);
                chain
                    .top_matches()
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let tops = handle.join().expect("thread should not panic");
        assert_eq!(tops, ["brown rice", "rice flour"]);
    }
    Ok(())
}

#[test]
fn registration_under_write_lock_visible_to_readers() {
    let engine = Arc::new(RwLock::new(Engine::default()));

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut guard = engine.write().expect("lock");
                guard
                    .add_phrase(&format!("item{i} flour"), i)
                    .expect("distinct phrases register");
            })
        })
        .collect();
    for handle in writers {
        handle.join().expect("writer thread");
    }

    let readers: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let guard = engine.read().expect("lock");
                let chain = guard.process(&format!("some item{i} flour"));
                let top = chain.tokens().last().and_then(|t| t.top_match());
                top.map(|m| (m.to_string(), m.weight()))
            })
        })
        .collect();

    for (i, handle) in readers.into_iter().enumerate() {
        let top = handle.join().expect("reader thread");
        assert_eq!(top, Some((format!("item{i} flour"), i as i64)));
    }
    assert_eq!(engine.read().expect("lock").phrase_count(), 4);
}
