use wordle_entropy::{ConfigError, GuessPool, SolverConfig, Word};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

#[test]
fn test_defaults() {
    let config = SolverConfig::default();
    assert_eq!(config.max_rounds, 6);
    assert_eq!(config.opener, None);
    assert_eq!(config.pool, GuessPool::Candidates);
}

#[test]
fn test_guess_pool_parse() {
    assert_eq!("candidates".parse::<GuessPool>(), Ok(GuessPool::Candidates));
    assert_eq!("Vocabulary".parse::<GuessPool>(), Ok(GuessPool::Vocabulary));
    assert_eq!("all".parse::<GuessPool>(), Ok(GuessPool::Vocabulary));
    assert!("answers".parse::<GuessPool>().is_err());
    assert_eq!(GuessPool::Vocabulary.to_string(), "vocabulary");
}

#[test]
fn test_config_from_lookup() {
    let config = SolverConfig::from_lookup(|name| match name {
        "WORDLE_MAX_ROUNDS" => Some("8".to_string()),
        "WORDLE_OPENER" => Some("Tares".to_string()),
        "WORDLE_GUESS_POOL" => Some("vocabulary".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.max_rounds, 8);
    assert_eq!(config.opener, Some(w("tares")));
    assert_eq!(config.pool, GuessPool::Vocabulary);

    assert_eq!(SolverConfig::from_lookup(|_| None).unwrap(), SolverConfig::default());
}

#[test]
fn test_config_rejects_bad_values() {
    let err = SolverConfig::from_lookup(|name| (name == "WORDLE_MAX_ROUNDS").then(|| "0".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { .. }));

    let err = SolverConfig::from_lookup(|name| (name == "WORDLE_OPENER").then(|| "ab".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWord { .. }));

    let err = SolverConfig::from_lookup(|name| (name == "WORDLE_GUESS_POOL").then(|| "best".to_string()))
        .unwrap_err();
    assert_eq!(err, ConfigError::UnknownPool("best".to_string()));
}
