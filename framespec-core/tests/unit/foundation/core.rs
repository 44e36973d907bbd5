use super::*;

#[test]
fn chunk_strategy_parses_case_insensitively() {
    assert_eq!(
        "Cycle".parse::<ChunkStrategy>().unwrap(),
        ChunkStrategy::Cycle
    );
    assert_eq!(
        " progressions ".parse::<ChunkStrategy>().unwrap(),
        ChunkStrategy::Progressions
    );
    assert!("binary".parse::<ChunkStrategy>().is_err());
}

#[test]
fn chunk_strategy_display_matches_serde_name() {
    for s in [
        ChunkStrategy::Linear,
        ChunkStrategy::Cycle,
        ChunkStrategy::Progressions,
    ] {
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, format!("\"{s}\""));
    }
}

#[test]
fn chunk_options_default_from_empty_json() {
    let opts: ChunkOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, ChunkOptions::default());
    assert_eq!(opts.chunk_strategy, ChunkStrategy::Linear);
}

#[test]
fn clamp_chunk_size_bounds() {
    assert_eq!(clamp_chunk_size(0, 100), 100);
    assert_eq!(clamp_chunk_size(200, 100), 100);
    assert_eq!(clamp_chunk_size(7, 100), 7);
    assert_eq!(clamp_chunk_size(1, 1), 1);
}
