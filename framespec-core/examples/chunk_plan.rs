use framespec::{
    ChunkOptions, ChunkStrategy, FramePlan, FramesConfig, Sequence, default_scout_frames,
    plan_tasks,
};

fn parse_spec() -> Option<String> {
    std::env::args().nth(1)
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let spec = parse_spec().unwrap_or_else(|| "1-10, 14, 20-50x4".to_string());
    let mut seq = Sequence::create_with(spec.as_str(), ChunkOptions::with_size(6))?;
    println!("{seq:?}: {} frames", seq.len());

    for strategy in [
        ChunkStrategy::Linear,
        ChunkStrategy::Cycle,
        ChunkStrategy::Progressions,
    ] {
        seq.set_chunk_strategy(strategy);
        let chunks: Vec<String> = seq.chunks().iter().map(ToString::to_string).collect();
        println!("{strategy:>12}: {}", chunks.join("  |  "));
    }

    seq.set_chunk_strategy(ChunkStrategy::Linear);
    seq.set_chunk_size(seq.best_chunk_size());
    println!("best chunk size: {}", seq.chunk_size());

    let scout = default_scout_frames(seq.start(), seq.end())
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let cfg = FramesConfig {
        frames: Some(seq.to_string()),
        chunking: seq.options(),
        scout_frames: Some(scout),
        use_scout_frames: true,
        ..FramesConfig::default()
    };
    let plan = FramePlan::from_config(&cfg)?;
    println!("{}", plan.info());
    for task in plan_tasks(&plan, "render -s <chunk_start> -e <chunk_end> -b <chunk_step>")? {
        println!("{:>10}  {}", task.frames, task.command);
    }
    Ok(())
}
