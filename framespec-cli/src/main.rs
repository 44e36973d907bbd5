use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use framespec::{ChunkOptions, FramePlan, FrameSource, FramesConfig, Sequence, plan_tasks};

#[derive(Parser, Debug)]
#[command(name = "framespec", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a frame spec is valid.
    Check(CheckArgs),
    /// Print the compact form of a frame spec or range.
    Show(ShowArgs),
    /// Split frames into chunks, one per line.
    Chunks(ChunksArgs),
    /// Expand a file name template once per frame.
    Expand(ExpandArgs),
    /// Plan render tasks from a JSON frames config.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Frame spec, e.g. "1-10, 14, 20-50x4".
    #[arg(allow_hyphen_values = true)]
    spec: String,
}

/// One frame spec, or `start end [step]`.
#[derive(clap::Args, Debug)]
struct FramesArgs {
    /// Frame spec, or the range start.
    #[arg(allow_hyphen_values = true)]
    spec: String,

    /// Range end.
    #[arg(allow_negative_numbers = true)]
    end: Option<String>,

    /// Range step.
    step: Option<String>,
}

impl FramesArgs {
    fn to_vec(&self) -> Vec<&str> {
        [Some(self.spec.as_str()), self.end.as_deref(), self.step.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[derive(Parser, Debug)]
struct ShowArgs {
    #[command(flatten)]
    frames: FramesArgs,

    /// Print a JSON object instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ChunksArgs {
    #[command(flatten)]
    frames: FramesArgs,

    /// Frames per chunk (0 means one chunk).
    #[arg(long, default_value_t = 0)]
    chunk_size: usize,

    /// How frames are distributed among chunks.
    #[arg(long, value_enum, default_value_t = Strategy::Linear)]
    strategy: Strategy,

    /// Even out chunk sizes before splitting.
    #[arg(long, default_value_t = false)]
    best: bool,
}

#[derive(Parser, Debug)]
struct ExpandArgs {
    /// Frame spec.
    #[arg(allow_hyphen_values = true)]
    spec: String,

    /// Template with `#` runs, `$F` tokens or `{frame}` placeholders.
    template: String,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input frames config JSON.
    #[arg(long)]
    config: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    Linear,
    Cycle,
    Progressions,
}

impl From<Strategy> for framespec::ChunkStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Linear => Self::Linear,
            Strategy::Cycle => Self::Cycle,
            Strategy::Progressions => Self::Progressions,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Check(args) => Ok(cmd_check(args)),
        Command::Show(args) => cmd_show(args).map(|()| ExitCode::SUCCESS),
        Command::Chunks(args) => cmd_chunks(args).map(|()| ExitCode::SUCCESS),
        Command::Expand(args) => cmd_expand(args).map(|()| ExitCode::SUCCESS),
        Command::Plan(args) => cmd_plan(args).map(|()| ExitCode::SUCCESS),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_check(args: CheckArgs) -> ExitCode {
    match framespec::validate_spec(&args.spec) {
        Ok(()) => {
            println!("valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("invalid: {e}");
            ExitCode::FAILURE
        }
    }
}

fn sequence_from_args(frames: &FramesArgs, opts: ChunkOptions) -> anyhow::Result<Sequence> {
    let args = frames.to_vec();
    let source = FrameSource::from_args(args.as_slice())?;
    Sequence::create_with(source, opts).with_context(|| format!("create sequence from {args:?}"))
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let seq = sequence_from_args(&args.frames, ChunkOptions::default())?;
    if args.json {
        let out = serde_json::json!({
            "spec": seq.to_string(),
            "frames": seq.len(),
            "start": seq.start(),
            "end": seq.end(),
            "progression": seq.is_progression(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{seq}");
        println!("{} frames", seq.len());
        match seq.step() {
            Some(step) => println!("progression, step {step}"),
            None => println!("not a progression"),
        }
    }
    Ok(())
}

fn cmd_chunks(args: ChunksArgs) -> anyhow::Result<()> {
    let opts = ChunkOptions::with_size(args.chunk_size).strategy(args.strategy.into());
    let mut seq = sequence_from_args(&args.frames, opts)?;
    if args.best {
        seq.set_chunk_size(seq.best_chunk_size());
    }
    tracing::debug!(chunk_size = seq.chunk_size(), strategy = %seq.chunk_strategy(), "chunking");
    for chunk in seq.chunks() {
        println!("{chunk}");
    }
    Ok(())
}

fn cmd_expand(args: ExpandArgs) -> anyhow::Result<()> {
    let seq = Sequence::create(args.spec.as_str())
        .with_context(|| format!("parse spec '{}'", args.spec))?;
    let names = if args.template.contains('#') {
        seq.expand(&args.template)?
    } else {
        seq.expand_dollar_f(&[args.template.as_str()])?
    };
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = FramesConfig::from_path(&args.config)
        .with_context(|| format!("load frames config '{}'", args.config.display()))?;
    let plan = FramePlan::from_config(&cfg)?;
    let tasks = plan_tasks(&plan, &cfg.task_template)?;

    println!("{}", plan.info());
    println!("{}", serde_json::to_string_pretty(&tasks)?);
    Ok(())
}
