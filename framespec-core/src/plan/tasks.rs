use crate::foundation::error::FrameResult;
use crate::plan::job::FramePlan;
use crate::sequence::model::Sequence;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One unit of farm work: a chunk of frames and the command that renders it.
pub struct TaskSpec {
    /// Compact frame spec of the chunk.
    pub frames: String,
    /// Command template with every token expanded.
    pub command: String,
}

/// Build one task per chunk of the plan's main sequence.
///
/// On top of [`FramePlan::job_tokens`] the template may use `chunk`,
/// `chunk_start`, `chunk_end`, `chunk_step` (1 when the chunk has no single
/// step), `chunk_length` and `chunks`. `chunks` holds the chunk intersected
/// with each source, written as `start:end%step` blocks joined by `"; "`.
///
/// ```
/// use framespec::{ChunkOptions, FramePlan, Sequence, plan_tasks};
///
/// let main = Sequence::create_with("1-6", ChunkOptions::with_size(3))?;
/// let tasks = plan_tasks(&FramePlan::new(main), "render -s <chunk_start> -e <chunk_end>")?;
/// assert_eq!(tasks[1].frames, "4-6");
/// assert_eq!(tasks[1].command, "render -s 4 -e 6");
/// # Ok::<(), framespec::FrameError>(())
/// ```
#[tracing::instrument(skip(plan), fields(frames = plan.main().len()))]
pub fn plan_tasks(plan: &FramePlan, template: &str) -> FrameResult<Vec<TaskSpec>> {
    let job_tokens = plan.job_tokens();
    let tasks = plan
        .main()
        .chunks()
        .iter()
        .map(|chunk| {
            let mut tokens = job_tokens.clone();
            tokens
                .insert("chunk", chunk)
                .insert("chunk_start", chunk.start())
                .insert("chunk_end", chunk.end())
                .insert("chunk_step", chunk.step().unwrap_or(1))
                .insert("chunk_length", chunk.len())
                .insert("chunks", source_chunks(chunk, plan));
            Ok(TaskSpec {
                frames: chunk.to_string(),
                command: tokens.evaluate_item(template)?,
            })
        })
        .collect::<FrameResult<Vec<_>>>()?;

    tracing::debug!(tasks = tasks.len(), "planned tasks");
    Ok(tasks)
}

fn source_chunks(chunk: &Sequence, plan: &FramePlan) -> String {
    if plan.sources().is_empty() {
        return chunk.to_custom(":", "%", "; ");
    }
    plan.sources()
        .iter()
        .filter_map(|source| chunk.intersection(source))
        .map(|common| common.to_custom(":", "%", "; "))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/plan/tasks.rs"]
mod tests;
