use crate::render::TranscriptRenderer;
use clap::Args;
use lifecare_triage::dialogue::{create_conversation, Instruction, TriageResult};
use lifecare_triage::error::AppError;
use std::io::{self, Write};

const DEMO_BANNER: &str = "[demo] Scripted Lifecare triage walkthrough. Educational use only.";

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Age group answer (child, adult, older adult)
    #[arg(long, default_value = "adult")]
    pub(crate) age: String,
    /// Main complaint in free text
    #[arg(long, default_value = "chest pain")]
    pub(crate) complaint: String,
    /// Answer to the red-flag follow-up (yes / no)
    #[arg(long, default_value = "no")]
    pub(crate) red_flag: String,
    /// Overall severity (low, moderate, high)
    #[arg(long, default_value = "moderate")]
    pub(crate) severity: String,
    /// Information-mode questions to ask once the triage completes
    #[arg(long = "question")]
    pub(crate) questions: Vec<String>,
    /// Omit the summary panel from the transcript
    #[arg(long)]
    pub(crate) hide_summary: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let stdout = io::stdout();
    write_demo(&args, stdout.lock())?;
    Ok(())
}

/// Replays one scripted triage followed by the requested questions.
pub(crate) fn write_demo<W: Write>(args: &DemoArgs, output: W) -> io::Result<Option<TriageResult>> {
    let mut conversation = create_conversation();
    let mut renderer = TranscriptRenderer::new(output, true, !args.hide_summary);

    renderer.render(&[Instruction::bot(DEMO_BANNER)])?;
    renderer.render(&conversation.start())?;

    let script = ["symptom triage", &args.age, &args.complaint, &args.red_flag, &args.severity];
    for utterance in script
        .into_iter()
        .chain(args.questions.iter().map(String::as_str))
    {
        renderer.render(&conversation.submit(utterance, false))?;
    }

    let result = conversation.latest_result().cloned();
    let mut output = renderer.into_inner();
    match &result {
        Some(result) => writeln!(
            output,
            "\nDemo verdict: {} risk ({})",
            result.risk.label(),
            result.category_label()
        )?,
        None => writeln!(
            output,
            "\nDemo verdict: triage did not complete (stopped at {})",
            conversation.state().step.label()
        )?,
    }

    Ok(result)
}
