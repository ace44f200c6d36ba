use crate::render::TranscriptRenderer;
use clap::Args;
use lifecare_triage::config::AppConfig;
use lifecare_triage::dialogue::create_conversation;
use lifecare_triage::error::AppError;
use lifecare_triage::telemetry;
use std::io::{self, BufRead, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct ChatArgs {
    /// Do not print the summary panel after each step
    #[arg(long)]
    pub(crate) hide_summary: bool,
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = chat_loop(stdin.lock(), stdout.lock(), !args.hide_summary)?;
    output.flush()?;
    Ok(())
}

/// Terminal adapter: each input line is one turn. Numbers pick the offered quick replies.
///
/// `/summary` reprints the panel, `/restart` starts over, `/quit` or end of input leaves.
pub(crate) fn chat_loop<R, W>(input: R, output: W, show_summary: bool) -> io::Result<W>
where
    R: BufRead,
    W: Write,
{
    let mut conversation = create_conversation();
    let mut renderer = TranscriptRenderer::new(output, false, show_summary);
    renderer.render(&conversation.start())?;

    for line in input.lines() {
        let line = line?;
        let instructions = match line.trim() {
            "/quit" | "/exit" => break,
            "/restart" => conversation.start(),
            "/summary" => {
                renderer.render_summary(&conversation.summary())?;
                continue;
            }
            _ => match renderer.resolve_choice(&line) {
                Some(option) => {
                    let value = option.value.clone();
                    conversation.submit(&value, true)
                }
                None => conversation.submit(&line, false),
            },
        };
        renderer.render(&instructions)?;
    }

    let mut output = renderer.into_inner();
    writeln!(output, "lifecare> Goodbye. For real health concerns, please contact a clinician.")?;
    Ok(output)
}
