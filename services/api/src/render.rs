use lifecare_triage::dialogue::{Instruction, QuickReplyOption, Speaker, SummaryDisplay};
use std::io::{self, Write};

/// Plain-text rendering of engine instructions for terminal adapters.
pub(crate) struct TranscriptRenderer<W> {
    out: W,
    echo_user: bool,
    show_summary: bool,
    replies: Vec<QuickReplyOption>,
}

impl<W: Write> TranscriptRenderer<W> {
    pub(crate) fn new(out: W, echo_user: bool, show_summary: bool) -> Self {
        Self {
            out,
            echo_user,
            show_summary,
            replies: Vec::new(),
        }
    }

    pub(crate) fn render(&mut self, instructions: &[Instruction]) -> io::Result<()> {
        for instruction in instructions {
            match instruction {
                Instruction::ShowMessage {
                    text,
                    speaker: Speaker::Bot,
                } => writeln!(self.out, "lifecare> {text}")?,
                Instruction::ShowMessage {
                    text,
                    speaker: Speaker::User,
                } => {
                    if self.echo_user {
                        writeln!(self.out, "you> {text}")?;
                    }
                }
                Instruction::SetQuickReplies { options } => {
                    self.replies = options.clone();
                    self.write_replies()?;
                }
                Instruction::SetSummaryDisplay { summary } => {
                    if self.show_summary {
                        self.render_summary(summary)?;
                    }
                }
            }
        }
        self.out.flush()
    }

    fn write_replies(&mut self) -> io::Result<()> {
        if self.replies.is_empty() {
            return Ok(());
        }

        let choices = self
            .replies
            .iter()
            .enumerate()
            .map(|(index, option)| format!("[{}] {}", index + 1, option.label))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(self.out, "          {choices}")
    }

    pub(crate) fn render_summary(&mut self, summary: &SummaryDisplay) -> io::Result<()> {
        writeln!(self.out, "  +- {} | {}", summary.step_label, summary.risk_label)?;
        writeln!(self.out, "  |  Age group: {}", summary.age_group)?;
        writeln!(self.out, "  |  Complaint: {}", summary.complaint)?;
        writeln!(self.out, "  |  Red flags: {}", summary.red_flags)?;
        writeln!(self.out, "  |  Severity:  {}", summary.severity)?;
        writeln!(self.out, "  |  {}", summary.category)?;
        writeln!(self.out, "  +- {}", summary.next_step)
    }

    /// Maps a typed number onto the quick reply currently on offer.
    pub(crate) fn resolve_choice(&self, input: &str) -> Option<&QuickReplyOption> {
        let index = input.trim().parse::<usize>().ok()?;
        index.checked_sub(1).and_then(|index| self.replies.get(index))
    }

    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifecare_triage::dialogue::create_conversation;

    #[test]
    fn numbered_choices_resolve_to_reply_values() {
        let mut conversation = create_conversation();
        let mut renderer = TranscriptRenderer::new(Vec::new(), true, false);
        renderer
            .render(&conversation.start())
            .expect("render succeeds");

        assert_eq!(
            renderer.resolve_choice("1").map(|option| option.value.as_str()),
            Some("mode_triage")
        );
        assert!(renderer.resolve_choice("0").is_none());
        assert!(renderer.resolve_choice("7").is_none());

        let output = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert!(output.contains("[1] Symptom triage  [2] Ask a question"));
        assert!(!output.contains("Age group"));
    }
}
